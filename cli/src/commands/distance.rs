use anyhow::Result;
use leadmap::distance_km;

use crate::cli::{Cli, DistanceArgs};

pub fn run(_cli: &Cli, args: &DistanceArgs) -> Result<()> {
    println!("{:.2}", distance_km(&args.from, &args.to));
    Ok(())
}
