use anyhow::Result;

use crate::cli::{Cli, NearbyArgs};

pub fn run(cli: &Cli, args: &NearbyArgs) -> Result<()> {
    let settings = super::settings(cli)?;
    let dash = super::open(cli, &settings)?;

    let hits = dash.nearby(args.radius)?;
    println!("[nearby] {} lead(s) within {} km", hits.len(), args.radius);
    for hit in hits {
        println!("  {:<24} {:.2} km away", hit.lead.name, hit.distance_km);
    }

    Ok(())
}
