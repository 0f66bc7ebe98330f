use anyhow::Result;
use leadmap::LeadId;

use crate::cli::{Cli, DeleteArgs};

pub fn run(cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let settings = super::settings(cli)?;
    let mut dash = super::open(cli, &settings)?;

    let removed = dash.delete(&LeadId::from(args.id.as_str()))?;
    println!("[delete] {} {}", removed.id, removed.name);

    Ok(())
}
