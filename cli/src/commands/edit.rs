use anyhow::Result;
use leadmap::{Coordinate, LeadId, LeadPatch};

use crate::cli::{Cli, EditArgs};

pub fn run(cli: &Cli, args: &EditArgs) -> Result<()> {
    let settings = super::settings(cli)?;
    let mut dash = super::open(cli, &settings)?;

    let patch = LeadPatch {
        name: args.name.clone(),
        score: args.score,
        location: args.lat.zip(args.lon).map(|(lat, lon)| Coordinate::new(lat, lon)),
    };

    let lead = dash.edit(&LeadId::from(args.id.as_str()), patch)?;
    println!("[edit] {} {} score={} at {}", lead.id, lead.name, lead.score, lead.location);

    Ok(())
}
