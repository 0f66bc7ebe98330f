use anyhow::{Context, Result};
use leadmap::{samples_around, LocationProvider, LocationInput, NewLead};
use tracing::warn;

use crate::cli::{Cli, SeedArgs};

pub fn run(cli: &Cli, args: &SeedArgs) -> Result<()> {
    let settings = super::settings(cli)?;
    let mut dash = super::open(cli, &settings)?;

    let here = cli.at.current_position().context("seeding needs --at")?;
    for (name, at) in samples_around(&here) {
        let new = NewLead {
            name: name.to_string(),
            score: args.score.clone(),
            location: LocationInput::Manual {
                latitude: at.latitude.to_string(),
                longitude: at.longitude.to_string(),
            },
        };
        match dash.add(new) {
            Ok(lead) => println!("[seed] {} {} at {}", lead.id, lead.name, lead.location),
            Err(err) => warn!("skipping {name}: {err:#}"),
        }
    }

    Ok(())
}
