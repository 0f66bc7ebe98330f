use anyhow::Result;
use leadmap::{LocationInput, NewLead};

use crate::cli::{AddArgs, Cli};

pub fn run(cli: &Cli, args: &AddArgs) -> Result<()> {
    let settings = super::settings(cli)?;
    let mut dash = super::open(cli, &settings)?;

    let location = match (&args.lat, &args.lon) {
        (Some(latitude), Some(longitude)) => LocationInput::Manual {
            latitude: latitude.clone(),
            longitude: longitude.clone(),
        },
        _ if settings.use_current_location => LocationInput::Current,
        // Manual entry is on but nothing was entered; let validation say so.
        _ => LocationInput::Manual { latitude: String::new(), longitude: String::new() },
    };

    let lead = dash.add(NewLead { name: args.name.clone(), score: args.score.clone(), location })?;
    println!("[add] {} {} score={} at {}", lead.id, lead.name, lead.score, lead.location);

    Ok(())
}
