use anyhow::Result;
use leadmap::RankOptions;

use crate::cli::{Cli, ListArgs};

pub fn run(cli: &Cli, args: &ListArgs) -> Result<()> {
    let settings = super::settings(cli)?;
    let dash = super::open(cli, &settings)?;

    let defaults = settings.rank_options();
    let opts = RankOptions::new(
        args.sort.unwrap_or(defaults.sort_by),
        if args.all { None } else { args.min_score.or(defaults.min_score) },
    );

    let ranking = dash.view(&opts);
    if ranking.is_empty() {
        println!("[list] no leads");
        return Ok(());
    }

    let has_reference = cli.at.is_some();
    for ranked in ranking.iter() {
        let marker = if ranking.is_best(&ranked.lead.id) { "*" } else { " " };
        let distance = if has_reference { format!("{:.2} km", ranked.distance_km) } else { "-".into() };
        println!(
            "{marker} {:<24} score={:<3} distance={:<12} id={}",
            ranked.lead.name, ranked.lead.score, distance, ranked.lead.id,
        );
    }

    Ok(())
}
