use std::path::PathBuf;

use leadmap::{Coordinate, SortKey};

/// Lead dashboard CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "leadmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (JSON)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Lead store file, overrides the settings file
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub store: Option<PathBuf>,

    /// Current device position as "lat,lon"; without it location is unavailable
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub at: Option<Coordinate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Add a lead at the current position or at --lat/--lon
    Add(AddArgs),

    /// Change the name, score or position of a lead
    Edit(EditArgs),

    /// Delete a lead by id
    Delete(DeleteArgs),

    /// List leads ranked by score or distance; the best lead is starred
    List(ListArgs),

    /// List leads within a radius of the current position, nearest first
    Nearby(NearbyArgs),

    /// Great-circle distance between two "lat,lon" points
    Distance(DistanceArgs),

    /// Add the three demo leads around the current position
    Seed(SeedArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Display name, unique ignoring case
    pub name: String,

    /// Match score, 0-100
    pub score: String,

    /// Latitude, for manual entry
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude, for manual entry
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Lead id
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New match score, 0-100
    #[arg(long)]
    pub score: Option<u8>,

    /// New latitude
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// New longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Lead id
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Sort key ("score" or "distance"), defaults to the settings file
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Show every lead regardless of score
    #[arg(long, conflicts_with = "min_score")]
    pub all: bool,

    /// Show only leads scoring above this value
    #[arg(long)]
    pub min_score: Option<u8>,
}

#[derive(clap::Args, Debug)]
pub struct NearbyArgs {
    /// Search radius in km
    #[arg(short, long, default_value_t = 1.0)]
    pub radius: f64,
}

#[derive(clap::Args, Debug)]
pub struct DistanceArgs {
    /// First point, "lat,lon"
    #[arg(allow_hyphen_values = true)]
    pub from: Coordinate,

    /// Second point, "lat,lon"
    #[arg(allow_hyphen_values = true)]
    pub to: Coordinate,
}

#[derive(clap::Args, Debug)]
pub struct SeedArgs {
    /// Match score given to every demo lead
    #[arg(long, default_value = "75")]
    pub score: String,
}
