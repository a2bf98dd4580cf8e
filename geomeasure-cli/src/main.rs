use anyhow::Result;
use clap::{Parser, Subcommand};
use geomeasure::Unit;
use std::path::PathBuf;

mod commands;

/// Great-circle measurement CLI tool
#[derive(Parser)]
#[command(name = "geomeasure")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Length unit for distances (meters, kilometers, miles, ...)
    #[arg(short, long, env = "GEOMEASURE_UNITS", global = true)]
    units: Option<Unit>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance between two points
    Distance {
        #[command(flatten)]
        pair: PairArgs,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Initial bearing from the first point toward the second
    Bearing {
        #[command(flatten)]
        pair: PairArgs,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Point reached by travelling a distance along a bearing
    Destination {
        /// Origin latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Origin longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Distance to travel, in --units
        #[arg(short, long)]
        distance: f64,

        /// Bearing in degrees clockwise from north
        #[arg(short, long, allow_hyphen_values = true)]
        bearing: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Point halfway along the great circle between two points
    Midpoint {
        #[command(flatten)]
        pair: PairArgs,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Find the candidate closest to a reference point
    Nearest {
        /// Candidate file (CSV with lat/lon columns, or GeoJSON)
        input: PathBuf,

        /// Reference latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Reference longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "lon")]
        lon_col: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Append distance and bearing columns to a CSV of point pairs
    Batch {
        /// Input CSV with lat_a, lon_a, lat_b, lon_b columns
        input: PathBuf,

        /// Output file (defaults to <input>_measured.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the supported units
    Units,
}

/// Two points given as `--lat-a --lon-a --lat-b --lon-b`.
#[derive(clap::Args)]
struct PairArgs {
    /// Latitude of the first point
    #[arg(long, allow_hyphen_values = true)]
    lat_a: f64,

    /// Longitude of the first point
    #[arg(long, allow_hyphen_values = true)]
    lon_a: f64,

    /// Latitude of the second point
    #[arg(long, allow_hyphen_values = true)]
    lat_b: f64,

    /// Longitude of the second point
    #[arg(long, allow_hyphen_values = true)]
    lon_b: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let length_unit = cli.units.unwrap_or(Unit::Meters);

    match cli.command {
        Commands::Distance { pair, json } => {
            commands::measure::distance(pair.into(), length_unit, json)
        }
        Commands::Bearing { pair, json } => commands::measure::bearing(pair.into(), json),
        Commands::Destination {
            lat,
            lon,
            distance,
            bearing,
            json,
        } => commands::measure::destination(
            geomeasure::Point::new(lat, lon),
            distance,
            bearing,
            length_unit,
            json,
        ),
        Commands::Midpoint { pair, json } => commands::measure::midpoint(pair.into(), json),
        Commands::Nearest {
            input,
            lat,
            lon,
            lat_col,
            lon_col,
            json,
        } => commands::nearest::run(
            &input,
            geomeasure::Point::new(lat, lon),
            &lat_col,
            &lon_col,
            cli.units.unwrap_or(Unit::Kilometers),
            json,
        ),
        Commands::Batch { input, output } => commands::batch::run(&input, output, length_unit),
        Commands::Units => commands::units::run(),
    }
}

impl From<PairArgs> for commands::measure::Pair {
    fn from(args: PairArgs) -> Self {
        Self {
            a: geomeasure::Point::new(args.lat_a, args.lon_a),
            b: geomeasure::Point::new(args.lat_b, args.lon_b),
        }
    }
}
