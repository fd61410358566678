use anyhow::Context;
use chrono::NaiveTime;
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;

use stoplink::config::{Config, DEFAULT_END_TIME, DEFAULT_RADIUS};
use stoplink::util::initialize_logger;

/// Places the stops of a GTFS feed onto the links of a road network,
/// following previously map-matched transit paths, and writes the
/// tables read by the simulation tool into the output directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the network's node.csv and link.csv
    network_dir: PathBuf,

    /// Name of the network, written into every table header
    network_name: String,

    /// Name of the user, written into every table header
    user_name: String,

    /// Directory holding the GTFS feed
    gtfs_dir: PathBuf,

    /// The path-match results of the feed's shapes
    path_match_file: PathBuf,

    /// Zero-reference time for the frequency offsets, as HH:MM:SS
    #[arg(short = 't', value_parser = parse_time)]
    reference_time: NaiveTime,

    /// End of the service period, in seconds
    #[arg(short = 'e', default_value_t = DEFAULT_END_TIME)]
    end_time: u32,

    /// Restricts the trips to the given service ID; may be repeated
    #[arg(short = 'c')]
    services: Vec<String>,

    /// Writes problem_report.csv on the stop matches
    #[arg(short = 'p')]
    problem_report: bool,

    /// Radius within which stops are matched to links, in meters
    #[arg(short, long, env = "STOPLINK_RADIUS", default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// Directory the tables are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            network_dir: args.network_dir,
            gtfs_dir: args.gtfs_dir,
            path_match_file: args.path_match_file,
            output_dir: args.output,
            user: args.user_name,
            network_name: args.network_name,
            reference_time: args.reference_time,
            end_time: args.end_time,
            services: args.services.into_iter().collect::<BTreeSet<_>>(),
            problem_report: args.problem_report,
            radius: args.radius,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    initialize_logger();

    let config = Config::from(Args::parse());
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    stoplink::run(&config).context("linking stops")?;
    Ok(())
}
