use chrono::NaiveTime;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const DEFAULT_RADIUS: f64 = 800.0;
pub const DEFAULT_END_TIME: u32 = 86_400;

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `node.csv` and `link.csv`.
    pub network_dir: PathBuf,
    /// Directory holding the GTFS feed.
    pub gtfs_dir: PathBuf,
    /// The path-match dump the stops are placed along.
    pub path_match_file: PathBuf,
    /// Directory the tables are written to.
    pub output_dir: PathBuf,

    pub user: String,
    pub network_name: String,

    /// Time of day the frequency offsets are measured from.
    pub reference_time: NaiveTime,
    /// End of the single service period, in seconds.
    pub end_time: u32,
    /// Services whose trips are linked. Empty links every service.
    pub services: BTreeSet<String>,

    /// Whether `problem_report.csv` is written.
    pub problem_report: bool,
    /// Radius, in meters, within which stops are matched to links.
    pub radius: f64,
    /// Seconds a vehicle waits at each stop.
    pub dwell_time: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_dir: PathBuf::new(),
            gtfs_dir: PathBuf::new(),
            path_match_file: PathBuf::new(),
            output_dir: PathBuf::from("."),
            user: String::new(),
            network_name: String::new(),
            reference_time: NaiveTime::MIN,
            end_time: DEFAULT_END_TIME,
            services: BTreeSet::new(),
            problem_report: false,
            radius: DEFAULT_RADIUS,
            dwell_time: 0,
        }
    }
}
