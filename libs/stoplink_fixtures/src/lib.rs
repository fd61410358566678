//! On-disk sample data for the tests and benchmarks of `stoplink`.
//!
//! The corridor dataset is a single street of five blocks running east
//! along the equator, with a link in each direction per block. Shape 1
//! runs eastbound over links `1001..=1005`. Shape 2 runs westbound over
//! links `2005..=2001`, with its match broken after the second block.

use std::path::PathBuf;

/// Network tables (`node.csv`, `link.csv`) of the corridor.
pub const CORRIDOR_NETWORK: &str = "corridor/network";

/// GTFS feed of three trips over the corridor.
pub const CORRIDOR_GTFS: &str = "corridor/gtfs";

/// Path-match dump of both corridor shapes.
pub const CORRIDOR_PATH_MATCH: &str = "corridor/path_match.csv";

/// Absolute path of a fixture, given relative to the data directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}
