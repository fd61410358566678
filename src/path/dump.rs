//! Reads the output of the map-matching stage.
//!
//! The dump is a CSV table with one row per matched shape point:
//!
//! ```text
//! shape_id,shape_seq,link_id,link_dist,ref_dist,restart,total_dist,total_cost,route_links
//! 7,1,10,12.5,3.1,true,0.0,0.0,10
//! 7,2,20,40.0,2.4,false,139.0,141.2,10 20
//! ```
//!
//! `route_links` lists the links traversed since the previous row,
//! separated by spaces. Row coordinates come from the GTFS shape.

use crate::gtfs::{ShapeId, Shapes};
use crate::network::{LinkId, Network, PointOnLink};
use crate::path::{DumpError, MatchedPosition};

use geo::Point;
use log::{debug, info};
use serde::{de, Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Matched paths, keyed by the shape they were matched from.
pub type PathDump = BTreeMap<ShapeId, Vec<MatchedPosition>>;

#[derive(Debug, Deserialize)]
struct DumpRecord {
    shape_id: ShapeId,
    shape_seq: u32,
    link_id: LinkId,
    link_dist: f64,
    ref_dist: f64,
    #[serde(deserialize_with = "flag")]
    restart: bool,
    total_dist: f64,
    total_cost: f64,
    #[serde(default)]
    route_links: String,
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = String::deserialize(deserializer)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        other => Err(de::Error::custom(format!("invalid restart flag `{other}`"))),
    }
}

/// Reads a path-match dump from `reader`.
pub fn read_dump(
    reader: impl io::Read,
    shapes: &Shapes,
    network: &Network,
) -> Result<PathDump, DumpError> {
    from_csv(csv::Reader::from_reader(reader), shapes, network)
}

/// Reads the path-match dump stored at `path`.
pub fn read_dump_file(
    path: impl AsRef<Path>,
    shapes: &Shapes,
    network: &Network,
) -> Result<PathDump, DumpError> {
    from_csv(csv::Reader::from_path(path)?, shapes, network)
}

fn from_csv<R: io::Read>(
    mut reader: csv::Reader<R>,
    shapes: &Shapes,
    network: &Network,
) -> Result<PathDump, DumpError> {
    let mut dump = PathDump::new();

    for record in reader.deserialize::<DumpRecord>() {
        let record = record?;
        let (shape, seq) = (record.shape_id, record.shape_seq);

        let position = shapes
            .get(&shape)
            .and_then(|s| s.points.get(&seq))
            .copied()
            .ok_or(DumpError::UnknownShapePoint { shape, seq })?;

        let route_info = record
            .route_links
            .split_whitespace()
            .map(str::parse::<LinkId>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DumpError::InvalidLinkList {
                shape,
                seq,
                value: record.route_links.clone(),
            })?;

        let path = dump.entry(shape).or_default();
        let prev = match record.restart || path.is_empty() {
            true => None,
            false => Some(path.len() - 1),
        };

        path.push(MatchedPosition {
            seq: Some(seq),
            position,
            point_on_link: PointOnLink {
                link: record.link_id,
                dist: record.link_dist,
                ref_dist: record.ref_dist,
                position: on_link(network, record.link_id, record.link_dist).unwrap_or(position),
            },
            route_info,
            restart: record.restart,
            total_dist: record.total_dist,
            total_cost: record.total_cost,
            prev,
        });
    }

    dump.iter()
        .for_each(|(shape, path)| debug!("Shape {shape} has {} matched positions", path.len()));
    info!("Read matched paths for {} shapes", dump.len());

    Ok(dump)
}

/// The position `dist` meters along `link`, if the link is known.
fn on_link(network: &Network, link: LinkId, dist: f64) -> Option<Point> {
    network.link(&link).map(|link| link.point_at(dist))
}
