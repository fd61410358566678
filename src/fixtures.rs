//! Synthetic networks and paths shared by the unit tests.
//!
//! The corridor runs east along the equator: node `k` sits at
//! longitude `(k - 1) * STEP`, and link `k * 10` joins node `k`
//! to node `k + 1` (roughly 111m per link).

use crate::gtfs::{Route, Stop, StopId, StopTime, Trip, TripId};
use crate::network::{LinkId, Network, Node, NodeId, PointOnLink};
use crate::path::MatchedPosition;

use geo::Point;

pub(crate) const STEP: f64 = 0.001;

pub(crate) fn node_position(node: NodeId) -> Point {
    Point::new((node - 1) as f64 * STEP, 0.0)
}

pub(crate) fn link_id(k: i64) -> LinkId {
    k * 10
}

/// A straight corridor of `links` consecutive links.
pub(crate) fn corridor(links: i64) -> Network {
    let nodes = (1..=links + 1).map(|k| Node::new(node_position(k), k));
    let links = (1..=links).map(|k| (link_id(k), k, k + 1));

    Network::from_parts(nodes, links).expect("corridor must build")
}

/// A point `fraction` of the way along corridor link `k`,
/// `north` degrees off the corridor.
pub(crate) fn along(k: i64, fraction: f64, north: f64) -> Point {
    Point::new(((k - 1) as f64 + fraction) * STEP, north)
}

/// A matched position on corridor link `k`, with the links
/// traversed since the previous position.
pub(crate) fn matched(
    seq: u32,
    k: i64,
    route_info: &[i64],
    restart: bool,
    total_dist: f64,
) -> MatchedPosition {
    let position = along(k, 0.5, 0.0);

    MatchedPosition {
        seq: Some(seq),
        position,
        point_on_link: PointOnLink {
            link: link_id(k),
            dist: 55.0,
            ref_dist: 0.0,
            position,
        },
        route_info: route_info.iter().map(|k| link_id(*k)).collect(),
        restart,
        total_dist,
        total_cost: total_dist,
        prev: None,
    }
}

/// Links predecessors within each run, as the matcher would.
pub(crate) fn chain(mut positions: Vec<MatchedPosition>) -> Vec<MatchedPosition> {
    for index in 0..positions.len() {
        positions[index].prev = match index == 0 || positions[index].restart {
            true => None,
            false => Some(index - 1),
        };
    }

    positions
}

pub(crate) fn route() -> Route {
    Route {
        id: "R1".to_string(),
        short_name: "801".to_string(),
        long_name: String::new(),
    }
}

pub(crate) fn trip(id: TripId) -> Trip {
    Trip {
        id,
        route: route(),
        service_id: "WK".to_string(),
        shape_id: 7,
    }
}

pub(crate) fn stop(id: StopId, position: Point) -> Stop {
    Stop {
        id,
        name: format!("Stop {id}"),
        position,
    }
}

pub(crate) fn stop_time(trip: TripId, seq: u32, stop: Stop) -> StopTime {
    StopTime {
        trip_id: trip,
        seq,
        arrival: None,
        departure: None,
        stop,
    }
}
