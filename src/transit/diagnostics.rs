use crate::gtfs::{ShapeId, StopTime};
use crate::network::{LinkId, PointOnLink};
use crate::path::MatchedPosition;

use geo::Point;
use std::collections::BTreeMap;

/// How a single stop of a trip was matched.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    pub seq: u32,
    /// Position of the stop.
    pub position: Point,
    /// Where the stop was matched, `None` for a stop without any match.
    pub point_on_link: Option<PointOnLink>,
    pub restart: bool,
    pub total_dist: f64,
    pub total_cost: f64,
    pub route_info: Vec<LinkId>,
}

impl DiagnosticRecord {
    fn matched(seq: u32, position: &MatchedPosition) -> Self {
        Self {
            seq,
            position: position.position,
            point_on_link: Some(position.point_on_link),
            restart: position.restart,
            total_dist: position.total_dist,
            total_cost: position.total_cost,
            route_info: position.route_info.clone(),
        }
    }

    /// Stands in for a stop the search never placed; marked as a
    /// restart so that reports show the break in the path.
    fn placeholder(stop_time: &StopTime) -> Self {
        Self {
            seq: stop_time.seq,
            position: stop_time.stop.position,
            point_on_link: None,
            restart: true,
            total_dist: 0.0,
            total_cost: 0.0,
            route_info: vec![],
        }
    }

    #[inline]
    pub fn link(&self) -> Option<LinkId> {
        self.point_on_link.map(|point| point.link)
    }
}

/// Match records of the stops of each shape, ordered by stop sequence.
///
/// Trips sharing a shape overwrite each other, so each shape reports
/// the most recently processed of its trips.
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    shapes: BTreeMap<ShapeId, BTreeMap<u32, DiagnosticRecord>>,
}

impl DiagnosticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the stop matches of a trip on `shape`.
    ///
    /// Every match is recorded, and a placeholder stands in for each
    /// unplaced stop which has no match at all.
    pub fn record<'a>(
        &mut self,
        shape: ShapeId,
        matches: &[MatchedPosition],
        unmatched: impl IntoIterator<Item = &'a StopTime>,
    ) {
        let mut records = matches
            .iter()
            .filter_map(|position| Some((position.seq?, position)))
            .map(|(seq, position)| (seq, DiagnosticRecord::matched(seq, position)))
            .collect::<BTreeMap<_, _>>();

        for stop_time in unmatched {
            records
                .entry(stop_time.seq)
                .or_insert_with(|| DiagnosticRecord::placeholder(stop_time));
        }

        self.shapes.insert(shape, records);
    }

    pub fn get(&self, shape: &ShapeId) -> Option<&BTreeMap<u32, DiagnosticRecord>> {
        self.shapes.get(shape)
    }

    /// Every record, ordered by shape and then stop sequence.
    pub fn records(&self) -> impl Iterator<Item = (ShapeId, &DiagnosticRecord)> + '_ {
        self.shapes
            .iter()
            .flat_map(|(shape, records)| records.values().map(move |record| (*shape, record)))
    }

    pub fn len(&self) -> usize {
        self.shapes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
