use crate::gtfs::{StopTime, Trip};
use crate::matcher::{MatchError, PathEngine, PathEngineConfig, PathMatcher};
use crate::network::Network;
use crate::path::PathDump;
use crate::transit::{
    assign_trip, build_subgraph, project_stops, select_segment, AssignmentMap,
    DiagnosticsCollector, RouteLinkRow,
};

use log::{debug, warn};

/// Places the stops of trips onto the links of their matched paths.
///
/// Trips are linked one at a time. Every trip sees the placements of
/// the trips linked before it, as a stop keeps the first link it is
/// placed on.
pub struct StopLinker<'a, M = PathEngine> {
    network: &'a Network,
    paths: &'a PathDump,
    matcher: M,
    dwell_time: u32,
    assignments: AssignmentMap,
    diagnostics: Option<DiagnosticsCollector>,
}

impl<'a> StopLinker<'a, PathEngine> {
    /// Links with the stop search configured for the given `radius`, in meters.
    pub fn new(network: &'a Network, paths: &'a PathDump, radius: f64) -> Self {
        let matcher = PathEngine::new(PathEngineConfig::stop_search(radius));
        Self::with_matcher(network, paths, matcher)
    }
}

impl<'a, M: PathMatcher> StopLinker<'a, M> {
    pub fn with_matcher(network: &'a Network, paths: &'a PathDump, matcher: M) -> Self {
        Self {
            network,
            paths,
            matcher,
            dwell_time: 0,
            assignments: AssignmentMap::default(),
            diagnostics: None,
        }
    }

    pub fn dwell_time(mut self, seconds: u32) -> Self {
        self.dwell_time = seconds;
        self
    }

    /// Collects a [`DiagnosticsCollector`] while linking, if `enabled`.
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled.then(DiagnosticsCollector::new);
        self
    }

    pub fn assignments(&self) -> &AssignmentMap {
        &self.assignments
    }

    pub fn collector(&self) -> Option<&DiagnosticsCollector> {
        self.diagnostics.as_ref()
    }

    pub fn finish(self) -> (AssignmentMap, Option<DiagnosticsCollector>) {
        (self.assignments, self.diagnostics)
    }

    /// Links a single trip, returning its route-link rows.
    ///
    /// Returns `Ok(None)` when the trip has no usable path, in which
    /// case it is skipped with a warning. A failure of the stop search
    /// is returned as an error.
    pub fn link_trip(
        &mut self,
        trip: &Trip,
        stop_times: &[StopTime],
    ) -> Result<Option<Vec<RouteLinkRow>>, MatchError> {
        let Some(path) = self.paths.get(&trip.shape_id) else {
            warn!("Trip {} has no matched path for shape ID {}", trip.id, trip.shape_id);
            return Ok(None);
        };

        let Some(segment) = select_segment(path) else {
            warn!("Trip {} has no usable path on shape ID {}, skipping it", trip.id, trip.shape_id);
            return Ok(None);
        };

        let run = &path[segment.range.clone()];
        if run.len() < path.len() {
            let seq = |index: usize| path[index].seq.map_or(-1, i64::from);
            warn!(
                "For shape ID {} from seq. {} through {}, {:.2}% of {} links will be used.",
                trip.shape_id,
                seq(segment.range.start),
                seq(segment.range.end - 1),
                segment.link_share(),
                segment.total_links
            );
        }

        let Some(subgraph) = build_subgraph(run, self.network) else {
            warn!("Trip {} could not be rebuilt from shape ID {}, skipping it", trip.id, trip.shape_id);
            return Ok(None);
        };

        debug!(
            "Trip {} runs over {} links between nodes {} and {}",
            trip.id,
            subgraph.links.len(),
            subgraph.start,
            subgraph.end
        );

        let matches = project_stops(&self.matcher, &subgraph, stop_times)?;
        let assignment = assign_trip(
            trip.id,
            segment.range.start,
            &subgraph.links,
            &matches,
            stop_times,
            self.dwell_time,
            &mut self.assignments,
        );

        let unmatched = assignment.unmatched(stop_times).collect::<Vec<_>>();
        for stop_time in &unmatched {
            warn!(
                "Trip tripID {}, stopID {} stop seq. {} will not be in the bus_route_link file.",
                trip.id, stop_time.stop.id, stop_time.seq
            );
        }

        if let Some(diagnostics) = self.diagnostics.as_mut() {
            diagnostics.record(trip.shape_id, &matches, unmatched);
        }

        Ok(Some(assignment.rows))
    }
}
