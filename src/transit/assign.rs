use crate::gtfs::{StopId, StopTime, TripId};
use crate::network::{LinkId, PointOnLink};
use crate::path::MatchedPosition;

use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// The link each stop is placed on, in order of first placement.
pub type AssignmentMap = IndexMap<StopId, PointOnLink>;

/// A row of the route-link table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLinkRow {
    pub trip_id: TripId,
    pub sequence: usize,
    pub link_id: LinkId,
    /// The stop placed on the link, if any.
    pub stop_id: Option<StopId>,
    /// Present exactly when a stop is.
    pub dwell_time: Option<u32>,
}

/// The outcome of placing one trip's stops.
#[derive(Debug, Clone, Default)]
pub struct TripAssignment {
    pub rows: Vec<RouteLinkRow>,
    /// Stop sequences which matched a link of the trip.
    pub found: BTreeSet<u32>,
}

impl TripAssignment {
    /// Stop times of the trip which were not placed on any link.
    pub fn unmatched<'a>(&'a self, stop_times: &'a [StopTime]) -> impl Iterator<Item = &'a StopTime> {
        stop_times
            .iter()
            .filter(|stop_time| !self.found.contains(&stop_time.seq))
    }
}

/// Splits `matches` into runs of consecutive entries on the same link.
fn groups(matches: &[MatchedPosition]) -> Vec<(LinkId, Range<usize>)> {
    let mut groups: Vec<(LinkId, Range<usize>)> = vec![];

    for (index, position) in matches.iter().enumerate() {
        match groups.last_mut() {
            Some((link, range)) if *link == position.link() => range.end = index + 1,
            _ => groups.push((position.link(), index..index + 1)),
        }
    }

    groups
}

/// The entry closest to its link. Ties keep the earliest.
fn representative(group: &[MatchedPosition]) -> Option<&MatchedPosition> {
    group.iter().reduce(|best, position| {
        match position.point_on_link.ref_dist < best.point_on_link.ref_dist {
            true => position,
            false => best,
        }
    })
}

/// Records `stop` as placed at `point`, unless it was already placed.
///
/// The first placement of a stop is kept: placing it again on the same
/// link changes nothing, and placing it on another link is reported and
/// ignored. Returns whether the stop was newly placed.
pub fn merge_assignment(map: &mut AssignmentMap, stop: StopId, point: PointOnLink) -> bool {
    match map.get(&stop) {
        None => {
            map.insert(stop, point);
            true
        }
        Some(existing) if existing.link == point.link => false,
        Some(existing) => {
            warn!(
                "stopID {stop} is attempted to be assigned to linkID {}, but it had already been assigned to linkID {}",
                point.link, existing.link
            );
            false
        }
    }
}

/// Places the stops of a trip onto its links.
///
/// `links` are walked in order alongside the groups of `matches` on the
/// same link. For each link, the first group at or after the cursor
/// which lies on it supplies the link's stop; the groups passed over
/// place nothing. Where several stops matched the link, the one closest
/// to it is kept. Rows are numbered from `offset`.
pub fn assign_trip(
    trip_id: TripId,
    offset: usize,
    links: &[LinkId],
    matches: &[MatchedPosition],
    stop_times: &[StopTime],
    dwell_time: u32,
    assignments: &mut AssignmentMap,
) -> TripAssignment {
    let stops: BTreeMap<u32, &StopTime> = stop_times
        .iter()
        .map(|stop_time| (stop_time.seq, stop_time))
        .collect();

    let groups = groups(matches);
    let mut cursor = 0;
    let mut assignment = TripAssignment::default();

    for (index, link) in links.iter().enumerate() {
        let placed = groups[cursor.min(groups.len())..]
            .iter()
            .position(|(group_link, _)| group_link == link)
            .map(|skip| cursor + skip);

        let stop = placed.and_then(|group| {
            let entries = &matches[groups[group].1.clone()];
            cursor = group + 1;

            assignment
                .found
                .extend(entries.iter().filter_map(|entry| entry.seq));

            let kept = representative(entries)?;
            let stop_time = stops.get(&kept.seq?)?;

            if entries.len() > 1 {
                let dropped = entries
                    .iter()
                    .filter(|entry| !std::ptr::eq(*entry, kept))
                    .filter_map(|entry| entry.seq)
                    .map(|seq| match stops.get(&seq) {
                        Some(dropped) => format!("Stop {} (Seq {seq})", dropped.stop.id),
                        None => format!("Seq {seq}"),
                    })
                    .join(", ");

                warn!(
                    "{} stops have been matched for TripID {trip_id}, LinkID {link}. Keeping Stop {}, Stop Seq {}. Dropping {dropped}",
                    entries.len(),
                    stop_time.stop.id,
                    stop_time.seq
                );
            }

            merge_assignment(assignments, stop_time.stop.id, kept.point_on_link);
            Some(stop_time.stop.id)
        });

        assignment.rows.push(RouteLinkRow {
            trip_id,
            sequence: offset + index,
            link_id: *link,
            stop_id: stop,
            dwell_time: stop.map(|_| dwell_time),
        });
    }

    assignment
}
