use crate::gtfs::{StopTimes, Stops, Trips};
use crate::output::{OutputError, TableWriter};
use crate::transit::{AssignmentMap, RouteLinkRow};

use chrono::NaiveTime;
use log::{info, warn};
use std::io::Write;

/// Every trip is run in a single period covering the whole day.
const PERIOD_ID: u32 = 1;
const FREQUENCY: u32 = 86_400;
const PREEMPTION: u32 = 0;

/// One row per trip: its identifier and the name of its route.
pub fn write_routes<W: Write>(writer: &mut TableWriter<W>, trips: &Trips) -> Result<(), OutputError> {
    for trip in trips.values() {
        writer.write((trip.id, trip.route.display_name()))?;
    }

    Ok(())
}

pub fn write_route_links<W: Write>(
    writer: &mut TableWriter<W>,
    rows: &[RouteLinkRow],
) -> Result<(), OutputError> {
    rows.iter().try_for_each(|row| writer.write(row))
}

/// One row per placed stop, in the order the stops were first placed.
/// The distance along the link is truncated to whole meters.
pub fn write_stops<W: Write>(
    writer: &mut TableWriter<W>,
    assignments: &AssignmentMap,
    stops: &Stops,
) -> Result<(), OutputError> {
    for (stop_id, point) in assignments {
        let Some(stop) = stops.get(stop_id) else {
            warn!("Stop {stop_id} was placed but is not in the feed");
            continue;
        };

        writer.write((stop.id, point.link, &stop.name, point.dist as i64))?;
    }

    info!("Placed {} stops", assignments.len());
    Ok(())
}

/// One row per trip, offset from `reference` to the trip's first call.
pub fn write_frequencies<W: Write>(
    writer: &mut TableWriter<W>,
    trips: &Trips,
    stop_times: &StopTimes,
    reference: NaiveTime,
) -> Result<(), OutputError> {
    for trip in trips.values() {
        let first = stop_times
            .get(&trip.id)
            .and_then(|calls| calls.first())
            .and_then(|call| call.time());

        let Some(first) = first else {
            warn!("Trip {} has no scheduled time, leaving it out of the frequencies", trip.id);
            continue;
        };

        writer.write((
            trip.id,
            PERIOD_ID,
            FREQUENCY,
            first.offset_from(reference),
            PREEMPTION,
        ))?;
    }

    Ok(())
}

/// The single period, from the start of the day through `end` seconds.
pub fn write_period<W: Write>(writer: &mut TableWriter<W>, end: u32) -> Result<(), OutputError> {
    writer.write((PERIOD_ID, 0, end))
}
