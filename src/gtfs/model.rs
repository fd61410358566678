use crate::gtfs::{GtfsTime, ShapeId, StopId, TripId};

use geo::Point;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
}

impl Route {
    /// The name shown in the routes table: the short name, followed
    /// by the long name when one is given.
    pub fn display_name(&self) -> String {
        match self.long_name.is_empty() {
            true => self.short_name.clone(),
            false => format!("{}: {}", self.short_name, self.long_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub route: Route,
    pub service_id: String,
    pub shape_id: ShapeId,
}

/// A scheduled call of a trip at a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTime {
    pub trip_id: TripId,

    /// The `stop_sequence` of the call, unique within its trip.
    pub seq: u32,

    pub arrival: Option<GtfsTime>,
    pub departure: Option<GtfsTime>,

    pub stop: Stop,
}

impl StopTime {
    /// The scheduled time of the call, preferring the arrival.
    pub fn time(&self) -> Option<GtfsTime> {
        self.arrival.or(self.departure)
    }
}

/// The points of a shape, keyed by their `shape_pt_sequence`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub points: BTreeMap<u32, Point>,
}

pub type Shapes = BTreeMap<ShapeId, Shape>;
pub type Stops = BTreeMap<StopId, Stop>;
pub type Trips = BTreeMap<TripId, Trip>;
pub type StopTimes = BTreeMap<TripId, Vec<StopTime>>;
pub type Routes = BTreeMap<String, Route>;
