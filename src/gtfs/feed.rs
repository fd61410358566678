use crate::gtfs::{
    GtfsError, GtfsTime, Route, Routes, Shape, ShapeId, Shapes, Stop, StopId, StopTime,
    StopTimes, Stops, Trip, TripId, Trips,
};

use geo::Point;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const ROUTES_TABLE: &str = "routes.txt";
pub const STOPS_TABLE: &str = "stops.txt";
pub const TRIPS_TABLE: &str = "trips.txt";
pub const STOP_TIMES_TABLE: &str = "stop_times.txt";
pub const SHAPES_TABLE: &str = "shapes.txt";

#[derive(Debug, Deserialize)]
struct RouteRecord {
    route_id: String,
    route_short_name: Option<String>,
    route_long_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StopRecord {
    stop_id: StopId,
    stop_name: Option<String>,
    stop_lat: f64,
    stop_lon: f64,
}

#[derive(Debug, Deserialize)]
struct TripRecord {
    route_id: String,
    service_id: String,
    trip_id: TripId,
    shape_id: Option<ShapeId>,
}

#[derive(Debug, Deserialize)]
struct StopTimeRecord {
    trip_id: TripId,
    arrival_time: Option<GtfsTime>,
    departure_time: Option<GtfsTime>,
    stop_id: StopId,
    stop_sequence: u32,
}

#[derive(Debug, Deserialize)]
struct ShapeRecord {
    shape_id: ShapeId,
    shape_pt_lat: f64,
    shape_pt_lon: f64,
    shape_pt_sequence: u32,
}

/// Reads the tables of an unpacked GTFS feed directory.
#[derive(Debug, Clone)]
pub struct GtfsReader {
    directory: PathBuf,
}

impl GtfsReader {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    fn records<T: DeserializeOwned>(&self, table: &'static str) -> Result<Vec<T>, GtfsError> {
        let wrap = |source| GtfsError::Csv { table, source };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(self.directory.join(table))
            .map_err(wrap)?;

        let records = reader
            .deserialize::<T>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(wrap)?;

        debug!("Read {} records from {table}", records.len());
        Ok(records)
    }

    pub fn shapes(&self) -> Result<Shapes, GtfsError> {
        let mut shapes = Shapes::new();
        for record in self.records::<ShapeRecord>(SHAPES_TABLE)? {
            let shape = shapes.entry(record.shape_id).or_insert_with(|| Shape {
                id: record.shape_id,
                ..Shape::default()
            });

            shape.points.insert(
                record.shape_pt_sequence,
                Point::new(record.shape_pt_lon, record.shape_pt_lat),
            );
        }

        info!("Read {} shapes", shapes.len());
        Ok(shapes)
    }

    pub fn routes(&self) -> Result<Routes, GtfsError> {
        let routes = self
            .records::<RouteRecord>(ROUTES_TABLE)?
            .into_iter()
            .map(|record| {
                let route = Route {
                    id: record.route_id,
                    short_name: record.route_short_name.unwrap_or_default(),
                    long_name: record.route_long_name.unwrap_or_default(),
                };

                (route.id.clone(), route)
            })
            .collect::<Routes>();

        Ok(routes)
    }

    pub fn stops(&self) -> Result<Stops, GtfsError> {
        let stops = self
            .records::<StopRecord>(STOPS_TABLE)?
            .into_iter()
            .map(|record| {
                let stop = Stop {
                    id: record.stop_id,
                    name: record.stop_name.unwrap_or_default(),
                    position: Point::new(record.stop_lon, record.stop_lat),
                };

                (stop.id, stop)
            })
            .collect::<Stops>();

        Ok(stops)
    }

    /// Reads the trips whose shape passes `has_shape`, restricted to the
    /// `services` given (all services, if empty).
    pub fn trips(
        &self,
        routes: &Routes,
        has_shape: impl Fn(&ShapeId) -> bool,
        services: &BTreeSet<String>,
    ) -> Result<Trips, GtfsError> {
        let mut trips = Trips::new();
        let mut skipped = 0usize;

        for record in self.records::<TripRecord>(TRIPS_TABLE)? {
            if !services.is_empty() && !services.contains(&record.service_id) {
                skipped += 1;
                continue;
            }

            let Some(shape_id) = record.shape_id.filter(|shape| has_shape(shape)) else {
                skipped += 1;
                continue;
            };

            let Some(route) = routes.get(&record.route_id) else {
                warn!(
                    "Trip {} references unknown route {}, skipping.",
                    record.trip_id, record.route_id
                );
                skipped += 1;
                continue;
            };

            trips.insert(
                record.trip_id,
                Trip {
                    id: record.trip_id,
                    route: route.clone(),
                    service_id: record.service_id,
                    shape_id,
                },
            );
        }

        info!("Read {} trips ({skipped} not used)", trips.len());
        Ok(trips)
    }

    /// Reads the stop times of `trips`, ordered by stop sequence.
    /// Stop times of other trips are ignored.
    pub fn stop_times(&self, trips: &Trips, stops: &Stops) -> Result<StopTimes, GtfsError> {
        let mut stop_times = StopTimes::new();

        for record in self.records::<StopTimeRecord>(STOP_TIMES_TABLE)? {
            if !trips.contains_key(&record.trip_id) {
                continue;
            }

            let stop = stops
                .get(&record.stop_id)
                .cloned()
                .ok_or(GtfsError::UnknownStop {
                    trip: record.trip_id,
                    stop: record.stop_id,
                })?;

            stop_times
                .entry(record.trip_id)
                .or_insert_with(Vec::new)
                .push(StopTime {
                    trip_id: record.trip_id,
                    seq: record.stop_sequence,
                    arrival: record.arrival_time,
                    departure: record.departure_time,
                    stop,
                });
        }

        stop_times
            .values_mut()
            .for_each(|calls| calls.sort_by_key(|call| call.seq));

        Ok(stop_times)
    }
}
