use crate::gtfs::{StopId, TripId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtfsError {
    #[error("could not read {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("invalid time value: {0}")]
    InvalidTimeValue(String),

    #[error("trip {trip} calls at unknown stop {stop}")]
    UnknownStop { trip: TripId, stop: StopId },
}
