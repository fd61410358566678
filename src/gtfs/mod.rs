//! The slice of a GTFS feed needed to place stops: routes, trips,
//! stops, stop times and shapes.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod feed;
#[doc(hidden)]
pub mod model;
#[doc(hidden)]
pub mod time;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::GtfsError;
#[doc(inline)]
pub use feed::*;
#[doc(inline)]
pub use model::*;
#[doc(inline)]
pub use time::GtfsTime;

pub type TripId = i64;
pub type StopId = i64;
pub type ShapeId = i64;
