//! Placement of scheduled stops onto the links of matched transit paths.
//!
//! Each trip is processed in four steps, in order:
//!
//! 1. [`select_segment`] isolates the longest contiguous run of the trip's
//!    matched path.
//! 2. [`build_subgraph`] rebuilds the links of that run as a small network
//!    of its own.
//! 3. [`project_stops`] matches the trip's stops onto the rebuilt network.
//! 4. [`assign_trip`] walks the rebuilt links in order, placing at most one
//!    stop on each, and merges the placements into the run-wide
//!    [`AssignmentMap`].
//!
//! The [`StopLinker`] drives these steps trip by trip, optionally feeding a
//! [`DiagnosticsCollector`] along the way.

#[doc(hidden)]
pub mod assign;
#[doc(hidden)]
pub mod diagnostics;
#[doc(hidden)]
pub mod linker;
#[doc(hidden)]
pub mod projector;
#[doc(hidden)]
pub mod segment;
#[doc(hidden)]
pub mod subgraph;


#[doc(inline)]
pub use assign::{assign_trip, merge_assignment, AssignmentMap, RouteLinkRow, TripAssignment};
#[doc(inline)]
pub use diagnostics::{DiagnosticRecord, DiagnosticsCollector};
#[doc(inline)]
pub use linker::StopLinker;
#[doc(inline)]
pub use projector::project_stops;
#[doc(inline)]
pub use segment::{select_segment, Segment};
#[doc(inline)]
pub use subgraph::{build_subgraph, Subgraph};
