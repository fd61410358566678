//! The road network that transit paths were matched onto.
//!
//! A [`Network`] is a directed graph of [`Node`]s joined by [`Link`]s,
//! spatially indexed so that arbitrary positions can be projected onto
//! nearby links (see [`Scan`]). The same structure is used both for the
//! full topology and for the small per-trip subgraphs rebuilt from a
//! matched path.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod graph;
#[doc(hidden)]
pub mod link;
#[doc(hidden)]
pub mod load;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
pub mod scan;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::NetworkError;
#[doc(inline)]
pub use graph::Network;
#[doc(inline)]
pub use link::{Link, PointOnLink};
#[doc(inline)]
pub use node::Node;
#[doc(inline)]
pub use scan::Scan;

/// Identifier of a node within the source topology.
pub type NodeId = i64;

/// Identifier of a link within the source topology.
pub type LinkId = i64;
