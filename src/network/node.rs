use crate::network::NodeId;
use geo::Point;

/// A vertex of the road network.
///
/// Positions are `(longitude, latitude)` in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

impl Node {
    /// Constructs a `Node` from a given position and `id`.
    pub fn new(position: Point, id: NodeId) -> Self {
        Self { id, position }
    }
}
