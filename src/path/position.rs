use crate::network::{LinkId, PointOnLink};

use geo::Point;

/// A point submitted to a path-matching search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    /// Sequence tag carried through to the match, `None` for
    /// points which only exist to anchor the search.
    pub seq: Option<u32>,
    pub position: Point,
}

impl QueryPoint {
    pub fn new(seq: u32, position: Point) -> Self {
        Self {
            seq: Some(seq),
            position,
        }
    }

    pub fn sentinel(position: Point) -> Self {
        Self {
            seq: None,
            position,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.seq.is_none()
    }
}

/// A single position of a matched path.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPosition {
    /// Sequence tag of the observed point (shape point or stop sequence).
    pub seq: Option<u32>,

    /// The observed position.
    pub position: Point,

    /// Where on the network the position was matched.
    pub point_on_link: PointOnLink,

    /// Links entered since the previous position, ending with the
    /// link of this position. The first position of a run lists only
    /// its own link, and a position further along its predecessor's
    /// link lists none.
    pub route_info: Vec<LinkId>,

    /// Marks the first position of a new contiguous run.
    pub restart: bool,

    /// Distance travelled since the start of the path, in meters.
    pub total_dist: f64,

    /// Cost accrued since the start of the path.
    pub total_cost: f64,

    /// Index of the predecessor within the same path, `None` at the
    /// start of a run.
    pub prev: Option<usize>,
}

impl MatchedPosition {
    #[inline]
    pub fn link(&self) -> LinkId {
        self.point_on_link.link
    }
}
