use crate::network::{LinkId, Node};

use geo::{Distance, Haversine, InterpolatableLine, Line, LineLocatePoint, Point};
use rstar::AABB;

/// A directed edge of the road network, carrying both of its endpoints
/// so that it can be projected onto without consulting the graph.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub source: Node,
    pub target: Node,
}

/// A position on a [`Link`], as chosen by a matcher.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointOnLink {
    /// The link the position lies upon.
    pub link: LinkId,

    /// Distance along the link from its source node, in meters.
    pub dist: f64,

    /// Distance between the matched (input) point and its projection,
    /// in meters. Used to rank competing matches.
    pub ref_dist: f64,

    /// The projected position on the link.
    pub position: Point,
}

impl Link {
    pub fn new(id: LinkId, source: Node, target: Node) -> Self {
        Self { id, source, target }
    }

    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.source.position, self.target.position)
    }

    /// Great-circle length of the link, in meters.
    #[inline]
    pub fn length(&self) -> f64 {
        Haversine.distance(self.source.position, self.target.position)
    }

    /// The position `dist` meters from the source, clamped to the link.
    pub fn point_at(&self, dist: f64) -> Point {
        let length = self.length();
        let fraction = match length > 0.0 {
            true => (dist / length).clamp(0.0, 1.0),
            false => 0.0,
        };

        self.line().point_at_ratio_from_start(&Haversine, fraction)
    }

    /// Projects `point` onto the link, clamping to its endpoints.
    pub fn project(&self, point: &Point) -> PointOnLink {
        let line = self.line();

        // Zero-length links have no defined fraction, they
        // collapse onto their source.
        let fraction = line.line_locate_point(point).unwrap_or(0.0);
        let position = line.point_at_ratio_from_start(&Haversine, fraction);

        PointOnLink {
            link: self.id,
            dist: fraction * self.length(),
            ref_dist: Haversine.distance(position, *point),
            position,
        }
    }
}

impl rstar::RTreeObject for Link {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.source.position, self.target.position)
    }
}
