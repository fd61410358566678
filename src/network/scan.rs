use crate::network::{Link, Network, PointOnLink};

use geo::{Destination, Geodesic, Point};
use itertools::Itertools;
use rstar::AABB;
use std::f64::consts::SQRT_2;

/// Constructs the square, axis-aligned bounding box which contains
/// the circle of radius `distance` (meters) around `point`.
#[inline]
pub fn bounding(point: &Point, distance: f64) -> AABB<Point> {
    // Corners lie on the diagonal, hence the extra root-two.
    let bottom_right = Geodesic.destination(*point, 135.0, distance * SQRT_2);
    let top_left = Geodesic.destination(*point, 315.0, distance * SQRT_2);

    AABB::from_corners(top_left, bottom_right)
}

pub trait Scan {
    /// Finds all links whose bounding box intersects the square
    /// radius `distance` around `point`.
    fn nearest_links(&self, point: &Point, distance: f64) -> impl Iterator<Item = &Link>;

    /// Projects `point` onto every nearby link, keeping the projections
    /// which lie within `distance` meters of the point.
    fn nearest_projected(&self, point: &Point, distance: f64) -> impl Iterator<Item = PointOnLink>;

    /// As [`Scan::nearest_projected`], ordered by increasing reference distance.
    /// Ties keep the order of increasing link identifier, so that the
    /// result does not depend on the layout of the spatial index.
    fn nearest_projected_sorted(&self, point: &Point, distance: f64) -> Vec<PointOnLink>;
}

impl Scan for Network {
    #[inline]
    fn nearest_links(&self, point: &Point, distance: f64) -> impl Iterator<Item = &Link> {
        self.index()
            .locate_in_envelope_intersecting(&bounding(point, distance))
    }

    #[inline]
    fn nearest_projected(&self, point: &Point, distance: f64) -> impl Iterator<Item = PointOnLink> {
        self.nearest_links(point, distance)
            .map(move |link| link.project(point))
            .filter(move |projected| projected.ref_dist <= distance)
    }

    fn nearest_projected_sorted(&self, point: &Point, distance: f64) -> Vec<PointOnLink> {
        self.nearest_projected(point, distance)
            .sorted_by(|a, b| a.ref_dist.total_cmp(&b.ref_dist).then(a.link.cmp(&b.link)))
            .collect()
    }
}
