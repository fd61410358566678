use crate::matcher::PathEngineConfig;
use crate::network::{LinkId, Network, PointOnLink, Scan};

use geo::Point;

/// One way of arriving at a candidate of a layer.
#[derive(Debug, Clone)]
pub struct State {
    /// Index of the candidate within its layer.
    pub candidate: usize,
    /// Accumulated cost of the chain ending here.
    pub cost: f64,
    /// Accumulated distance travelled by the chain, in meters.
    pub dist: f64,
    /// Index of the preceding state in the previous layer.
    /// `None` where the chain begins.
    pub parent: Option<usize>,
    /// Links entered since the preceding state.
    pub route: Vec<LinkId>,
}

/// The candidates of a single query point, and the chains reaching them.
#[derive(Debug)]
pub struct Layer {
    /// Index of the query point this layer belongs to.
    pub point: usize,
    pub candidates: Vec<PointOnLink>,
    /// Surviving chains, cheapest first.
    pub states: Vec<State>,
    /// Whether the chains restart here, having no route from the previous layer.
    pub restart: bool,
}

impl Layer {
    #[inline]
    pub fn best(&self) -> Option<&State> {
        self.states.first()
    }
}

/// Produces the candidate positions of a query point.
pub struct LayerGenerator<'a> {
    network: &'a Network,
    config: &'a PathEngineConfig,
}

impl<'a> LayerGenerator<'a> {
    pub fn new(network: &'a Network, config: &'a PathEngineConfig) -> Self {
        Self { network, config }
    }

    /// Projections of `point` onto the links within the candidate radius,
    /// closest first and at most `limit_closest_points` of them.
    pub fn candidates(&self, point: &Point) -> Vec<PointOnLink> {
        let mut candidates = self
            .network
            .nearest_projected_sorted(point, self.config.candidate_radius);

        candidates.truncate(self.config.limit_closest_points);
        candidates
    }
}
