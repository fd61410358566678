const DEFAULT_CANDIDATE_RADIUS: f64 = 50.0;
const DEFAULT_ROUTE_DISTANCE: f64 = 2_000.0;

/// Parameters of the [`PathEngine`](crate::matcher::PathEngine).
///
/// Distances are in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEngineConfig {
    /// Radius around each point in which candidate links are searched.
    pub candidate_radius: f64,

    /// How far a match may move backwards along the same link
    /// between consecutive points.
    pub max_backtrack: f64,

    /// Longest routed distance permitted between consecutive points.
    pub max_route_distance: f64,

    /// Chains whose cost exceeds this are abandoned.
    pub max_total_cost: f64,

    /// Cost per meter of offset between a point and its candidate.
    pub offset_weight: f64,

    /// Candidates kept per point, closest first.
    pub limit_closest_points: usize,

    /// Chains kept alive per layer, cheapest first.
    pub limit_simultaneous_paths: usize,

    /// Most links a route between consecutive points may enter.
    pub max_hops: usize,

    /// Suppresses the per-point log records of the search.
    pub quiet: bool,
}

impl Default for PathEngineConfig {
    fn default() -> Self {
        Self {
            candidate_radius: DEFAULT_CANDIDATE_RADIUS,
            max_backtrack: DEFAULT_CANDIDATE_RADIUS,
            max_route_distance: DEFAULT_ROUTE_DISTANCE,
            max_total_cost: f64::INFINITY,
            offset_weight: 1.0,
            limit_closest_points: 10,
            limit_simultaneous_paths: 8,
            max_hops: 20,
            quiet: false,
        }
    }
}

impl PathEngineConfig {
    /// Settings for placing stops onto an already matched path: every
    /// geometric threshold is the stop search `radius`, cost ceilings
    /// are lifted, and the search is kept narrow and silent.
    pub fn stop_search(radius: f64) -> Self {
        Self {
            candidate_radius: radius,
            max_backtrack: radius,
            max_route_distance: f64::INFINITY,
            max_total_cost: f64::INFINITY,
            offset_weight: 1.0,
            limit_closest_points: 8,
            limit_simultaneous_paths: 6,
            max_hops: 12,
            quiet: true,
        }
    }
}
