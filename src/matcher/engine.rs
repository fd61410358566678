use crate::matcher::layer::{Layer, LayerGenerator, State};
use crate::matcher::reach::Reach;
use crate::matcher::{MatchError, PathEngineConfig, PathMatcher};
use crate::network::{Network, PointOnLink};
use crate::path::{MatchedPosition, QueryPoint};

use log::{debug, info};
use measure_time::debug_time;
use wkt::ToWkt;

/// A beam search over the candidate layers of a query.
///
/// Every layer keeps only its `limit_simultaneous_paths` cheapest chains.
/// A chain's cost is the distance it travels over the network, plus the
/// weighted offset of each candidate from its query point.
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    config: PathEngineConfig,
}

impl PathEngine {
    pub fn new(config: PathEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathEngineConfig {
        &self.config
    }

    #[inline]
    fn offset_cost(&self, candidate: &PointOnLink) -> f64 {
        self.config.offset_weight * candidate.ref_dist
    }

    /// Begins a chain at each candidate, continuing the totals of `base`.
    fn seed(&self, candidates: &[PointOnLink], base: Option<&State>) -> Vec<State> {
        let (cost, dist) = base.map_or((0.0, 0.0), |state| (state.cost, state.dist));

        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| State {
                candidate: index,
                cost: cost + self.offset_cost(candidate),
                dist,
                parent: None,
                route: vec![candidate.link],
            })
            .collect()
    }

    /// Extends the chains of `previous` onto each of `candidates`,
    /// keeping the cheapest arrival per candidate.
    fn advance(
        &self,
        network: &Network,
        previous: &Layer,
        candidates: &[PointOnLink],
    ) -> Vec<State> {
        let mut arrivals: Vec<Option<State>> = vec![None; candidates.len()];

        for (parent, state) in previous.states.iter().enumerate() {
            let source = previous.candidates[state.candidate];
            let Some(reach) = Reach::new(
                network,
                source,
                self.config.max_hops,
                self.config.max_route_distance,
                self.config.max_backtrack,
            ) else {
                continue;
            };

            for (index, candidate) in candidates.iter().enumerate() {
                let Some(hop) = reach.hop_to(candidate) else {
                    continue;
                };

                if hop.distance > self.config.max_route_distance {
                    continue;
                }

                let cost = state.cost + hop.distance + hop.penalty + self.offset_cost(candidate);
                if cost > self.config.max_total_cost {
                    continue;
                }

                let improves = arrivals[index]
                    .as_ref()
                    .map_or(true, |existing| cost < existing.cost);

                if improves {
                    arrivals[index] = Some(State {
                        candidate: index,
                        cost,
                        dist: state.dist + hop.distance,
                        parent: Some(parent),
                        route: hop.links,
                    });
                }
            }
        }

        arrivals.into_iter().flatten().collect()
    }

    fn prune(&self, states: &mut Vec<State>) {
        states.sort_by(|a, b| a.cost.total_cmp(&b.cost));
        states.truncate(self.config.limit_simultaneous_paths.max(1));
    }

    /// Walks back from the cheapest final chain. Where a chain restarts,
    /// the walk continues from the cheapest chain of the layer before it.
    fn collapse(
        &self,
        query: &[QueryPoint],
        layers: &[Layer],
    ) -> Result<Vec<MatchedPosition>, MatchError> {
        let mut picked = Vec::with_capacity(layers.len());
        let mut layer_index = layers.len().checked_sub(1).ok_or(MatchError::CollapseFailure)?;
        let mut state_index = 0;

        loop {
            let state = layers[layer_index]
                .states
                .get(state_index)
                .ok_or(MatchError::CollapseFailure)?;

            picked.push((layer_index, state_index));
            if layer_index == 0 {
                break;
            }

            layer_index -= 1;
            state_index = state.parent.unwrap_or(0);
        }

        picked.reverse();

        let positions = picked
            .into_iter()
            .enumerate()
            .map(|(index, (layer_index, state_index))| {
                let layer = &layers[layer_index];
                let state = &layer.states[state_index];
                let point = &query[layer.point];

                MatchedPosition {
                    seq: point.seq,
                    position: point.position,
                    point_on_link: layer.candidates[state.candidate],
                    route_info: state.route.clone(),
                    restart: layer.restart,
                    total_dist: state.dist,
                    total_cost: state.cost,
                    prev: (!layer.restart).then(|| index.saturating_sub(1)),
                }
            })
            .collect();

        Ok(positions)
    }
}

impl PathMatcher for PathEngine {
    fn match_path(
        &self,
        query: &[QueryPoint],
        network: &Network,
    ) -> Result<Vec<MatchedPosition>, MatchError> {
        if query.is_empty() {
            return Err(MatchError::NoPointsProvided);
        }

        debug_time!("matched {} points", query.len());

        let generator = LayerGenerator::new(network, &self.config);
        let mut layers: Vec<Layer> = Vec::with_capacity(query.len());
        let mut skipped = 0usize;

        for (point, entry) in query.iter().enumerate() {
            let candidates = generator.candidates(&entry.position);
            if candidates.is_empty() {
                if !self.config.quiet {
                    debug!("No candidates near {}", entry.position.wkt_string());
                }
                skipped += 1;
                continue;
            }

            let (mut states, restart) = match layers.last() {
                None => (self.seed(&candidates, None), true),
                Some(previous) => {
                    let states = self.advance(network, previous, &candidates);
                    if states.is_empty() {
                        if !self.config.quiet {
                            debug!("No route reaches point {point}, restarting the match");
                        }
                        (self.seed(&candidates, previous.best()), true)
                    } else {
                        (states, false)
                    }
                }
            };

            self.prune(&mut states);
            layers.push(Layer {
                point,
                candidates,
                states,
                restart,
            });
        }

        if layers.is_empty() {
            return Err(MatchError::NoCandidates {
                points: query.len(),
            });
        }

        let positions = self.collapse(query, &layers)?;

        if !self.config.quiet {
            let restarts = positions.iter().filter(|p| p.restart).count();
            info!(
                "Matched {} of {} points ({skipped} skipped, {restarts} runs)",
                positions.len(),
                query.len()
            );
        }

        Ok(positions)
    }
}
