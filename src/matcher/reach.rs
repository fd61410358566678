use crate::network::{LinkId, Network, NodeId, PointOnLink};

use pathfinding::prelude::{dijkstra_reach, DijkstraReachableItem};
use rustc_hash::FxHashMap;

/// A node of the network, paired with the number of links entered to reach it.
type HopState = (NodeId, usize);

/// A route from one candidate to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    /// Distance travelled over the network, in meters.
    pub distance: f64,
    /// Extra cost of moving backwards along a link, in meters.
    pub penalty: f64,
    /// Links entered on the way, ending with the link of the target.
    /// Empty when the target lies further along the source link.
    pub links: Vec<LinkId>,
}

/// Everything reachable from the end of a source candidate's link
/// within a hop and distance bound.
pub struct Reach<'a> {
    network: &'a Network,
    source: PointOnLink,
    remaining: f64,
    max_backtrack: f64,
    parents: FxHashMap<HopState, (HopState, u64)>,
    first: FxHashMap<NodeId, HopState>,
}

impl<'a> Reach<'a> {
    /// Explores outward from the target node of `source`'s link.
    ///
    /// At most `max_hops` links may be entered by a route, including the
    /// link of the target itself, and the route may not exceed `max_distance`.
    pub fn new(
        network: &'a Network,
        source: PointOnLink,
        max_hops: usize,
        max_distance: f64,
        max_backtrack: f64,
    ) -> Option<Self> {
        let link = network.link(&source.link)?;
        let remaining = (link.length() - source.dist).max(0.0);
        let start: HopState = (link.target.id, 0);

        let mut parents = FxHashMap::default();
        let mut first = FxHashMap::default();

        // Leave room for entering the target link once the node is reached.
        let expand_below = max_hops.saturating_sub(1);

        let reachable = dijkstra_reach(&start, |&(node, hops)| {
            let successors = if hops < expand_below {
                network
                    .outgoing(node)
                    .map(|link| {
                        // In millimeters
                        let cost = (link.length() * 1_000f64) as u64;
                        ((link.target.id, hops + 1), cost)
                    })
                    .collect::<Vec<_>>()
            } else {
                vec![]
            };

            successors
        })
        .take_while(|item: &DijkstraReachableItem<HopState, u64>| {
            item.total_cost as f64 / 1_000f64 + remaining <= max_distance
        });

        for item in reachable {
            if let Some(parent) = item.parent {
                parents.insert(item.node, (parent, item.total_cost));
            }

            // Dijkstra settles nodes in order of cost, so the first
            // state seen for a node is its cheapest.
            first.entry(item.node.0).or_insert(item.node);
        }

        Some(Self {
            network,
            source,
            remaining,
            max_backtrack,
            parents,
            first,
        })
    }

    fn path_builder(&self, target: &HopState) -> Vec<NodeId> {
        let mut rev = vec![target.0];
        let mut next = target;
        while let Some((parent, _)) = self.parents.get(next) {
            rev.push(parent.0);
            next = parent;
        }
        rev.reverse();
        rev
    }

    /// The cheapest hop from the source candidate to `target`, if any.
    pub fn hop_to(&self, target: &PointOnLink) -> Option<Hop> {
        if target.link == self.source.link {
            if target.dist >= self.source.dist {
                return Some(Hop {
                    distance: target.dist - self.source.dist,
                    penalty: 0.0,
                    links: vec![],
                });
            }

            let backwards = self.source.dist - target.dist;
            if backwards <= self.max_backtrack {
                return Some(Hop {
                    distance: 0.0,
                    penalty: backwards,
                    links: vec![],
                });
            }
        }

        let link = self.network.link(&target.link)?;
        let state = self.first.get(&link.source.id)?;
        let (_, cost) = self
            .parents
            .get(state)
            .copied()
            .unwrap_or((*state, 0));

        let nodes = self.path_builder(state);
        let mut links = nodes
            .windows(2)
            .map(|pair| self.network.link_between(pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()?;
        links.push(target.link);

        Some(Hop {
            distance: self.remaining + cost as f64 / 1_000f64 + target.dist,
            penalty: 0.0,
            links,
        })
    }
}
