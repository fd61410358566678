use crate::network::{LinkId, Network, NodeId};
use crate::path::MatchedPosition;

use log::warn;

/// The links of a matched run, rebuilt as a network of their own.
#[derive(Debug)]
pub struct Subgraph {
    pub network: Network,
    /// Origin of the first link of the run.
    pub start: NodeId,
    /// Destination of the last link of the run.
    pub end: NodeId,
    /// Links in the order the run traverses them. A link the run
    /// revisits is listed once per visit.
    pub links: Vec<LinkId>,
}

impl Subgraph {
    fn seed(base: &Network, link: LinkId) -> Option<Self> {
        let link = base.link(&link)?;

        let mut network = Network::new();
        network.insert_node(link.source);
        network.insert_node(link.target);
        network.insert_link(link.id, link.source.id, link.target.id).ok()?;

        Some(Self {
            network,
            start: link.source.id,
            end: link.target.id,
            links: vec![link.id],
        })
    }

    /// Appends a traversal of `link`, registering it and its endpoints
    /// unless the run has visited them before.
    fn traverse(&mut self, base: &Network, link: LinkId) -> Option<()> {
        let link = base.link(&link)?;

        let source = self.network.insert_node(link.source);
        let target = self.network.insert_node(link.target);
        self.network.insert_link(link.id, source.id, target.id).ok()?;

        self.end = target.id;
        self.links.push(link.id);
        Some(())
    }
}

/// Rebuilds the links traversed by `run` from the `base` network.
///
/// Links missing from the base network are skipped with a warning.
/// Returns `None` when the first link of the run is missing, as the
/// rebuilt network would have no start.
pub fn build_subgraph(run: &[MatchedPosition], base: &Network) -> Option<Subgraph> {
    let first = run.first()?.link();
    let Some(mut subgraph) = Subgraph::seed(base, first) else {
        warn!("Link {first} starting the run is not in the network");
        return None;
    };

    for position in run {
        // The link seeding the subgraph must not be traversed twice.
        let reseeds = subgraph.links.len() == 1 && position.route_info.first() == Some(&first);
        if reseeds {
            continue;
        }

        for link in &position.route_info {
            if subgraph.traverse(base, *link).is_none() {
                warn!("Link {link} traversed by the run is not in the network, skipping it");
            }
        }
    }

    Some(subgraph)
}
