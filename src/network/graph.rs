use crate::network::{Link, LinkId, NetworkError, Node, NodeId};

use geo::Point;
use log::debug;
use petgraph::prelude::DiGraphMap;
use petgraph::Direction;
use rstar::RTree;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

pub type GraphStructure = DiGraphMap<NodeId, LinkId>;

/// Directed road network, keyed by the identifiers of the source topology.
///
/// Nodes and links are registered by identifier, so inserting an entity
/// which is already present is a no-op. This is what allows a path that
/// crosses over itself to be rebuilt without duplicating nodes or links.
#[derive(Default)]
pub struct Network {
    pub(crate) graph: GraphStructure,
    pub(crate) nodes: FxHashMap<NodeId, Node>,
    pub(crate) links: FxHashMap<LinkId, Link>,
    pub(crate) index: RTree<Link>,
}

impl Debug for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Network with Nodes: {}, Links: {}",
            self.nodes.len(),
            self.links.len()
        )
    }
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network in one pass, bulk-loading the spatial index.
    ///
    /// Every link must reference nodes from `nodes`, otherwise
    /// [`NetworkError::DanglingLink`] is returned.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        links: impl IntoIterator<Item = (LinkId, NodeId, NodeId)>,
    ) -> Result<Network, NetworkError> {
        let mut graph = GraphStructure::new();
        let nodes = nodes
            .into_iter()
            .inspect(|node| {
                graph.add_node(node.id);
            })
            .map(|node| (node.id, node))
            .collect::<FxHashMap<_, _>>();

        let mut registry = FxHashMap::default();
        for (id, source, target) in links {
            let link = Self::resolve(&nodes, id, source, target)?;
            if let Some(previous) = graph.add_edge(source, target, id) {
                debug!("Link {id} runs parallel to link {previous}, routing will use link {id}");
            }

            registry.insert(id, link);
        }

        let index = RTree::bulk_load(registry.values().copied().collect());

        Ok(Network {
            graph,
            nodes,
            links: registry,
            index,
        })
    }

    fn resolve(
        nodes: &FxHashMap<NodeId, Node>,
        id: LinkId,
        source: NodeId,
        target: NodeId,
    ) -> Result<Link, NetworkError> {
        let lookup = |node: NodeId| {
            nodes
                .get(&node)
                .copied()
                .ok_or(NetworkError::DanglingLink { link: id, node })
        };

        Ok(Link::new(id, lookup(source)?, lookup(target)?))
    }

    /// Registers a node, returning the node held by the network.
    ///
    /// If a node with the same identifier already exists it is kept
    /// and returned, and `node` is discarded.
    pub fn insert_node(&mut self, node: Node) -> Node {
        *self.nodes.entry(node.id).or_insert_with(|| {
            self.graph.add_node(node.id);
            node
        })
    }

    /// Registers a link between two registered nodes.
    ///
    /// Returns `Ok(false)` if a link with the same identifier was
    /// already present, in which case the network is unchanged.
    pub fn insert_link(
        &mut self,
        id: LinkId,
        source: NodeId,
        target: NodeId,
    ) -> Result<bool, NetworkError> {
        if self.links.contains_key(&id) {
            return Ok(false);
        }

        let link = Self::resolve(&self.nodes, id, source, target)?;
        if let Some(previous) = self.graph.add_edge(source, target, id) {
            debug!("Link {id} runs parallel to link {previous}, routing will use link {id}");
        }

        self.index.insert(link);
        self.links.insert(id, link);
        Ok(true)
    }

    #[inline]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    #[inline]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    #[inline]
    pub fn contains_link(&self, id: &LinkId) -> bool {
        self.links.contains_key(id)
    }

    #[inline]
    pub fn get_position(&self, id: &NodeId) -> Option<Point> {
        self.nodes.get(id).map(|node| node.position)
    }

    /// Links leaving `node`, in no particular order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .filter_map(|(_, _, id)| self.links.get(id))
    }

    /// The link routing uses to travel from `source` to `target`.
    pub fn link_between(&self, source: NodeId, target: NodeId) -> Option<LinkId> {
        self.graph.edge_weight(source, target).copied()
    }

    pub fn index(&self) -> &RTree<Link> {
        &self.index
    }

    /// The number of nodes in the network.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
