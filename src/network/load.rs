//! Reads a network exported from the topology database as two
//! tables, `node.csv` (`id,x,y`) and `link.csv` (`id,source,target`).

use crate::network::{LinkId, Network, NetworkError, Node, NodeId};

use geo::Point;
use log::info;
use measure_time::info_time;
use serde::Deserialize;
use std::io;
use std::path::Path;

pub const NODE_TABLE: &str = "node.csv";
pub const LINK_TABLE: &str = "link.csv";

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: NodeId,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct LinkRecord {
    id: LinkId,
    source: NodeId,
    target: NodeId,
}

impl Network {
    /// Loads the network from the `node.csv` and `link.csv`
    /// tables found in `directory`.
    pub fn from_dir(directory: impl AsRef<Path>) -> Result<Network, NetworkError> {
        info_time!("Network::from_dir");
        let directory = directory.as_ref();

        let nodes = csv::Reader::from_path(directory.join(NODE_TABLE))?;
        let links = csv::Reader::from_path(directory.join(LINK_TABLE))?;
        Self::from_csv(nodes, links)
    }

    /// Loads the network from any pair of readers holding the node and link tables.
    pub fn from_readers(nodes: impl io::Read, links: impl io::Read) -> Result<Network, NetworkError> {
        Self::from_csv(csv::Reader::from_reader(nodes), csv::Reader::from_reader(links))
    }

    fn from_csv<A: io::Read, B: io::Read>(
        mut nodes: csv::Reader<A>,
        mut links: csv::Reader<B>,
    ) -> Result<Network, NetworkError> {
        let nodes = nodes
            .deserialize::<NodeRecord>()
            .map(|record| record.map(|r| Node::new(Point::new(r.x, r.y), r.id)))
            .collect::<Result<Vec<_>, _>>()?;

        let links = links
            .deserialize::<LinkRecord>()
            .map(|record| record.map(|r| (r.id, r.source, r.target)))
            .collect::<Result<Vec<_>, _>>()?;

        let network = Network::from_parts(nodes, links)?;
        info!(
            "Read network with {} nodes and {} links",
            network.size(),
            network.link_count()
        );

        Ok(network)
    }
}
