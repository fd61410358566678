use crate::network::{LinkId, NodeId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("could not read network table: {0}")]
    Csv(#[from] csv::Error),

    #[error("link {link} references missing node {node}")]
    DanglingLink { link: LinkId, node: NodeId },
}
