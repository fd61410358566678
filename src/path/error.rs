use crate::gtfs::ShapeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("could not read path-match file: {0}")]
    Csv(#[from] csv::Error),

    #[error("shape {shape} has no point with sequence {seq}")]
    UnknownShapePoint { shape: ShapeId, seq: u32 },

    #[error("shape {shape} sequence {seq} has an invalid link list `{value}`")]
    InvalidLinkList {
        shape: ShapeId,
        seq: u32,
        value: String,
    },
}
