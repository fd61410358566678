use crate::gtfs::GtfsError;
use crate::impl_err;
use crate::matcher::MatchError;
use crate::network::NetworkError;
use crate::output::OutputError;
use crate::path::DumpError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("network: {0}")]
    Network(NetworkError),

    #[error("gtfs: {0}")]
    Gtfs(GtfsError),

    #[error("path-match dump: {0}")]
    Dump(DumpError),

    #[error("stop search: {0}")]
    Match(MatchError),

    #[error("output: {0}")]
    Output(OutputError),
}

impl_err! {
    NetworkError => Network,
    GtfsError => Gtfs,
    DumpError => Dump,
    MatchError => Match,
    OutputError => Output,
}

pub type Result<T> = std::result::Result<T, Error>;
