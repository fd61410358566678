use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("no input points were given")]
    NoPointsProvided,

    #[error("none of the {points} input points has a candidate on the network")]
    NoCandidates { points: usize },

    #[error("could not collapse the candidate layers into a path")]
    CollapseFailure,
}
