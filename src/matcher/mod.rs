//! A layered path-matching search.
//!
//! Each query point forms a layer of candidate positions on nearby links.
//! Consecutive layers are joined by routing over the network, and the
//! cheapest chain of candidates through all layers is the match. Where no
//! route joins two layers the match restarts, beginning a new run.
//!
//! ```text
//!     Layer 0        Layer 1        Layer 2
//!
//!       +  ---------   +  ---------   +
//!       +  ----\       +      /---    +
//!       +       \----  +  ---/        +
//! ```
//!
//! The search is exposed through the [`PathMatcher`] trait, which
//! the stop placement consumes without knowing its implementation.

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod engine;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod layer;
#[doc(hidden)]
pub mod reach;


#[doc(inline)]
pub use config::PathEngineConfig;
#[doc(inline)]
pub use engine::PathEngine;
#[doc(inline)]
pub use error::MatchError;

use crate::network::Network;
use crate::path::{MatchedPosition, QueryPoint};

pub trait PathMatcher {
    /// Matches the `query` points, in order, onto `network`.
    ///
    /// Returns one position per matched query point, in query order.
    /// Points which could not be placed on the network are absent
    /// from the result.
    fn match_path(
        &self,
        query: &[QueryPoint],
        network: &Network,
    ) -> Result<Vec<MatchedPosition>, MatchError>;
}
