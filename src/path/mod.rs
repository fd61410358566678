//! Map-matched vehicle paths.
//!
//! A path is an ordered sequence of [`MatchedPosition`]s, each of which
//! refers back to its predecessor by index, forming one chain per
//! contiguous run of the path.

#[doc(hidden)]
pub mod dump;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod position;


#[doc(inline)]
pub use dump::{read_dump, read_dump_file, PathDump};
#[doc(inline)]
pub use error::DumpError;
#[doc(inline)]
pub use position::*;
