//! Tables handed to the simulation tool, and the optional problem report.
//!
//! Each table is a CSV file named after the table, opened by a short
//! metadata [`Header`] naming the user, the network, the table and the
//! time of generation, followed by a blank line.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod header;
#[doc(hidden)]
pub mod report;
#[doc(hidden)]
pub mod tables;
#[doc(hidden)]
pub mod writer;


#[doc(inline)]
pub use error::OutputError;
#[doc(inline)]
pub use header::{Header, Table};
#[doc(inline)]
pub use report::{write_problem_report, PROBLEM_REPORT};
#[doc(inline)]
pub use tables::*;
#[doc(inline)]
pub use writer::TableWriter;
