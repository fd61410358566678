#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod app;
pub mod config;
#[doc(hidden)]
pub mod error;
pub mod gtfs;
pub mod matcher;
pub mod network;
pub mod output;
pub mod path;
pub mod transit;
pub mod util;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use app::{run, RunSummary};
#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::{Error, Result};
