//! Initialises the process-wide logger.
//!
//! Reads the filter from `RUST_LOG`, which may be supplied
//! through a `.env` file in the working directory:
//! ```bash
//! RUST_LOG=stoplink=debug
//! ```

use log::LevelFilter;

/// Installs `env_logger` for the binary, defaulting to `info`
/// when no filter is supplied by the environment.
///
/// Calling this twice is harmless, the second call is ignored.
pub fn initialize_logger() {
    // A missing `.env` is the common case.
    let _ = dotenv::dotenv();

    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .try_init();
}
