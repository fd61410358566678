pub mod err;
pub mod trace;

pub use trace::initialize_logger;
