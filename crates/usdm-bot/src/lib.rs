//! Application layer: configuration, logging, and output rendering for
//! the usdm-bot CLI.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use logging::init_logging;
