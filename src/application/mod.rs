pub mod cli;
pub mod config;
pub mod logging;

pub use cli::*;
pub use config::*;
pub use logging::*;
