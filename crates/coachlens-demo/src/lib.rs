pub mod cli;
pub mod commands;
pub mod models;
pub mod render;
pub mod report;

pub use cli::*;
pub use commands::{load_registry, run};
pub use models::*;
pub use report::*;
