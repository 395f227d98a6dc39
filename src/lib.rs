pub mod cli;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

// Re-export the configuration model for easier access
pub use models::{ClashConfig, Proxy, ProxyGroup, RuleProvider};

// Re-export the pipeline entry points
pub use error::AppError;
pub use generator::OutputMode;
pub use pipeline::{process_content, run};
