//! Clash configuration model
//!
//! The structs here mirror the subset of the Clash YAML schema this tool
//! understands. They are plain values: built by the parser or by
//! [`load_default_config`], combined by the merger and written back out by
//! the generator.
//!
//! ```rust
//! use subscription_config::models::{load_default_config, ClashConfig};
//!
//! let defaults = load_default_config().unwrap();
//! assert_eq!(defaults.port, 7890);
//!
//! let empty = ClashConfig::default();
//! assert!(empty.proxies.is_none());
//! ```

mod clash_config;
mod default_config;
mod zero_value;

pub use clash_config::*;
pub use default_config::{load_default_config, DEFAULT_RULE_PROVIDER_INTERVAL};
pub use zero_value::{is_zero, ZeroValue};
