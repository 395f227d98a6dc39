use crate::error::ParseError;
use crate::parser::parse_clash_config;

use super::ClashConfig;

/// Baseline configuration shipped with the binary.
const DEFAULT_CONFIG_YAML: &str = include_str!("default_config.yaml");

/// Refresh interval shared by the bundled rule providers (7 days).
pub const DEFAULT_RULE_PROVIDER_INTERVAL: i64 = 604_800;

/// Build the baseline configuration that subscriptions are merged into.
///
/// Listens on 7890/7891/7892 with LAN access, runs in `rule` mode and
/// registers the `direct`, `reject`, `gfw` and `cncidr` rule providers.
/// No I/O happens here; the document is embedded at compile time.
pub fn load_default_config() -> Result<ClashConfig, ParseError> {
    parse_clash_config(DEFAULT_CONFIG_YAML)
}
