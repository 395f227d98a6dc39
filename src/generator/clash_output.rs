use log::warn;

use crate::models::{load_default_config, ClashConfig};

use super::merge::merge_configs;

/// How the fetched configuration is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Merge with the built-in defaults and re-serialize as YAML
    Pretty,
    /// Emit the decoded document unchanged
    Raw,
}

impl From<bool> for OutputMode {
    fn from(pretty: bool) -> Self {
        if pretty {
            OutputMode::Pretty
        } else {
            OutputMode::Raw
        }
    }
}

/// Serialize a configuration to Clash YAML.
///
/// Unset scalars and absent collections are left out of the document.
pub fn render_pretty(config: &ClashConfig) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(config)
}

/// Produce the final output for a parsed subscription.
///
/// In pretty mode the subscription is merged on top of the defaults. If the
/// defaults cannot be built, an empty baseline is used instead.
pub fn render_output(
    subscription: &ClashConfig,
    decoded: &str,
    mode: OutputMode,
) -> Result<String, serde_yaml::Error> {
    match mode {
        OutputMode::Raw => Ok(decoded.to_string()),
        OutputMode::Pretty => {
            let baseline = load_default_config().unwrap_or_else(|e| {
                warn!("Unable to load default config: {}", e);
                ClashConfig::default()
            });
            render_pretty(&merge_configs(&baseline, subscription))
        }
    }
}
