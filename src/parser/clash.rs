use crate::error::ParseError;
use crate::models::ClashConfig;

/// Parse a Clash configuration from a YAML string
///
/// Unknown top-level keys are dropped; unknown keys inside proxy entries are
/// kept in [`crate::models::Proxy::extra`]. No semantic checks are made, a
/// port of `0` or an unknown proxy type parse just fine.
///
/// A blank or `null` document yields an empty configuration rather than an
/// error.
pub fn parse_clash_config(content: &str) -> Result<ClashConfig, ParseError> {
    if content.trim().is_empty() {
        return Ok(ClashConfig::default());
    }
    let config: Option<ClashConfig> = serde_yaml::from_str(content)?;
    Ok(config.unwrap_or_default())
}
