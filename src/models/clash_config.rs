use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

use super::zero_value::is_zero;
use crate::parser::de::null_as_default;

/// A Clash configuration as read from a subscription or produced by a merge.
///
/// Scalar fields use their zero value (`0`, `false`, `""`) to mean "unset".
/// Collections are `None` when the key is absent and `Some` when it was
/// written, even if the written list or map is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashConfig {
    // General settings
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub port: i64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub socks_port: i64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub redir_port: i64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub mixed_port: i64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub allow_lan: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub bind_address: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub mode: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub log_level: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub external_controller: String,

    // Proxy settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<Proxy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_groups: Option<Vec<ProxyGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_providers: Option<BTreeMap<String, RuleProvider>>,
}

impl ClashConfig {
    pub fn proxy_count(&self) -> usize {
        self.proxies.as_ref().map_or(0, Vec::len)
    }

    pub fn proxy_group_count(&self) -> usize {
        self.proxy_groups.as_ref().map_or(0, Vec::len)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.as_ref().map_or(0, Vec::len)
    }
}

/// A single proxy node.
///
/// Only the options shared by most protocols are named. Everything else
/// (`alterId`, `ws-opts`, `plugin-opts`, ...) is kept untouched in `extra`
/// and written back at the same level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Proxy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub proxy_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub cipher: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub network: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub udp: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub tls: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub skip_cert_verify: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub interval: i64,
}

/// A remotely refreshed rule set referenced from `RULE-SET` rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleProvider {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub provider_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub behavior: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Refresh interval in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub interval: i64,
}
