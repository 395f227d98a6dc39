use crate::models::{ClashConfig, ZeroValue};

/// Copy every listed field from `$overlay` into `$merged` unless the overlay
/// value is zero. Each field is replaced as a whole.
macro_rules! merge_fields {
    ($merged:ident, $overlay:ident; $($field:ident),+ $(,)?) => {
        $(
            if !$overlay.$field.is_zero() {
                $merged.$field = $overlay.$field.clone();
            }
        )+
    };
}

/// Merge a subscription on top of a baseline configuration.
///
/// Any field set in `subscription` wins; unset fields keep the baseline
/// value. Lists and the rule provider map are never combined: a present
/// collection in the subscription, even an empty one, replaces the
/// baseline's collection entirely.
pub fn merge_configs(baseline: &ClashConfig, subscription: &ClashConfig) -> ClashConfig {
    let mut merged = baseline.clone();

    merge_fields!(
        merged, subscription;
        port,
        socks_port,
        redir_port,
        mixed_port,
        allow_lan,
        bind_address,
        mode,
        log_level,
        external_controller,
        proxies,
        proxy_groups,
        rules,
        rule_providers,
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{load_default_config, Proxy, RuleProvider};
    use std::collections::BTreeMap;

    fn provider(url: &str) -> RuleProvider {
        RuleProvider {
            provider_type: "http".to_string(),
            behavior: "domain".to_string(),
            url: url.to_string(),
            path: "./ruleset/test.list".to_string(),
            interval: 604800,
            ..Default::default()
        }
    }

    #[test]
    fn test_subscription_overrides_non_zero_fields() {
        let baseline = ClashConfig {
            port: 7890,
            socks_port: 7891,
            allow_lan: true,
            mode: "rule".to_string(),
            ..Default::default()
        };
        let subscription = ClashConfig {
            port: 9999,
            mode: "global".to_string(),
            ..Default::default()
        };

        let merged = merge_configs(&baseline, &subscription);
        assert_eq!(
            merged,
            ClashConfig {
                port: 9999,
                socks_port: 7891,
                allow_lan: true,
                mode: "global".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_zero_fields_do_not_override() {
        let baseline = ClashConfig {
            port: 7890,
            socks_port: 7891,
            allow_lan: true,
            log_level: "info".to_string(),
            ..Default::default()
        };
        let subscription = ClashConfig {
            port: 0,
            allow_lan: false,
            mode: "rule".to_string(),
            ..Default::default()
        };

        let merged = merge_configs(&baseline, &subscription);
        assert_eq!(merged.port, 7890);
        assert_eq!(merged.socks_port, 7891);
        assert!(merged.allow_lan);
        assert_eq!(merged.log_level, "info");
        assert_eq!(merged.mode, "rule");
    }

    #[test]
    fn test_negative_port_overrides_baseline() {
        let baseline = load_default_config().unwrap();
        let subscription = ClashConfig {
            port: -1,
            ..Default::default()
        };

        let merged = merge_configs(&baseline, &subscription);
        assert_eq!(merged.port, -1);
        assert_eq!(merged.socks_port, 7891);
    }

    #[test]
    fn test_empty_list_overrides_absent_list() {
        let baseline = ClashConfig { port: 7890, ..Default::default() };
        let subscription = ClashConfig {
            port: 7890,
            proxies: Some(Vec::new()),
            ..Default::default()
        };

        let merged = merge_configs(&baseline, &subscription);
        assert_eq!(merged.proxies, Some(Vec::new()));

        let merged = merge_configs(&baseline, &ClashConfig::default());
        assert_eq!(merged.proxies, None);
    }

    #[test]
    fn test_empty_list_clears_baseline_list() {
        let baseline = ClashConfig {
            rules: Some(vec!["MATCH,DIRECT".to_string()]),
            ..Default::default()
        };
        let subscription = ClashConfig {
            rules: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(merge_configs(&baseline, &subscription).rules, Some(Vec::new()));
    }

    #[test]
    fn test_rule_providers_are_replaced() {
        let baseline = ClashConfig {
            port: 7890,
            rule_providers: Some(BTreeMap::from([(
                "direct".to_string(),
                provider("https://example.com/direct"),
            )])),
            ..Default::default()
        };
        let subscription = ClashConfig {
            port: 9999,
            rule_providers: Some(BTreeMap::from([(
                "reject".to_string(),
                provider("https://example.com/reject"),
            )])),
            ..Default::default()
        };

        let merged = merge_configs(&baseline, &subscription);
        assert_eq!(merged.port, 9999);
        assert_eq!(merged.rule_providers, subscription.rule_providers);
        assert!(!merged.rule_providers.unwrap().contains_key("direct"));
    }

    #[test]
    fn test_proxies_are_not_unioned() {
        let proxy = |name: &str| Proxy {
            name: name.to_string(),
            proxy_type: "socks5".to_string(),
            server: "example.com".to_string(),
            port: 1080,
            ..Default::default()
        };
        let baseline = ClashConfig {
            proxies: Some(vec![proxy("a"), proxy("b")]),
            ..Default::default()
        };
        let subscription = ClashConfig {
            proxies: Some(vec![proxy("c")]),
            ..Default::default()
        };

        let merged = merge_configs(&baseline, &subscription);
        assert_eq!(merged.proxies, Some(vec![proxy("c")]));
    }

    #[test]
    fn test_merge_into_defaults() {
        let defaults = load_default_config().unwrap();
        let subscription = ClashConfig {
            mixed_port: 7893,
            external_controller: "127.0.0.1:9090".to_string(),
            ..Default::default()
        };

        let merged = merge_configs(&defaults, &subscription);
        assert_eq!(merged.port, 7890);
        assert_eq!(merged.mixed_port, 7893);
        assert_eq!(merged.external_controller, "127.0.0.1:9090");
        assert_eq!(merged.rule_providers, defaults.rule_providers);
    }

    #[test]
    fn test_merge_with_empty_subscription_is_identity() {
        let defaults = load_default_config().unwrap();
        assert_eq!(merge_configs(&defaults, &ClashConfig::default()), defaults);
    }
}
