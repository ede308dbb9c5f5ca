use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn database_url_is_required() {
    assert_eq!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    assert_eq!(config_from(&[("DATABASE_URL", "   ")]), Err(ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let config = config_from(&[("DATABASE_URL", "postgres://localhost/eexplo")]).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/eexplo");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(config.site_dir.ends_with("site"));
    assert_eq!(config.email, None);
    assert_eq!(config.contact_rate, RateLimitConfig::default());
}

#[test]
fn numeric_overrides_are_parsed() {
    let config = config_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("CONTACT_RATE_LIMIT", "2"),
        ("CONTACT_RATE_WINDOW_SECS", "30"),
        ("SITE_DIR", "/srv/site"),
    ])
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.contact_rate.limit, 2);
    assert_eq!(config.contact_rate.window, Duration::from_secs(30));
    assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn zero_rate_limit_is_rejected() {
    let err = config_from(&[("DATABASE_URL", "postgres://db"), ("CONTACT_RATE_LIMIT", "0")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "CONTACT_RATE_LIMIT", .. }));
}

#[test]
fn email_requires_all_three_variables() {
    let partial = config_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("RESEND_API_KEY", "re_123"),
        ("RESEND_FROM", "site@eexplo.travel"),
    ])
    .unwrap();
    assert_eq!(partial.email, None);

    let full = config_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("RESEND_API_KEY", "re_123"),
        ("RESEND_FROM", "site@eexplo.travel"),
        ("CONTACT_INBOX", "hello@eexplo.travel"),
    ])
    .unwrap();
    assert_eq!(
        full.email,
        Some(EmailConfig {
            api_key: "re_123".into(),
            from: "site@eexplo.travel".into(),
            inbox: "hello@eexplo.travel".into(),
        })
    );
}
