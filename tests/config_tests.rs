mod common;

#[cfg(test)]
pub mod config_tests {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use super::common::*;

    use batavia::common::*;
    use batavia::config::*;
    use batavia::content::SITE_URL;

    #[test]
    fn test_site_config_defaults_success() {
        let config = SiteConfig::from_lookup(env_lookup(&[])).unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.bind_addr, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.site_url, SITE_URL);
        assert_eq!(config.logos_dir(), PathBuf::from("./static/logos"));
    }

    #[test]
    fn test_site_config_from_lookup_success() {
        let config = SiteConfig::from_lookup(env_lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("SITE_LOG", "warn,batavia=trace"),
            ("SITE_STATIC_DIR", "/srv/batavia"),
            ("SITE_URL", "https://staging.example.com/"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, Some("127.0.0.1:3000".parse::<SocketAddr>().unwrap()));
        assert_eq!(config.log_filter, "warn,batavia=trace");
        assert_eq!(config.logos_dir(), PathBuf::from("/srv/batavia/logos"));
        assert_eq!(config.site_url, "https://staging.example.com");
    }

    #[test]
    fn test_site_config_blank_values_are_unset_success() {
        let config = SiteConfig::from_lookup(env_lookup(&[("BIND_ADDR", "  "), ("SITE_URL", "")])).unwrap();
        assert_eq!(config.bind_addr, None);
        assert_eq!(config.site_url, SITE_URL);
    }

    #[test]
    fn test_site_config_fails_on_invalid_bind_addr() {
        let err = SiteConfig::from_lookup(env_lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr { ref value, .. } if value == "localhost"));
    }

    #[test]
    fn test_site_config_fails_on_invalid_log_filter() {
        let err = SiteConfig::from_lookup(env_lookup(&[("SITE_LOG", "info, batavia=debug")])).unwrap_err();
        assert!(matches!(err, ConfigError::LogFilter(_)));
    }
}
