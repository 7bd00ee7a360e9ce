use std::env;

use crate::modules::integrations::google_books::DEFAULT_VOLUMES_URL;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Backend origin the page controller talks to
    pub api_base_url: String,
    pub catalog_path: String,
    pub google_books_url: String,
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
}

impl Config {
    /// Build from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("PROFILE").unwrap_or_else(|| "default".to_string());

        let catalog_path = lookup("CATALOG_PATH").unwrap_or_else(|| {
            if profile == "default" {
                "data/books.csv".to_string()
            } else {
                format!("data/books_{}.csv", profile)
            }
        });

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            api_base_url: lookup("API_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            catalog_path,
            google_books_url: lookup("GOOGLE_BOOKS_API_URL")
                .unwrap_or_else(|| DEFAULT_VOLUMES_URL.to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
        }
    }

    /// Read the process environment, with `--profile` from the command line
    /// taking precedence over `PROFILE`
    pub fn from_env(profile: Option<String>) -> Self {
        Self::from_lookup(|key| match (key, &profile) {
            ("PROFILE", Some(p)) => Some(p.clone()),
            _ => env::var(key).ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_local_backend() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.catalog_path, "data/books.csv");
        assert_eq!(config.google_books_url, DEFAULT_VOLUMES_URL);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.profile, "default");
    }

    #[test]
    fn profile_selects_catalog_file() {
        let config = config_from(&[("PROFILE", "demo")]);
        assert_eq!(config.catalog_path, "data/books_demo.csv");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("API_BASE_URL", "http://books.local:9100/"),
            ("CATALOG_PATH", "/srv/catalog.csv"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.api_base_url, "http://books.local:9100");
        assert_eq!(config.catalog_path, "/srv/catalog.csv");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn unparsable_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, 8000);
    }
}
