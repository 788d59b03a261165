use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PORT: u16 = 3000;
pub const FALLBACK_ORIGIN: &str = "http://localhost:3000";

const DEFAULT_LOADING_DELAY_MS: u64 = 500;
const DEFAULT_UPLOAD_DELAY_MS: u64 = 800;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub port: u16,
    pub public_origin: Option<String>,
    pub loading_delay: Duration,
    pub upload_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            port: DEFAULT_PORT,
            public_origin: None,
            loading_delay: Duration::from_millis(DEFAULT_LOADING_DELAY_MS),
            upload_delay: Duration::from_millis(DEFAULT_UPLOAD_DELAY_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup("CTRACE_API_URL")
            .or_else(|| lookup("NEXT_PUBLIC_API_URL"))
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.api_url);

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let public_origin = lookup("CTRACE_PUBLIC_ORIGIN")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty());

        Self {
            api_url,
            port,
            public_origin,
            loading_delay: millis(lookup("CTRACE_LOADING_DELAY_MS"), defaults.loading_delay),
            upload_delay: millis(lookup("CTRACE_UPLOAD_DELAY_MS"), defaults.upload_delay),
        }
    }

    pub fn verify_url(&self, host: Option<&str>) -> String {
        let origin = match (&self.public_origin, host) {
            (Some(origin), _) => origin.clone(),
            (None, Some(host)) if !host.is_empty() => format!("http://{host}"),
            _ => FALLBACK_ORIGIN.to_string(),
        };
        format!("{origin}/verify")
    }
}

fn millis(value: Option<String>, fallback: Duration) -> Duration {
    value
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.port, 3000);
        assert_eq!(config.loading_delay, Duration::from_millis(500));
        assert_eq!(config.upload_delay, Duration::from_millis(800));
        assert!(config.public_origin.is_none());
    }

    #[test]
    fn api_url_prefers_ctrace_variable_and_trims_slash() {
        let config = Config::from_lookup(lookup(&[
            ("CTRACE_API_URL", "https://api.example.com/"),
            ("NEXT_PUBLIC_API_URL", "http://ignored"),
        ]));
        assert_eq!(config.api_url, "https://api.example.com");

        let config = Config::from_lookup(lookup(&[("NEXT_PUBLIC_API_URL", "http://10.0.0.2:9000")]));
        assert_eq!(config.api_url, "http://10.0.0.2:9000");
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("CTRACE_UPLOAD_DELAY_MS", "-4"),
            ("CTRACE_LOADING_DELAY_MS", "0"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_delay, Duration::from_millis(800));
        assert_eq!(config.loading_delay, Duration::ZERO);
    }

    #[test]
    fn verify_url_sources() {
        let config = Config::default();
        assert_eq!(config.verify_url(Some("demo.local:3000")), "http://demo.local:3000/verify");
        assert_eq!(config.verify_url(None), "http://localhost:3000/verify");

        let config = Config::from_lookup(lookup(&[("CTRACE_PUBLIC_ORIGIN", "https://c-trace.app/")]));
        assert_eq!(config.verify_url(Some("internal:3000")), "https://c-trace.app/verify");
    }
}
