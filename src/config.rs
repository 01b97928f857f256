// Gateway Configuration
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub service_port: u16,
    pub host: String,

    // Upstream knowledge service
    pub knowledge_service_url: String,
    pub request_timeout_secs: u64,
    pub tls_verify: bool,

    // Inbound CORS; empty means any origin
    pub cors_allowed_origins: Vec<String>,

    pub log_format: LogFormat,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            service_port: var("SERVICE_PORT", "8000")
                .parse()
                .context("SERVICE_PORT must be a port number")?,
            host: var("HOST", "0.0.0.0"),

            knowledge_service_url: var("KNOWLEDGE_SERVICE_URL", "https://localhost:7254")
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            tls_verify: parse_bool("UPSTREAM_TLS_VERIFY", &var("UPSTREAM_TLS_VERIFY", "true"))?,

            cors_allowed_origins: parse_origins(&var("CORS_ALLOWED_ORIGINS", "*")),

            log_format: match var("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => bail!("LOG_FORMAT must be `text` or `json`, got `{other}`"),
            },
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{key} must be a boolean, got `{raw}`"),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<GatewayConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_verify_tls_and_allow_any_origin() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.knowledge_service_url, "https://localhost:7254");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.tls_verify);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SERVICE_PORT", "9100"),
            ("KNOWLEDGE_SERVICE_URL", "http://knowledge:5000/"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("UPSTREAM_TLS_VERIFY", "false"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://app.example.com"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.service_port, 9100);
        assert_eq!(config.knowledge_service_url, "http://knowledge:5000");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(!config.tls_verify);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("SERVICE_PORT", "eighty")]).is_err());
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config_from(&[("UPSTREAM_TLS_VERIFY", "maybe")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn wildcard_anywhere_in_origins_means_any() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "http://a.test,*")]).unwrap();
        assert!(config.cors_allowed_origins.is_empty());
    }
}
