use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub twitter: TwitterConfig,
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwitterConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_base() -> String {
    "https://api.twitter.com".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// API credentials. Only read from the environment, never from the file.
#[derive(Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
    pub bearer_token: Option<String>,
}

const CREDENTIAL_VARS: [&str; 5] = [
    "TWITTER_API_KEY",
    "TWITTER_API_SECRET",
    "TWITTER_ACCESS_TOKEN",
    "TWITTER_ACCESS_TOKEN_SECRET",
    "TWITTER_BEARER_TOKEN",
];

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: get(CREDENTIAL_VARS[0]),
            api_secret: get(CREDENTIAL_VARS[1]),
            access_token: get(CREDENTIAL_VARS[2]),
            access_token_secret: get(CREDENTIAL_VARS[3]),
            bearer_token: get(CREDENTIAL_VARS[4]),
        }
    }

    /// Names of the variables that were not provided.
    pub fn missing(&self) -> Vec<&'static str> {
        let values = [
            &self.api_key,
            &self.api_secret,
            &self.access_token,
            &self.access_token_secret,
            &self.bearer_token,
        ];
        CREDENTIAL_VARS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &redact(&self.api_secret))
            .field("access_token", &redact(&self.access_token))
            .field("access_token_secret", &redact(&self.access_token_secret))
            .field("bearer_token", &redact(&self.bearer_token))
            .finish()
    }
}

impl Config {
    /// Load the file (explicit path, else the default location if present),
    /// then apply environment overrides and credentials.
    ///
    /// Missing credentials only produce a warning; the first API call is
    /// where they fail.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.credentials = Credentials::from_env();

        let missing = config.credentials.missing();
        if !missing.is_empty() {
            warn!("Credentials not set: {}", missing.join(", "));
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("replydraw").join("config.toml"))
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("REPLYDRAW_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("REPLYDRAW_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid REPLYDRAW_PORT value: {}", port))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.address(), "127.0.0.1:5000");
        assert_eq!(config.twitter.api_base, "https://api.twitter.com");
        assert_eq!(config.twitter.page_size, 100);
        assert_eq!(config.twitter.timeout_secs, 20);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 8080

            [twitter]
            page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.twitter.page_size, 50);
        assert_eq!(config.twitter.timeout_secs, 20);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("[server]\nport = \"not a number\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost = \"0.0.0.0\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(lookup_from(&[
                ("REPLYDRAW_HOST", "0.0.0.0"),
                ("REPLYDRAW_PORT", "9000"),
            ]))
            .unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_bad_port_override_is_error() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(lookup_from(&[("REPLYDRAW_PORT", "abc")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_credentials_from_lookup() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("TWITTER_API_KEY", "key"),
            ("TWITTER_BEARER_TOKEN", "bearer"),
            ("TWITTER_ACCESS_TOKEN", "   "),
        ]));
        assert_eq!(creds.api_key.as_deref(), Some("key"));
        assert_eq!(creds.bearer_token.as_deref(), Some("bearer"));
        assert_eq!(creds.access_token, None);
        assert_eq!(
            creds.missing(),
            vec![
                "TWITTER_API_SECRET",
                "TWITTER_ACCESS_TOKEN",
                "TWITTER_ACCESS_TOKEN_SECRET"
            ]
        );
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::from_lookup(lookup_from(&[("TWITTER_BEARER_TOKEN", "s3cret")]));
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<set>"));
    }
}
