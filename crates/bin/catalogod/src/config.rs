//! Daemon settings: `catalogo.toml` first, then `CATALOGO_*` variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "catalogo.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Any URL accepted by `sqlx::sqlite::SqliteConnectOptions`.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives.
    pub filter: String,
}

impl Config {
    /// Read settings from the process environment and the working directory.
    ///
    /// # Errors
    ///
    /// Fails when `catalogo.toml` exists but cannot be read or parsed, or
    /// when the merged settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    fn resolve(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `CATALOGO_BIND` beats `CATALOGO_HOST`/`CATALOGO_PORT`; `RUST_LOG`
    /// beats `CATALOGO_LOG`. Unparsable ports are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("CATALOGO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CATALOGO_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = lookup("CATALOGO_BIND")
            .as_deref()
            .and_then(|bind| bind.rsplit_once(':'))
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(url) = lookup("CATALOGO_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("CATALOGO_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero"));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:catalogo.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catalogod=info,catalogo=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn missing_file() -> &'static Path {
        Path::new("does-not-exist/catalogo.toml")
    }

    #[test]
    fn should_fall_back_to_defaults_without_file_or_env() {
        let config = Config::resolve(missing_file(), env(&[])).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_url(), "sqlite:catalogo.db?mode=rwc");
        assert_eq!(
            config.logging.filter,
            "catalogod=info,catalogo=info,tower_http=debug"
        );
    }

    #[test]
    fn should_keep_defaults_for_sections_missing_from_file() {
        let config: Config = toml::from_str("[database]\nurl = 'sqlite::memory:'").unwrap();

        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_apply_individual_overrides() {
        let config = Config::resolve(
            missing_file(),
            env(&[
                ("CATALOGO_HOST", "127.0.0.1"),
                ("CATALOGO_PORT", "8081"),
                ("CATALOGO_DATABASE_URL", "sqlite::memory:"),
                ("CATALOGO_LOG", "warn"),
            ]),
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_let_bind_override_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("CATALOGO_PORT", "8081"),
            ("CATALOGO_BIND", "localhost:7000"),
        ]));
        assert_eq!(config.bind_addr(), "localhost:7000");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("CATALOGO_PORT", "http")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_prefer_rust_log_over_catalogo_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("CATALOGO_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_validate_after_overrides() {
        let result = Config::resolve(missing_file(), env(&[("CATALOGO_PORT", "0")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = Config::resolve(missing_file(), env(&[("CATALOGO_DATABASE_URL", " ")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn should_name_the_file_when_it_cannot_be_read() {
        // A directory exists but is not a readable file.
        let err = Config::from_file(Path::new("src")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("src"));
    }
}
