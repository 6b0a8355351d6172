//! Configuration for the trivia server
//!
//! Read from `~/.trivia/config.toml` (or `$TRIVIA_CONFIG`). A missing file
//! means defaults. After the file, `DATABASE_URL` and `TRIVIA_BIND` override
//! their keys, and `${VAR}` references in the database url are expanded.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:5000"
//!
//! [database]
//! url = "postgres://${PGUSER}@localhost:5432/trivia"
//! max_connections = 5
//! seed_on_start = true
//!
//! [storage]
//! backend = "postgres"   # or "memory"
//! ```

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriviaError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Insert the bundled categories and questions when the tables are empty
    pub seed_on_start: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/trivia".to_string(),
            max_connections: 5,
            seed_on_start: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Seeded in-process tables, lost on restart
    Memory,
}

impl TriviaConfig {
    /// Load from the default path with process environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path(), |key| env::var(key).ok())
    }

    /// Load from `path`, resolving overrides through `lookup`.
    pub fn load_from<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| TriviaError::toml(path, e))?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_env(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Config file path: `$TRIVIA_CONFIG` or `~/.trivia/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("TRIVIA_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia/config.toml")
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = url;
        }

        if let Some(bind) = lookup("TRIVIA_BIND").filter(|b| !b.is_empty()) {
            self.server.bind = bind
                .parse()
                .map_err(|_| TriviaError::config(format!("TRIVIA_BIND '{}' is not an address", bind)))?;
        }

        self.database.url = expand_string(&self.database.url, lookup);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(TriviaError::config("database.max_connections must be at least 1"));
        }
        if self.storage.backend == StorageBackend::Postgres && self.database.url.is_empty() {
            return Err(TriviaError::config("database.url is required for the postgres backend"));
        }
        Ok(())
    }
}

/// Expand `${VAR}` references. Unknown variables expand to nothing.
fn expand_string<F>(s: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                result.push_str(&lookup(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated reference, keep it literally
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TriviaConfig::load_from(&dir.path().join("nope.toml"), env_of(&[])).unwrap();
        assert_eq!(config, TriviaConfig::default());
        assert_eq!(config.server.bind.port(), 5000);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\nbackend = \"memory\"\n\n[database]\nmax_connections = 2").unwrap();

        let config = TriviaConfig::load_from(file.path(), env_of(&[])).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.database.max_connections, 2);
        assert!(config.database.seed_on_start);
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nurl = \"postgres://file/trivia\"").unwrap();

        let config = TriviaConfig::load_from(
            file.path(),
            env_of(&[
                ("DATABASE_URL", "postgres://env/trivia"),
                ("TRIVIA_BIND", "0.0.0.0:8080"),
            ]),
        )
        .unwrap();

        assert_eq!(config.database.url, "postgres://env/trivia");
        assert_eq!(config.server.bind, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn expands_variables_in_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nurl = \"postgres://${{PGUSER}}:${{PGPASS}}@db/trivia\"").unwrap();

        let config =
            TriviaConfig::load_from(file.path(), env_of(&[("PGUSER", "quiz"), ("PGPASS", "s3cret")]))
                .unwrap();
        assert_eq!(config.database.url, "postgres://quiz:s3cret@db/trivia");
    }

    #[test]
    fn bad_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\nbackend = \"redis\"").unwrap();

        let err = TriviaConfig::load_from(file.path(), env_of(&[])).unwrap_err();
        assert!(matches!(err, TriviaError::Toml { .. }));
    }

    #[test]
    fn bad_bind_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TriviaConfig::load_from(
            &dir.path().join("none.toml"),
            env_of(&[("TRIVIA_BIND", "not-an-addr")]),
        )
        .unwrap_err();
        assert!(matches!(err, TriviaError::Config { .. }));
    }

    #[test]
    fn expand_keeps_unterminated_reference() {
        let lookup = env_of(&[]);
        assert_eq!(expand_string("abc${oops", &lookup), "abc${oops");
        assert_eq!(expand_string("${MISSING}x", &lookup), "x");
    }
}
