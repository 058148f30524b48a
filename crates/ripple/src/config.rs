//! Configuration for the `ripple` command line.
//!
//! Settings come from three layers, highest priority first:
//!
//! 1. Command-line flags
//! 2. A YAML config file (`--config <FILE>`, or `ripple.yaml` in the current
//!    directory when present)
//! 3. Built-in defaults
//!
//! ```yaml
//! graph: build/deps.json
//! max-display: 25
//! json: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "ripple.yaml";

/// Default number of items listed per group in text output.
pub const DEFAULT_MAX_DISPLAY: usize = 15;

/// Contents of a `ripple.yaml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Graph snapshot used when `--graph` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Maximum items listed per group in text output.
    #[serde(default = "default_max_display")]
    pub max_display: usize,

    /// Emit JSON instead of text by default.
    #[serde(default)]
    pub json: bool,
}

fn default_max_display() -> usize {
    DEFAULT_MAX_DISPLAY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: None,
            max_display: DEFAULT_MAX_DISPLAY,
            json: false,
        }
    }
}

impl Config {
    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        if config.max_display == 0 {
            return Err(Error::Config("max-display must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// Relative `graph` paths are resolved against the config file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        if let Some(dir) = path.parent() {
            config.graph = config.graph.take().map(|graph| {
                if graph.is_relative() {
                    dir.join(graph)
                } else {
                    graph
                }
            });
        }

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. Without one, `ripple.yaml` in `dir` is
    /// used if present, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!(dir = %dir.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Pick the graph snapshot path: the flag if given, else the config value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if neither source provides one.
    pub fn graph_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.graph.clone()).ok_or_else(|| {
            Error::Config(format!(
                "no graph snapshot given; pass --graph or set `graph` in {CONFIG_FILE_NAME}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").expect("empty mapping is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn blank_file_uses_defaults() {
        let config = Config::from_yaml("\n  \n").expect("blank file is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = Config::from_yaml("graph: deps.json\nmax-display: 3\njson: true\n")
            .expect("valid config");

        assert_eq!(config.graph, Some(PathBuf::from("deps.json")));
        assert_eq!(config.max_display, 3);
        assert!(config.json);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_yaml("grpah: deps.json\n").expect_err("typo should be rejected");
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn rejects_zero_max_display() {
        let err = Config::from_yaml("max-display: 0\n").expect_err("zero should be rejected");
        assert!(err.to_string().contains("max-display"));
    }

    #[test]
    fn flag_overrides_config_graph() {
        let config = Config {
            graph: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        };

        let path = config
            .graph_path(Some(PathBuf::from("from-flag.json")))
            .expect("flag is set");
        assert_eq!(path, PathBuf::from("from-flag.json"));

        let path = config.graph_path(None).expect("config is set");
        assert_eq!(path, PathBuf::from("from-config.json"));
    }

    #[test]
    fn missing_graph_is_a_config_error() {
        let err = Config::default()
            .graph_path(None)
            .expect_err("no graph anywhere");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn discover_resolves_relative_graph_against_config_dir() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "graph: deps.json\n")
            .expect("failed to write config");

        let config = Config::discover(None, dir.path()).expect("config should load");

        assert_eq!(config.graph, Some(dir.path().join("deps.json")));
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let config = Config::discover(None, dir.path()).expect("defaults");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let err = Config::discover(Some(dir.path().join("nope.yaml").as_path()), dir.path())
            .expect_err("explicit path must exist");
        assert!(matches!(err, Error::Io(_)));
    }
}
