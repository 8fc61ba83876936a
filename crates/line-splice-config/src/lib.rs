use line_splice_engine::splicing::{EditRequest, EditSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// One `[[edit]]` table: collapse lines `start..=end` into `replacement`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEntry {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// A splice plan: which document to rewrite, where to write it, and the edits.
///
/// `document` and `output` may use `~` and `$VAR`; relative paths are taken
/// from the directory holding the plan file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub document: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub allow_adjacent: bool,
    #[serde(default, rename = "edit")]
    pub edits: Vec<EditEntry>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        config.document = Self::resolve_path(base, &config.document);
        config.output = config
            .output
            .take()
            .map(|output| Self::resolve_path(base, &output));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Plan file used when none is named: `splice.toml` in the working directory
    pub fn config_path() -> PathBuf {
        PathBuf::from("splice.toml")
    }

    /// Where the spliced document goes; the document itself unless `output` is set
    pub fn destination(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.document)
    }

    pub fn edit_set(&self) -> EditSet<String> {
        self.edits
            .iter()
            .map(|e| EditRequest::new(e.start, e.end, e.replacement.clone()))
            .collect::<EditSet<String>>()
            .allow_adjacent(self.allow_adjacent)
    }

    fn resolve_path(base: &Path, path: &Path) -> PathBuf {
        let expanded = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
        if expanded.is_relative() {
            base.join(expanded)
        } else {
            expanded
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
