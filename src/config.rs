//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a segtext.toml, and if present we load settings from there.
//! This provides the output path, JSON layout and the extensions read as markdown.

use crate::output::{Layout, DEFAULT_INDENT, DEFAULT_OUTPUT};
use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "segtext.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from segtext.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_OUTPUT.to_string())]
    /// Path the segments are written to.
    pub output: String,
    #[facet(default = DEFAULT_INDENT)]
    /// Spaces per indentation level in the written JSON.
    pub indent: usize,
    #[facet(default = false)]
    /// Write headings alongside segment texts.
    pub annotate: bool,
    #[facet(default = vec!["md".to_string(), "markdown".to_string()])]
    /// File suffixes read as markdown when no format is given.
    pub markdown_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            indent: DEFAULT_INDENT,
            annotate: false,
            markdown_extensions: vec!["md".to_string(), "markdown".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from segtext.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Command line values; any that are set win over the config file.
pub struct Overrides {
    /// Output path.
    pub output: Option<PathBuf>,
    /// Indentation width.
    pub indent: Option<usize>,
    /// Force the annotated layout.
    pub annotate: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Output settings after command line overrides are applied.
pub struct Settings {
    /// Where the segments are written.
    pub output: PathBuf,
    /// JSON layout.
    pub layout: Layout,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Config {
    #[must_use]
    /// Combine the loaded preferences with command line overrides.
    pub fn resolve(&self, overrides: Overrides) -> Settings {
        let layout = if overrides.annotate || self.annotate {
            Layout::Annotated
        } else {
            Layout::Plain
        };
        Settings {
            output: overrides
                .output
                .unwrap_or_else(|| PathBuf::from(&self.output)),
            layout,
            indent: overrides.indent.unwrap_or(self.indent),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
