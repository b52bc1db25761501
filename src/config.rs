//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/vampire-genealogy/genealogy.toml`
//! 3. Local config file passed to [`Settings::load`]
//! 4. Environment variables: `GENEALOGY_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::GenealogyResult;

/// Conversion year after which a vampire counts as millennial.
pub const DEFAULT_MILLENNIAL_THRESHOLD: i32 = 1980;

/// Settings for era-based queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Vampires converted strictly after this year are millennial
    pub millennial_threshold: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            millennial_threshold: DEFAULT_MILLENNIAL_THRESHOLD,
        }
    }
}

impl Settings {
    /// Load settings from defaults, global config, `local` and environment.
    ///
    /// The global file is optional; `local`, when given, must exist.
    #[instrument(level = "debug")]
    pub fn load(local: Option<&Path>) -> GenealogyResult<Self> {
        let mut builder = Config::builder().set_default(
            "millennial_threshold",
            i64::from(DEFAULT_MILLENNIAL_THRESHOLD),
        )?;

        if let Some(global) = Self::global_config_path() {
            debug!(path = %global.display(), "Global config candidate");
            builder = builder.add_source(File::from(global).required(false));
        }
        if let Some(local) = local {
            builder = builder.add_source(File::from(local.to_path_buf()).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("GENEALOGY").try_parsing(true));

        let settings: Settings = builder.build()?.try_deserialize()?;
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Location of the global config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vampire-genealogy")
            .map(|dirs| dirs.config_dir().join("genealogy.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_constructed_then_threshold_is_1980() {
        assert_eq!(Settings::default().millennial_threshold, 1980);
    }
}
