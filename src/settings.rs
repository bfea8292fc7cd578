//! User settings seeding each manuscript's metadata
//!
//! Settings live in a JSON file. Lookup order:
//! 1. Explicit path (`--config`)
//! 2. `EMX_MANUSCRIPT_CONFIG`
//! 3. `<config dir>/emx-manuscript/settings.json`
//!
//! A missing file means default settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants as C;
use crate::error::{ManuscriptError, Result};
use crate::filename::sanitize_to_filename;
use crate::metadata::ManuscriptMetadata;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub author: Option<String>,
    pub author_surname: Option<String>,
    pub contact_information: Option<String>,
    /// Where manuscripts are written; defaults to the source folder
    pub output_directory: Option<String>,
}

impl Settings {
    /// Load settings from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match settings_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load settings from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|source| ManuscriptError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the pre-merge metadata for a manuscript titled `title`.
    ///
    /// `source_dir` is used as the output directory when none is configured.
    pub fn seed(&self, title: &str, source_dir: &Path) -> ManuscriptMetadata {
        let output_directory = self
            .output_directory
            .clone()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| crate::display_path(source_dir));

        ManuscriptMetadata {
            author: non_blank(&self.author),
            author_surname: non_blank(&self.author_surname),
            contact_information: non_blank(&self.contact_information),
            ..ManuscriptMetadata::new(title, sanitize_to_filename(title), output_directory)
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve the settings file path from the environment or the user config dir
pub fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(C::ENV_CONFIG) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join(C::CONFIG_DIR_NAME).join(C::SETTINGS_FILENAME))
}
