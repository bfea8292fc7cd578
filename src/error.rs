//! Error types for the host side of a manuscript compile.
//!
//! The merge engine itself never fails: blank or conflicting properties are
//! reported as notices. [`ManuscriptError`] covers what the host can get wrong
//! around it (reading notes, parsing front matter and settings, checking the
//! output directory).

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by note loading, settings and the compile pipeline.
#[derive(Debug, Error)]
pub enum ManuscriptError {
    /// An I/O error occurred while reading notes or settings.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A note's front matter is not valid YAML.
    #[error("invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        /// The note whose front matter failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        source: serde_yaml::Error,
    },

    /// A note's front matter exceeds the size limit.
    #[error("front matter in {} is too large ({size} bytes)", path.display())]
    FrontMatterTooLarge {
        /// The note carrying the oversized block.
        path: PathBuf,
        /// Size of the block in bytes.
        size: usize,
    },

    /// The settings file is not valid JSON.
    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        /// Path to the settings file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Serializing the compiled manuscript failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source path holds no Markdown content.
    #[error("no markdown found in {}", path.display())]
    NoMarkdown {
        /// The folder or file that was compiled.
        path: PathBuf,
    },

    /// The resolved output directory does not exist.
    #[error("output directory does not exist: {}", path.display())]
    OutputDirectoryMissing {
        /// The directory named by settings or a note override.
        path: PathBuf,
    },

    /// The source path is neither a Markdown file nor a directory.
    #[error("not a markdown file or folder: {}", path.display())]
    UnsupportedSource {
        /// The rejected path.
        path: PathBuf,
    },
}

/// Result alias used by the host-side functions.
pub type Result<T> = std::result::Result<T, ManuscriptError>;
