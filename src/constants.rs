//! Constants for emx-manuscript
//!
//! This module contains the fixed strings, limits and extensions used by the
//! merge engine and the host commands.

// === File and Directory Names ===

/// Extension of the notes the source reads (without the dot)
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension appended to sanitized manuscript filenames
pub const MANUSCRIPT_EXTENSION: &str = ".docx";

/// Directory under the user config dir holding the settings file
pub const CONFIG_DIR_NAME: &str = "emx-manuscript";

/// Settings file name
pub const SETTINGS_FILENAME: &str = "settings.json";

// === Environment Variables ===

/// Overrides the settings file location
pub const ENV_CONFIG: &str = "EMX_MANUSCRIPT_CONFIG";

/// Log filter for the binary (EnvFilter syntax)
pub const ENV_LOG: &str = "EMX_MANUSCRIPT_LOG";

/// Log filter used when `EMX_MANUSCRIPT_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

// === Filename Sanitizing ===

/// Maximum length of the dash-joined word pieces of a manuscript filename
pub const MAX_FILENAME_LENGTH: usize = 32;

/// Separator placed between word pieces of a sanitized filename
pub const FILENAME_SEPARATOR: &str = "-";

/// Characters stripped from titles before they become filenames
pub const FORBIDDEN_FILENAME_PATTERN: &str = r#"[<>:"/\\|?*]"#;

// === Validation Limits ===

/// Maximum size of frontmatter to parse (prevents DoS on malformed files)
pub const MAX_FRONTMATTER_SIZE: usize = 64 * 1024; // 64KB

/// Frontmatter fence line
pub const FRONTMATTER_FENCE: &str = "---";

/// Alternative closing line for frontmatter (YAML document end marker)
pub const FRONTMATTER_END: &str = "...";

// === Defaults ===

/// Title used when nothing better can be derived from the source path
pub const UNTITLED_MANUSCRIPT_TITLE: &str = "Untitled";
