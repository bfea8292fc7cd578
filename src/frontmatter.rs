//! YAML frontmatter extraction
//!
//! Splits a leading `---` block off a note and turns it into a [`Properties`]
//! bag for the merge engine. Only the overridable keys are kept, and scalar
//! values are normalized to strings.

use std::path::Path;

use crate::constants as C;
use crate::error::{ManuscriptError, Result};
use crate::metadata::{MetadataKey, Properties};

/// Split `content` into its raw frontmatter (without fences) and the body.
///
/// A note has frontmatter when its first line is a `---` fence and a later line
/// is a `---` or `...` fence. Trailing whitespace on fence lines is allowed, and
/// the block may be empty or start with blank lines. The body is what gets
/// parsed as Markdown, so whatever this function treats as frontmatter never
/// reaches the document tree.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let mut lines = content.split_inclusive('\n');
    let Some(opening) = lines.next() else {
        return (None, content);
    };
    if opening.trim_end() != C::FRONTMATTER_FENCE {
        return (None, content);
    }

    let start = opening.len();
    let mut offset = start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == C::FRONTMATTER_FENCE || trimmed == C::FRONTMATTER_END {
            let frontmatter = &content[start..offset];
            let body = &content[offset + line.len()..];
            return (Some(frontmatter), body.trim_start_matches(['\n', '\r']));
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse raw frontmatter into an override bag
///
/// Blocks larger than [`C::MAX_FRONTMATTER_SIZE`] are rejected rather than
/// skipped, so their overrides are never lost silently. `path` is only used
/// for error reporting.
pub fn properties(frontmatter: &str, path: &Path) -> Result<Properties> {
    if frontmatter.len() > C::MAX_FRONTMATTER_SIZE {
        return Err(ManuscriptError::FrontMatterTooLarge {
            path: path.to_path_buf(),
            size: frontmatter.len(),
        });
    }

    let mut properties = Properties::new();
    if frontmatter.trim().is_empty() {
        return Ok(properties);
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(frontmatter).map_err(|source| ManuscriptError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

    let serde_yaml::Value::Mapping(map) = yaml else {
        return Ok(properties);
    };

    for (name, value) in &map {
        let Some(key) = name.as_str().and_then(MetadataKey::from_name) else {
            continue;
        };
        if let Some(value) = scalar_to_string(value) {
            properties.insert(key.as_str().to_string(), value);
        }
    }

    Ok(properties)
}

/// Convert a YAML scalar to its string form; structured values are skipped
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_) => None,
    }
}
