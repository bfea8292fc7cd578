//! Metadata override resolution
//!
//! Applies one note's property bag onto the shared [`ManuscriptMetadata`].
//! Values are trimmed before they are compared and before they are written.
//! Redefinitions are detected against the baseline captured before the merge
//! started, so a note repeating an earlier note's change is still reported.

use crate::metadata::{ManuscriptMetadata, MetadataKey, Properties};

/// Apply `properties` from note `note_name` onto `metadata`.
///
/// Returns the notices for this note: one per blank value, then at most one
/// listing every key whose new value differs from `baseline`.
pub fn resolve_overrides(
    metadata: &mut ManuscriptMetadata,
    baseline: &ManuscriptMetadata,
    note_name: &str,
    properties: &Properties,
) -> Vec<String> {
    let mut notices = Vec::new();
    let mut redefined = Vec::new();

    for key in MetadataKey::ALL {
        let Some(raw) = properties.get(key.as_str()) else {
            continue;
        };

        let value = raw.trim();
        if value.is_empty() {
            notices.push(blank_notice(key, note_name));
            continue;
        }

        if baseline.get(key) != Some(value) {
            redefined.push(key);
        }
        metadata.set(key, value.to_string());
    }

    if !redefined.is_empty() {
        notices.push(redefined_notice(note_name, &redefined));
    }

    notices
}

fn blank_notice(key: MetadataKey, note_name: &str) -> String {
    format!("{} property on note {} is blank. Ignoring.", key, note_name)
}

fn redefined_notice(note_name: &str, keys: &[MetadataKey]) -> String {
    let keys: Vec<&str> = keys.iter().map(|key| key.as_str()).collect();
    format!(
        "Note {} re-defined the following properties: {}",
        note_name,
        keys.join(", ")
    )
}
