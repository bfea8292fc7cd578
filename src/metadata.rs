//! Manuscript metadata record and the closed set of overridable keys

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-note override bag, as extracted by the host from front matter.
///
/// Keys outside [`MetadataKey::ALL`] are carried but never applied.
pub type Properties = BTreeMap<String, String>;

/// Metadata fields a note may override.
///
/// Declaration order is the order keys are reported in notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataKey {
    Title,
    Filename,
    OutputDirectory,
    Author,
    AuthorSurname,
    ContactInformation,
}

impl MetadataKey {
    /// Every overridable key, in reporting order
    pub const ALL: [MetadataKey; 6] = [
        MetadataKey::Title,
        MetadataKey::Filename,
        MetadataKey::OutputDirectory,
        MetadataKey::Author,
        MetadataKey::AuthorSurname,
        MetadataKey::ContactInformation,
    ];

    /// Property name as written in front matter
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::Title => "title",
            MetadataKey::Filename => "filename",
            MetadataKey::OutputDirectory => "outputDirectory",
            MetadataKey::Author => "author",
            MetadataKey::AuthorSurname => "authorSurname",
            MetadataKey::ContactInformation => "contactInformation",
        }
    }

    /// Look up a key by its property name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata threaded through a merge and handed to the renderer afterwards.
///
/// `word_count` belongs to the merge engine: it is reset when a merge starts
/// and is not reachable through [`MetadataKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptMetadata {
    pub title: String,
    pub filename: String,
    pub output_directory: String,
    /// Absent author details mean the manuscript is anonymized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<String>,
    #[serde(default)]
    pub word_count: usize,
}

impl ManuscriptMetadata {
    /// Create a record with the required fields and no author details
    pub fn new(
        title: impl Into<String>,
        filename: impl Into<String>,
        output_directory: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            filename: filename.into(),
            output_directory: output_directory.into(),
            ..Self::default()
        }
    }

    /// Current value of an overridable field
    pub fn get(&self, key: MetadataKey) -> Option<&str> {
        match key {
            MetadataKey::Title => Some(&self.title),
            MetadataKey::Filename => Some(&self.filename),
            MetadataKey::OutputDirectory => Some(&self.output_directory),
            MetadataKey::Author => self.author.as_deref(),
            MetadataKey::AuthorSurname => self.author_surname.as_deref(),
            MetadataKey::ContactInformation => self.contact_information.as_deref(),
        }
    }

    /// Overwrite an overridable field
    pub fn set(&mut self, key: MetadataKey, value: String) {
        match key {
            MetadataKey::Title => self.title = value,
            MetadataKey::Filename => self.filename = value,
            MetadataKey::OutputDirectory => self.output_directory = value,
            MetadataKey::Author => self.author = Some(value),
            MetadataKey::AuthorSurname => self.author_surname = Some(value),
            MetadataKey::ContactInformation => self.contact_information = Some(value),
        }
    }

    /// True when no author is set and the manuscript should be anonymized
    pub fn is_anonymous(&self) -> bool {
        self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in MetadataKey::ALL {
            assert_eq!(MetadataKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(MetadataKey::from_name("wordCount"), None);
        assert_eq!(MetadataKey::from_name("Title"), None);
    }

    #[test]
    fn test_get_and_set() {
        let mut meta = ManuscriptMetadata::new("Story", "story.docx", "/tmp");
        assert_eq!(meta.get(MetadataKey::Title), Some("Story"));
        assert_eq!(meta.get(MetadataKey::Author), None);
        assert!(meta.is_anonymous());

        meta.set(MetadataKey::Author, "Ada Lovelace".to_string());
        meta.set(MetadataKey::OutputDirectory, "/out".to_string());
        assert_eq!(meta.get(MetadataKey::Author), Some("Ada Lovelace"));
        assert_eq!(meta.output_directory, "/out");
        assert!(!meta.is_anonymous());
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut meta = ManuscriptMetadata::new("Story", "story.docx", "/tmp");
        meta.word_count = 12;
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["outputDirectory"], "/tmp");
        assert_eq!(json["wordCount"], 12);
        assert!(json.get("author").is_none());
    }
}
