use crate::metadata::Properties;

/// One note handed to the merge engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    /// Note name, used in notices
    pub name: String,
    /// Markdown body
    pub content: String,
    /// Overrides extracted from the note's front matter
    pub properties: Option<Properties>,
}

impl NoteInput {
    /// Create a note without properties
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            properties: None,
        }
    }

    /// Attach an override bag
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }
}
