//! Compile pipeline: load notes, seed metadata, merge, validate the result

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::document::Document;
use crate::error::{ManuscriptError, Result};
use crate::markdown::MarkdownParser;
use crate::merge::merge_notes;
use crate::metadata::ManuscriptMetadata;
use crate::settings::Settings;
use crate::source;

/// A merged manuscript ready for a renderer
#[derive(Debug, Clone, Serialize)]
pub struct Compiled {
    pub metadata: ManuscriptMetadata,
    pub document: Document,
    pub notices: Vec<String>,
}

impl Compiled {
    /// Where the renderer should write the manuscript
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.metadata.output_directory).join(&self.metadata.filename)
    }
}

/// Compile the note or folder at `path`.
///
/// Fails when no note has any content, or when the output directory chosen by
/// settings or a note override does not exist.
pub fn compile(
    path: &Path,
    settings: &Settings,
    parser: &impl MarkdownParser,
) -> Result<Compiled> {
    let loaded = source::load(path)?;
    let mut metadata = settings.seed(&loaded.title, &loaded.directory);

    let output = merge_notes(&loaded.notes, &mut metadata, parser);
    if !output.document.has_content() {
        return Err(ManuscriptError::NoMarkdown {
            path: path.to_path_buf(),
        });
    }

    let output_dir = PathBuf::from(&metadata.output_directory);
    if !output_dir.is_dir() {
        return Err(ManuscriptError::OutputDirectoryMissing { path: output_dir });
    }

    info!(
        title = %metadata.title,
        words = metadata.word_count,
        notes = loaded.notes.len(),
        scene_breaks = output.document.scene_breaks(),
        "compiled manuscript"
    );

    Ok(Compiled {
        metadata,
        document: output.document,
        notices: output.notices,
    })
}
