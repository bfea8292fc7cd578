//! Note source: reads Markdown notes from disk
//!
//! A manuscript is either a single note or a folder of notes. Folder notes are
//! ordered by file name so every compile of the same folder merges in the
//! same order. Front matter is parsed into each note's property bag and cut
//! from the content, so the parser only ever sees the note body.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ManuscriptError, Result};
use crate::frontmatter;
use crate::note::NoteInput;
use crate::util;

/// Notes loaded from a source path, plus what the manuscript is called
#[derive(Debug, Clone)]
pub struct LoadedSource {
    /// Default manuscript title (folder name or note name)
    pub title: String,
    /// Folder the notes live in
    pub directory: PathBuf,
    pub notes: Vec<NoteInput>,
}

/// Load a single note or a folder of notes
pub fn load(path: &Path) -> Result<LoadedSource> {
    if path.is_dir() {
        Ok(LoadedSource {
            title: util::path_title(path),
            directory: path.to_path_buf(),
            notes: load_folder(path)?,
        })
    } else if path.is_file() && util::is_markdown(path) {
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(LoadedSource {
            title: util::path_title(path),
            directory,
            notes: vec![load_note(path)?],
        })
    } else {
        Err(ManuscriptError::UnsupportedSource {
            path: path.to_path_buf(),
        })
    }
}

/// Read one note; its name is the file stem
pub fn load_note(path: &Path) -> Result<NoteInput> {
    let content = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let (raw, body) = frontmatter::split(&content);
    let properties = match raw {
        Some(raw) => Some(frontmatter::properties(raw, path)?),
        None => None,
    };

    debug!(note = %name, has_properties = properties.is_some(), "loaded note");
    Ok(NoteInput {
        name,
        content: body.to_string(),
        properties,
    })
}

/// Read every Markdown file directly inside `dir`, sorted by file name
pub fn load_folder(dir: &Path) -> Result<Vec<NoteInput>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && util::is_markdown(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    paths.iter().map(|path| load_note(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_folder_sorted_markdown_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("02 second.md"), "Second").unwrap();
        fs::write(dir.path().join("01 first.md"), "First").unwrap();
        fs::write(dir.path().join("notes.txt"), "Not markdown").unwrap();
        fs::create_dir(dir.path().join("sub.md")).unwrap();

        let notes = load_folder(dir.path()).unwrap();
        let names: Vec<&str> = notes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["01 first", "02 second"]);
        assert_eq!(notes[0].content, "First");
        assert_eq!(notes[0].properties, None);
    }

    #[test]
    fn test_load_note_with_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opening.md");
        fs::write(&path, "---\ntitle: The Opening\ntags: [x]\n---\nOnce upon a time").unwrap();

        let note = load_note(&path).unwrap();
        assert_eq!(note.name, "opening");
        assert_eq!(note.content, "Once upon a time");
        let props = note.properties.unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["title"], "The Opening");
    }

    #[test]
    fn test_load_note_rejects_oversized_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.md");
        let filler = "x".repeat(crate::constants::MAX_FRONTMATTER_SIZE);
        fs::write(&path, format!("---\ntitle: Big\nfiller: {}\n---\nBody", filler)).unwrap();

        assert!(matches!(
            load_note(&path),
            Err(ManuscriptError::FrontMatterTooLarge { .. })
        ));
    }

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lonely Note.md");
        fs::write(&path, "Alone").unwrap();

        let source = load(&path).unwrap();
        assert_eq!(source.title, "Lonely Note");
        assert_eq!(source.directory, dir.path());
        assert_eq!(source.notes.len(), 1);
    }

    #[test]
    fn test_load_rejects_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            load(&path),
            Err(ManuscriptError::UnsupportedSource { .. })
        ));
        assert!(matches!(
            load(&dir.path().join("missing")),
            Err(ManuscriptError::UnsupportedSource { .. })
        ));
    }
}
