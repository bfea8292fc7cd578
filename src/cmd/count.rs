//! Word count command module

use std::path::Path;

use emx_manuscript::{source, CmarkParser, ManuscriptMetadata};

pub fn run(path: &str) -> emx_manuscript::Result<()> {
    let loaded = source::load(Path::new(path))?;

    let mut metadata = ManuscriptMetadata::default();
    emx_manuscript::merge_notes(&loaded.notes, &mut metadata, &CmarkParser::new());

    println!("{}", metadata.word_count);
    Ok(())
}
