//! Compile command module

use std::path::Path;

use emx_manuscript::{CmarkParser, Settings};

pub fn run(settings: &Settings, path: &str, json: bool) -> emx_manuscript::Result<()> {
    let compiled = emx_manuscript::compile(Path::new(path), settings, &CmarkParser::new())?;

    for notice in &compiled.notices {
        eprintln!("notice: {}", notice);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    } else {
        // Output full path for shell pipeline compatibility
        println!("{}", emx_manuscript::display_path(&compiled.output_path()));
        println!("Title: {}", compiled.metadata.title);
        if compiled.metadata.is_anonymous() {
            println!("Author: (anonymous)");
        } else if let Some(author) = &compiled.metadata.author {
            println!("Author: {}", author);
        }
        println!("Words: {}", compiled.metadata.word_count);
    }

    Ok(())
}
