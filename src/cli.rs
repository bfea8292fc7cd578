use clap::{Parser, Subcommand};

/// emx-manuscript - Merge Markdown notes into a single manuscript
///
/// # Quick Reference
///
/// ```bash
/// emx-manuscript compile "My Story"          # Merge every note in the folder
/// emx-manuscript compile "chapter-one.md"    # Compile a single note
/// emx-manuscript compile "My Story" --json   # Emit metadata + document as JSON
/// emx-manuscript count "My Story"            # Word count only
/// emx-manuscript filename "My Story Title"   # Sanitized output filename
/// ```
///
/// ## Note Properties
///
/// Front matter keys override the settings for the whole manuscript:
/// `title`, `filename`, `outputDirectory`, `author`, `authorSurname`,
/// `contactInformation`. Later notes win; every override that differs from
/// the settings is reported.
///
/// ## Environment Variables
///
/// - `EMX_MANUSCRIPT_CONFIG`: Settings file (default: <config dir>/emx-manuscript/settings.json)
/// - `EMX_MANUSCRIPT_LOG`: Log filter, e.g. `debug` (default: warn)
#[derive(Parser, Debug)]
#[command(name = "emx-manuscript")]
#[command(version)]
#[command(about = "Merge Markdown notes into a single manuscript")]
pub struct Cli {
    /// Settings file (default: $EMX_MANUSCRIPT_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge a note or a folder of notes into one manuscript
    #[command(alias = "c")]
    Compile {
        /// Markdown file or folder of Markdown files
        path: String,

        /// Print metadata, document tree and notices as JSON
        #[arg(short = 'j', long)]
        json: bool,
    },

    /// Print the word count of a note or folder
    Count {
        /// Markdown file or folder of Markdown files
        path: String,
    },

    /// Print the manuscript filename for a title
    Filename {
        /// Manuscript title
        title: String,
    },
}
