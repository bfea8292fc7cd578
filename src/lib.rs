pub mod cli;
pub mod compile;
pub mod constants;
pub mod document;
pub mod error;
pub mod filename;
pub mod frontmatter;
pub mod markdown;
pub mod merge;
pub mod metadata;
pub mod note;
pub mod resolver;
pub mod settings;
pub mod source;
pub mod util;
pub mod word_count;

pub use cli::{Cli, Command};
pub use compile::{compile, Compiled};
pub use document::{Alignment, Document, Node};
pub use error::{ManuscriptError, Result};
pub use filename::sanitize_to_filename;
pub use markdown::{CmarkParser, MarkdownParser};
pub use merge::{merge_notes, MergeOutput};
pub use metadata::{ManuscriptMetadata, MetadataKey, Properties};
pub use note::NoteInput;
pub use resolver::resolve_overrides;
pub use settings::Settings;
pub use util::display_path;
pub use word_count::count_words;
