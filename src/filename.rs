//! Manuscript filename sanitizing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

static FORBIDDEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(C::FORBIDDEN_FILENAME_PATTERN).expect("forbidden filename pattern is valid")
});

/// Convert a title into a manuscript file name.
///
/// Lower-cases the title, strips characters that file systems reject, and joins
/// the words with dashes for as long as the result stays within
/// [`C::MAX_FILENAME_LENGTH`]. A first word longer than the limit is kept whole.
pub fn sanitize_to_filename(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned = FORBIDDEN.replace_all(&lowered, "");

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;

    for piece in cleaned.split_whitespace() {
        let added = if kept.is_empty() {
            piece.chars().count()
        } else {
            piece.chars().count() + C::FILENAME_SEPARATOR.len()
        };
        if !kept.is_empty() && length + added > C::MAX_FILENAME_LENGTH {
            break;
        }
        kept.push(piece);
        length += added;
    }

    format!("{}{}", kept.join(C::FILENAME_SEPARATOR), C::MANUSCRIPT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_long_titles() {
        assert_eq!(
            sanitize_to_filename("Example Folder Name That Is Maybeeeee Too Long"),
            "example-folder-name-that-is.docx"
        );
    }

    #[test]
    fn test_keeps_single_long_piece() {
        assert_eq!(
            sanitize_to_filename("Example-Folder-Name-That-Is-Maybe-Too-Long"),
            "example-folder-name-that-is-maybe-too-long.docx"
        );
    }

    #[test]
    fn test_strips_forbidden_characters() {
        assert_eq!(
            sanitize_to_filename("*LOOK* <Example>: \"Folder| /Name\\?"),
            "look-example-folder-name.docx"
        );
        assert_eq!(sanitize_to_filename("A<B"), "ab.docx");
    }

    #[test]
    fn test_exact_limit_is_kept() {
        // 32 characters including dashes
        let title = "aaaaaaaaaa bbbbbbbbbb cccccccccc";
        assert_eq!(sanitize_to_filename(title), "aaaaaaaaaa-bbbbbbbbbb-cccccccccc.docx");
        assert_eq!(
            sanitize_to_filename("aaaaaaaaaa bbbbbbbbbb ccccccccccc"),
            "aaaaaaaaaa-bbbbbbbbbb.docx"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(sanitize_to_filename("  My \t Story \n"), "my-story.docx");
    }
}
