//! Note merging
//!
//! Folds an ordered list of notes into one document tree and one metadata
//! record in a single pass:
//! 1. Apply the note's property overrides (compared against the pre-merge baseline)
//! 2. Parse the note and drop its front matter
//! 3. Add its words to the running word count
//! 4. Append its nodes, preceded by a scene break for every note after the first

use tracing::{debug, info};

use crate::document::{Document, Node};
use crate::markdown::MarkdownParser;
use crate::metadata::ManuscriptMetadata;
use crate::note::NoteInput;
use crate::resolver::resolve_overrides;
use crate::word_count::count_words;

/// Result of a merge: the combined tree and the notices raised on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutput {
    pub document: Document,
    pub notices: Vec<String>,
}

/// Merge `notes` in order, updating `metadata` in place.
///
/// `metadata.word_count` is reset and ends as the sum of every note's words.
/// An empty note list yields an empty document and no notices.
pub fn merge_notes(
    notes: &[NoteInput],
    metadata: &mut ManuscriptMetadata,
    parser: &impl MarkdownParser,
) -> MergeOutput {
    let baseline = metadata.clone();
    metadata.word_count = 0;

    let mut output = MergeOutput::default();

    for (index, note) in notes.iter().enumerate() {
        if let Some(properties) = &note.properties {
            let notices = resolve_overrides(metadata, &baseline, &note.name, properties);
            for notice in &notices {
                debug!(note = %note.name, "{}", notice);
            }
            output.notices.extend(notices);
        }

        let mut tree = parser.parse(&note.content);
        tree.strip_front_matter();

        let words = count_words(&tree);
        metadata.word_count += words;
        debug!(note = %note.name, words, nodes = tree.children.len(), "merged note");

        if index == 0 {
            output.document = tree;
        } else {
            output.document.children.push(Node::ThematicBreak);
            output.document.children.append(&mut tree.children);
        }
    }

    info!(
        notes = notes.len(),
        words = metadata.word_count,
        notices = output.notices.len(),
        "merge complete"
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::CmarkParser;
    use crate::metadata::Properties;

    /// Parser that turns every non-blank line into a paragraph
    struct LineParser;

    impl MarkdownParser for LineParser {
        fn parse(&self, text: &str) -> Document {
            Document::new(
                text.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| match line.strip_prefix("fm:") {
                        Some(value) => Node::FrontMatter { value: value.to_string() },
                        None => Node::paragraph(line),
                    })
                    .collect(),
            )
        }
    }

    fn metadata() -> ManuscriptMetadata {
        ManuscriptMetadata::new("Story Title", "story-title.docx", "/out")
    }

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_no_notes() {
        let mut meta = metadata();
        meta.word_count = 42;
        let output = merge_notes(&[], &mut meta, &CmarkParser::new());
        assert!(output.document.children.is_empty());
        assert!(output.notices.is_empty());
        assert_eq!(meta.word_count, 0);
    }

    #[test]
    fn test_merge_single_note() {
        let mut meta = metadata();
        let notes = vec![NoteInput::new("notey", "This is our story")];
        let output = merge_notes(&notes, &mut meta, &CmarkParser::new());

        let first = &output.document.children[0];
        assert!(matches!(first, Node::Paragraph { .. }));
        assert_eq!(first.children()[0].as_text(), Some("This is our story"));
        assert_eq!(meta.word_count, 4);
        assert_eq!(output.document.scene_breaks(), 0);
    }

    #[test]
    fn test_scene_break_between_notes() {
        let mut meta = metadata();
        let notes = vec![
            NoteInput::new("a", "one\ntwo"),
            NoteInput::new("b", ""),
            NoteInput::new("c", "three"),
        ];
        let output = merge_notes(&notes, &mut meta, &LineParser);
        assert_eq!(
            output.document.children,
            vec![
                Node::paragraph("one"),
                Node::paragraph("two"),
                Node::ThematicBreak,
                Node::ThematicBreak,
                Node::paragraph("three"),
            ]
        );
        assert_eq!(output.document.scene_breaks(), notes.len() - 1);
    }

    #[test]
    fn test_word_count_is_sum_of_notes() {
        let notes = vec![
            NoteInput::new("a", "It was a dark night."),
            NoteInput::new("b", "---\ntitle: Ignored words here\n---\n\nThe *storm* came."),
            NoteInput::new("c", "- [x] one\n- [ ] two three"),
        ];
        let parser = CmarkParser::new();
        let expected: usize = notes
            .iter()
            .map(|note| {
                let mut tree = parser.parse(&note.content);
                tree.strip_front_matter();
                count_words(&tree)
            })
            .sum();

        let mut meta = metadata();
        merge_notes(&notes, &mut meta, &parser);
        assert_eq!(expected, 11);
        assert_eq!(meta.word_count, expected);

        let mut reversed: Vec<NoteInput> = notes.clone();
        reversed.reverse();
        let mut meta = metadata();
        merge_notes(&reversed, &mut meta, &parser);
        assert_eq!(meta.word_count, expected);
    }

    #[test]
    fn test_front_matter_is_removed() {
        let mut meta = metadata();
        let notes = vec![NoteInput::new("a", "fm:title: x\nbody")];
        let output = merge_notes(&notes, &mut meta, &LineParser);
        assert_eq!(output.document.children, vec![Node::paragraph("body")]);
        assert_eq!(meta.word_count, 1);
    }

    #[test]
    fn test_notices_follow_note_order() {
        let mut meta = metadata();
        let notes = vec![
            NoteInput::new("notey", "A").with_properties(props(&[("title", "Title 1")])),
            NoteInput::new("notey 1", "B").with_properties(props(&[
                ("title", "Title 2"),
                ("contactInformation", "ada@example.com"),
                ("author", " "),
            ])),
        ];
        let output = merge_notes(&notes, &mut meta, &LineParser);
        assert_eq!(
            output.notices,
            vec![
                "Note notey re-defined the following properties: title".to_string(),
                "author property on note notey 1 is blank. Ignoring.".to_string(),
                "Note notey 1 re-defined the following properties: title, contactInformation"
                    .to_string(),
            ]
        );
        assert_eq!(meta.title, "Title 2");
        assert_eq!(meta.author, None);
    }

    #[test]
    fn test_repeated_override_compares_against_baseline() {
        let mut meta = metadata();
        let notes = vec![
            NoteInput::new("a", "A").with_properties(props(&[("title", "X")])),
            NoteInput::new("b", "B").with_properties(props(&[("title", "X")])),
            NoteInput::new("c", "C").with_properties(props(&[("title", "Story Title")])),
        ];
        let output = merge_notes(&notes, &mut meta, &LineParser);
        assert_eq!(
            output.notices,
            vec![
                "Note a re-defined the following properties: title".to_string(),
                "Note b re-defined the following properties: title".to_string(),
            ]
        );
        assert_eq!(meta.title, "Story Title");
    }
}
