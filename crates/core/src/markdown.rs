//! Markdown document assembly.
//!
//! Each non-empty slide becomes a fragment that starts with a `---`
//! separator and a blank line.

use crate::{Document, SlideRecord};

/// Separator line written before every slide fragment.
pub const SLIDE_SEPARATOR: &str = "---";

/// Heading written before speaker notes.
pub const NOTES_HEADING: &str = "Note:";

/// Accumulates slide fragments into a document.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    lines: Vec<String>,
    slides: usize,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the fragment for one slide.
    ///
    /// Returns false, leaving the document untouched, when the record is empty.
    ///
    /// # Example output
    /// ```text
    /// ---
    ///
    /// ## Title
    ///
    /// Body line
    ///
    /// ![rId2](/img/image1.png)
    ///
    /// Note:
    ///
    /// Speaker note
    /// ```
    pub fn push_slide(&mut self, record: &SlideRecord) -> bool {
        if record.is_empty() {
            return false;
        }

        self.lines.push(SLIDE_SEPARATOR.to_string());
        self.lines.push(String::new());
        self.lines.extend(record.text.iter().cloned());

        if !record.images.is_empty() {
            self.lines.push(String::new());
            self.lines.extend(record.images.iter().cloned());
        }

        if !record.notes.is_empty() {
            self.lines.push(NOTES_HEADING.to_string());
            self.lines.push(String::new());
            self.lines.extend(record.notes.iter().cloned());
        }

        self.slides += 1;
        true
    }

    /// Number of slides that contributed a fragment.
    pub fn slide_count(&self) -> usize {
        self.slides
    }

    pub fn finish(self) -> Document {
        Document::new(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &[&str], images: &[&str], notes: &[&str]) -> SlideRecord {
        SlideRecord {
            text: text.iter().map(|s| s.to_string()).collect(),
            images: images.iter().map(|s| s.to_string()).collect(),
            notes: notes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_record_contributes_nothing() {
        let mut builder = DocumentBuilder::new();
        assert!(!builder.push_slide(&SlideRecord::new()));
        assert_eq!(builder.slide_count(), 0);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn test_text_only() {
        let mut builder = DocumentBuilder::new();
        builder.push_slide(&record(&["## Title", "", "Hello"], &[], &[]));
        assert_eq!(builder.finish().lines, vec!["---", "", "## Title", "", "Hello"]);
    }

    #[test]
    fn test_full_fragment() {
        let mut builder = DocumentBuilder::new();
        builder.push_slide(&record(&["Body"], &["![rId2](/img/a.png)", ""], &["one", "two"]));
        assert_eq!(
            builder.finish().lines,
            vec!["---", "", "Body", "", "![rId2](/img/a.png)", "", "Note:", "", "one", "two"]
        );
    }

    #[test]
    fn test_notes_only() {
        let mut builder = DocumentBuilder::new();
        builder.push_slide(&record(&[], &[], &["just notes"]));
        assert_eq!(builder.finish().lines, vec!["---", "", "Note:", "", "just notes"]);
    }

    #[test]
    fn test_each_slide_gets_separator() {
        let mut builder = DocumentBuilder::new();
        builder.push_slide(&record(&["a"], &[], &[]));
        builder.push_slide(&SlideRecord::new());
        builder.push_slide(&record(&["b"], &[], &[]));
        assert_eq!(builder.slide_count(), 2);
        let doc = builder.finish();
        assert_eq!(doc.lines, vec!["---", "", "a", "---", "", "b"]);
        assert!(doc.len() >= 2 * 2);
    }
}
