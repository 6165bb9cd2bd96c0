//! Domain types for representing extracted slide content.

use serde::{Deserialize, Serialize};

/// Everything extracted from a single slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Markdown lines for the slide text, headings first.
    pub text: Vec<String>,

    /// Markdown image references, each followed by a blank line.
    pub images: Vec<String>,

    /// Plain speaker note lines.
    pub notes: Vec<String>,
}

impl SlideRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the slide produced no text, images, or notes.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.images.is_empty() && self.notes.is_empty()
    }
}

/// The converted Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Output lines in slide order.
    pub lines: Vec<String>,
}

impl Document {
    /// Create a document from lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no slide contributed any content.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines into Markdown text, adding a trailing newline.
    pub fn to_markdown(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_empty() {
        let mut record = SlideRecord::new();
        assert!(record.is_empty());
        record.notes.push("remember".into());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_to_markdown() {
        assert_eq!(Document::default().to_markdown(), "");

        let doc = Document::new(vec!["---".into(), "".into(), "## Title".into()]);
        assert_eq!(doc.to_markdown(), "---\n\n## Title\n");
        assert_eq!(doc.len(), 3);
    }
}
