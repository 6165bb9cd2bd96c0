//! Collector for recoverable anomalies found while extracting slides.
//!
//! Extraction never stops for these; it records what it saw, logs it, and
//! carries on with the first element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A shape has no placeholder property (free text box).
    MissingPlaceholder,
    /// A placeholder type that does not map to a heading.
    UnmappedPlaceholder(String),
    /// A picture with more than one image fill.
    MultipleImageFills(usize),
    /// A note run with more than one text fragment.
    MultipleNoteFragments(usize),
}

impl DiagnosticKind {
    /// Whether this kind is expected in ordinary presentations.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::MissingPlaceholder | Self::UnmappedPlaceholder(_))
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPlaceholder => write!(f, "shape has no placeholder type"),
            Self::UnmappedPlaceholder(kind) => write!(f, "placeholder type '{}' is not a heading", kind),
            Self::MultipleImageFills(n) => write!(f, "picture has {} image fills, using the first", n),
            Self::MultipleNoteFragments(n) => {
                write!(f, "note run has {} text fragments, using the first", n)
            }
        }
    }
}

/// A single reported anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Package part the anomaly was found in.
    pub part: String,
    pub kind: DiagnosticKind,
}

/// Ordered list of anomalies for one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an anomaly and log it.
    pub fn report(&mut self, part: &str, kind: DiagnosticKind) {
        if kind.is_informational() {
            log::debug!("{}: {}", part, kind);
        } else {
            log::warn!("{}: {}", part, kind);
        }
        self.entries.push(Diagnostic {
            part: part.to_string(),
            kind,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Entries that are worth surfacing to a user.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| !d.kind.is_informational())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
