//! Core domain types, diagnostics, and Markdown assembly
//! for PowerPoint to Markdown conversion.

pub mod diagnostics;
pub mod error;
pub mod markdown;
pub mod options;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{Error, Result};
pub use markdown::DocumentBuilder;
pub use options::{ConvertOptions, HeadingOrder};
pub use types::{Document, SlideRecord};
