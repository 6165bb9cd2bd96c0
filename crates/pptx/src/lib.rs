//! PPTX (Office Open XML) backend for PowerPoint to Markdown conversion.
//!
//! A `.pptx` file is a ZIP archive of XML parts. Slides are read from
//! `ppt/slides/`, with speaker notes from `ppt/notesSlides/` and image
//! targets from each slide's relationship part.

pub mod accessors;
pub mod converter;
pub mod extract;
pub mod package;
pub mod paths;
pub mod rels;
pub mod xml;

#[cfg(test)]
mod fixtures;

pub use converter::{assemble, Conversion, PptxConverter, SlideEntry};
pub use extract::SlideExtractor;
pub use package::Package;
pub use rels::RelationshipManifest;
pub use xml::XmlNode;
