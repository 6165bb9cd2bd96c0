//! Whole-package conversion: slide discovery, ordering, and assembly.

use crate::extract::SlideExtractor;
use crate::package::Package;
use crate::paths;
use pptmd_core::{ConvertOptions, Diagnostics, Document, DocumentBuilder, Result, SlideRecord};
use serde::Serialize;
use std::io::{Read, Seek};
use std::path::Path;

/// Record for one slide part, kept alongside the assembled document.
#[derive(Debug, Clone, Serialize)]
pub struct SlideEntry {
    /// Slide part path inside the package.
    pub part: String,

    /// Number taken from the part name, if any.
    pub number: Option<u64>,

    pub record: SlideRecord,
}

/// Result of converting a package.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub document: Document,

    /// Every slide part, in document order, including empty ones.
    pub slides: Vec<SlideEntry>,

    pub diagnostics: Diagnostics,
}

/// Converts PPTX packages to Markdown.
#[derive(Debug, Clone, Default)]
pub struct PptxConverter {
    options: ConvertOptions,
}

impl PptxConverter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Extract and convert a `.pptx` file.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let package = Package::open(path)?;
        self.convert(&package)
    }

    /// Extract and convert a package from a reader.
    pub fn convert_reader<R: Read + Seek>(&self, reader: R) -> Result<Conversion> {
        let package = Package::extract(reader)?;
        self.convert(&package)
    }

    /// Convert an unpacked package.
    ///
    /// Slides are processed one at a time in numeric order. The first
    /// integrity error aborts the run.
    pub fn convert(&self, package: &Package) -> Result<Conversion> {
        let extractor = SlideExtractor::new(package, &self.options);
        let mut diagnostics = Diagnostics::new();
        let mut builder = DocumentBuilder::new();
        let mut slides = Vec::new();

        for part in paths::slide_parts(package.files()) {
            log::debug!("Processing {}", part);
            let record = extractor.slide_record(&part, &mut diagnostics)?;

            if !builder.push_slide(&record) {
                log::debug!("{}: no content", part);
            }

            slides.push(SlideEntry {
                number: paths::slide_number(&part),
                part,
                record,
            });
        }

        log::debug!(
            "Converted {} of {} slides",
            builder.slide_count(),
            slides.len()
        );

        Ok(Conversion {
            document: builder.finish(),
            slides,
            diagnostics,
        })
    }
}

/// Assemble the Markdown lines for an unpacked package.
pub fn assemble(package: &Package, options: &ConvertOptions) -> Result<Document> {
    PptxConverter::with_options(options.clone())
        .convert(package)
        .map(|conversion| conversion.document)
}
