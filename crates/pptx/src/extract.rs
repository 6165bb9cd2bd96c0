//! Per-slide extraction of text, images, and speaker notes.

use crate::accessors;
use crate::package::Package;
use crate::paths;
use crate::rels::RelationshipManifest;
use crate::xml::XmlNode;
use pptmd_core::{ConvertOptions, Diagnostics, Error, HeadingOrder, Result, SlideRecord};

/// Extracts slide records from one package.
pub struct SlideExtractor<'a> {
    package: &'a Package,
    options: &'a ConvertOptions,
}

impl<'a> SlideExtractor<'a> {
    pub fn new(package: &'a Package, options: &'a ConvertOptions) -> Self {
        Self { package, options }
    }

    /// Build the record for one slide part.
    ///
    /// A missing slide part, or one without a shape tree, yields an empty
    /// record.
    pub fn slide_record(&self, part: &str, diagnostics: &mut Diagnostics) -> Result<SlideRecord> {
        let Some(root) = self.package.parse_part(part)? else {
            log::debug!("{}: slide part is missing, skipping", part);
            return Ok(SlideRecord::new());
        };
        if accessors::shape_tree(&root).is_none() {
            log::debug!("{}: slide has no shape tree, skipping", part);
            return Ok(SlideRecord::new());
        }

        Ok(SlideRecord {
            text: self.text(&root, part, diagnostics),
            images: self.images(&root, part, diagnostics)?,
            notes: self.notes(part, diagnostics)?,
        })
    }

    /// Markdown lines for the text shapes of a slide, headings first.
    pub fn text(&self, root: &XmlNode, part: &str, diagnostics: &mut Diagnostics) -> Vec<String> {
        let Some(tree) = accessors::shape_tree(root) else {
            return Vec::new();
        };

        let mut headings: Vec<String> = Vec::new();
        let mut body: Vec<String> = Vec::new();

        for shape in tree.children("sp") {
            let heading = accessors::heading_kind(shape, part, diagnostics);

            for paragraph in accessors::paragraphs(shape) {
                let text = accessors::paragraph_text(paragraph);
                if text.is_empty() {
                    continue;
                }

                let line = format!(
                    "{}{}{}",
                    heading.markdown_prefix(),
                    accessors::list_prefix(paragraph),
                    text
                );

                if accessors::is_heading_line(&line) {
                    match self.options.heading_order {
                        HeadingOrder::Reverse => {
                            headings.insert(0, String::new());
                            headings.insert(0, line);
                        }
                        HeadingOrder::Encounter => headings.extend([line, String::new()]),
                    }
                } else {
                    body.push(line);
                }
            }
        }

        headings.extend(body);
        headings
    }

    /// Markdown image references for the pictures on a slide.
    ///
    /// The relationship part is only read when the slide has pictures; if it
    /// is missing then, the package is malformed.
    pub fn images(
        &self,
        root: &XmlNode,
        part: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let Some(tree) = accessors::shape_tree(root) else {
            return Ok(Vec::new());
        };
        if !tree.has_child("pic") {
            return Ok(Vec::new());
        }

        let rels_part = paths::rels_part(part);
        let manifest = match self.package.parse_part(&rels_part)? {
            Some(node) => RelationshipManifest::from_node(&rels_part, &node),
            None => {
                return Err(Error::MissingRelationships {
                    slide: part.to_string(),
                    rels: rels_part,
                });
            }
        };

        let mut lines = Vec::new();
        for picture in tree.children("pic") {
            let embed = accessors::picture_embed(picture, part, diagnostics).ok_or_else(|| {
                Error::MissingImageReference {
                    slide: part.to_string(),
                }
            })?;
            let path = manifest.resolve(embed, self.options)?;
            lines.push(format!("![{}]({})", embed, path));
            lines.push(String::new());
        }

        Ok(lines)
    }

    /// Plain speaker note lines, one per text run. Missing notes are not an error.
    pub fn notes(&self, part: &str, diagnostics: &mut Diagnostics) -> Result<Vec<String>> {
        let notes_part = paths::notes_part(part);
        let Some(root) = self.package.parse_part(&notes_part)? else {
            return Ok(Vec::new());
        };
        let Some(tree) = accessors::shape_tree(&root) else {
            return Ok(Vec::new());
        };

        let mut lines = Vec::new();
        for shape in tree.children("sp").filter(|sp| accessors::has_runs(sp)) {
            for paragraph in accessors::paragraphs(shape) {
                for run in paragraph.children("r") {
                    if let Some(text) = accessors::note_run_text(run, &notes_part, diagnostics) {
                        lines.push(text.to_string());
                    }
                }
            }
        }

        Ok(lines)
    }
}
