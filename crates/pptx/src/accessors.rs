//! Domain lookups over slide XML.
//!
//! Every assumption about where DrawingML keeps things (placeholder type,
//! runs, bullets, image fills) lives here. Extractors only ask questions.

use crate::xml::XmlNode;
use pptmd_core::{DiagnosticKind, Diagnostics};

/// Placeholder type assumed by OOXML when `type` is omitted.
const DEFAULT_PLACEHOLDER_TYPE: &str = "obj";

/// Heading role of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    None,
    Title,
    Subtitle,
}

impl HeadingKind {
    /// Markdown prefix for paragraphs of a shape with this role.
    pub fn markdown_prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Title => "## ",
            Self::Subtitle => "### ",
        }
    }
}

/// True when a composed line carries a heading prefix.
pub fn is_heading_line(line: &str) -> bool {
    line.starts_with("### ") || line.starts_with("## ")
}

/// The slide's shape tree, if it has one.
pub fn shape_tree(root: &XmlNode) -> Option<&XmlNode> {
    root.descend(&["cSld", "spTree"])
}

/// Classify a shape by its placeholder type.
///
/// Free text boxes have no placeholder and are `None`; so is any
/// placeholder type other than title, centered title, or subtitle.
/// A missing placeholder is only reported for shapes that hold text.
pub fn heading_kind(shape: &XmlNode, part: &str, diagnostics: &mut Diagnostics) -> HeadingKind {
    let Some(placeholder) = shape.descend(&["nvSpPr", "nvPr", "ph"]) else {
        if shape.has_child("txBody") {
            diagnostics.report(part, DiagnosticKind::MissingPlaceholder);
        }
        return HeadingKind::None;
    };

    match placeholder.attr("type").unwrap_or(DEFAULT_PLACEHOLDER_TYPE) {
        "title" | "ctrTitle" => HeadingKind::Title,
        "subTitle" => HeadingKind::Subtitle,
        other => {
            diagnostics.report(part, DiagnosticKind::UnmappedPlaceholder(other.to_string()));
            HeadingKind::None
        }
    }
}

/// Paragraphs of a shape's text body; empty when there is no text body.
pub fn paragraphs(shape: &XmlNode) -> impl Iterator<Item = &XmlNode> {
    shape
        .child("txBody")
        .into_iter()
        .flat_map(|body| body.children("p"))
}

/// True when the shape's text body holds at least one run.
pub fn has_runs(shape: &XmlNode) -> bool {
    paragraphs(shape).any(|p| p.has_child("r"))
}

/// Literal text of a paragraph: every run, in order.
pub fn paragraph_text(paragraph: &XmlNode) -> String {
    paragraph
        .children("r")
        .flat_map(|run| run.children("t"))
        .map(XmlNode::text)
        .collect()
}

/// Bullet prefix for list paragraphs, e.g. `"    - "` at level 2.
///
/// Paragraphs without a bullet character are not list items and get `""`.
pub fn list_prefix(paragraph: &XmlNode) -> String {
    let Some(properties) = paragraph.child("pPr") else {
        return String::new();
    };
    let Some(bullet) = properties.child("buChar") else {
        return String::new();
    };

    let level = properties
        .attr("lvl")
        .and_then(|lvl| lvl.trim().parse::<usize>().ok())
        .unwrap_or(0);

    format!("{}{} ", "  ".repeat(level), bullet.attr("char").unwrap_or_default())
}

/// Text of a speaker note run, using the first fragment if there are several.
pub fn note_run_text<'a>(
    run: &'a XmlNode,
    part: &str,
    diagnostics: &mut Diagnostics,
) -> Option<&'a str> {
    let fragments = run.count("t");
    if fragments > 1 {
        diagnostics.report(part, DiagnosticKind::MultipleNoteFragments(fragments));
    }
    run.child("t").map(XmlNode::text)
}

/// Relationship id of a picture's embedded image, using the first fill.
pub fn picture_embed<'a>(
    picture: &'a XmlNode,
    part: &str,
    diagnostics: &mut Diagnostics,
) -> Option<&'a str> {
    let fills = picture.count("blipFill");
    if fills > 1 {
        diagnostics.report(part, DiagnosticKind::MultipleImageFills(fills));
    }
    picture.descend(&["blipFill", "blip"])?.attr("embed")
}
