//! Builders for small on-disk packages used by tests.

use crate::package::Package;
use std::fs;
use tempfile::TempDir;

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

/// A package written to a temporary directory.
pub struct TestPackage {
    dir: TempDir,
    files: Vec<String>,
}

impl TestPackage {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            files: Vec::new(),
        }
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        let target = self.dir.path().join(path);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(target, content).unwrap();
        self.files.push(path.to_string());
        self
    }

    /// Record a path in the listing without writing it.
    pub fn listed_only(mut self, path: &str) -> Self {
        self.files.push(path.to_string());
        self
    }

    pub fn package(&self) -> Package {
        Package::from_dir(self.dir.path(), self.files.clone())
    }
}

/// A slide part whose shape tree holds the given shapes.
pub fn slide(shapes: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>{}</p:spTree></p:cSld></p:sld>"#,
        NS,
        shapes.concat()
    )
}

/// A notes part whose shape tree holds the given shapes.
pub fn notes(shapes: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes {}><p:cSld><p:spTree>{}</p:spTree></p:cSld></p:notes>"#,
        NS,
        shapes.concat()
    )
}

/// A shape with an optional placeholder type and the given paragraphs.
pub fn shape(placeholder: Option<&str>, paragraphs: &[String]) -> String {
    let nv_pr = match placeholder {
        Some(kind) => format!(r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#, kind),
        None => "<p:nvPr/>".to_string(),
    };
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Shape"/><p:cNvSpPr/>{}</p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/>{}</p:txBody></p:sp>"#,
        nv_pr,
        paragraphs.concat()
    )
}

/// A plain paragraph with one run per text.
pub fn paragraph(runs: &[&str]) -> String {
    let runs: String = runs
        .iter()
        .map(|text| format!("<a:r><a:rPr lang=\"en-US\"/><a:t>{}</a:t></a:r>", text))
        .collect();
    format!("<a:p>{}</a:p>", runs)
}

/// A bulleted paragraph.
pub fn bullet(level: usize, marker: &str, text: &str) -> String {
    format!(
        r#"<a:p><a:pPr lvl="{}"><a:buChar char="{}"/></a:pPr><a:r><a:t>{}</a:t></a:r></a:p>"#,
        level, marker, text
    )
}

/// A picture shape embedding the given relationship id.
pub fn picture(embed: &str) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="4" name="Picture"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr/></p:pic>"#,
        embed
    )
}

/// A relationship part mapping ids to targets.
pub fn rels(entries: &[(&str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, target)| {
            format!(
                r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="{}"/>"#,
                id, target
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
        body
    )
}
