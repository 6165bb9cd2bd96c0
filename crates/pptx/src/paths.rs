//! Part naming conventions inside a presentation package.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Prefix shared by every slide part.
pub const SLIDE_PART_PREFIX: &str = "ppt/slides/slide";

/// First run of digits in a part path.
static SLIDE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Notes part paired with a slide, e.g. `ppt/notesSlides/notesSlide3.xml`.
pub fn notes_part(slide_part: &str) -> String {
    slide_part.replacen("/slides/slide", "/notesSlides/notesSlide", 1)
}

/// Relationship part paired with a slide, e.g. `ppt/slides/_rels/slide3.xml.rels`.
pub fn rels_part(slide_part: &str) -> String {
    format!("{}.rels", slide_part.replacen("/slides/", "/slides/_rels/", 1))
}

/// Slide number taken from the first run of digits in the path.
pub fn slide_number(path: &str) -> Option<u64> {
    SLIDE_NUMBER_REGEX
        .find(path)
        .and_then(|m| m.as_str().parse().ok())
}

/// Slide parts from a package listing, in numeric slide order.
///
/// Paths without a number sort last, by name.
pub fn slide_parts<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let mut slides: Vec<(String, Option<u64>)> = files
        .iter()
        .map(|path| path.as_ref())
        .filter(|path| path.starts_with(SLIDE_PART_PREFIX))
        .map(|path| (path.to_string(), slide_number(path)))
        .collect();

    slides.sort_by(|a, b| match (a.1, b.1) {
        (Some(na), Some(nb)) => na.cmp(&nb).then_with(|| a.0.cmp(&b.0)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.0.cmp(&b.0),
    });

    slides.into_iter().map(|(path, _)| path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_parts() {
        assert_eq!(notes_part("ppt/slides/slide3.xml"), "ppt/notesSlides/notesSlide3.xml");
        assert_eq!(rels_part("ppt/slides/slide3.xml"), "ppt/slides/_rels/slide3.xml.rels");
    }

    #[test]
    fn test_slide_number() {
        assert_eq!(slide_number("ppt/slides/slide1.xml"), Some(1));
        assert_eq!(slide_number("ppt/slides/slide123.xml"), Some(123));
        assert_eq!(slide_number("ppt/slides/slide.xml"), None);
    }

    #[test]
    fn test_slide_parts_numeric_order() {
        let files = vec![
            "[Content_Types].xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "ppt/slides/slide10.xml",
            "ppt/notesSlides/notesSlide1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
        ];
        assert_eq!(
            slide_parts(&files),
            vec!["ppt/slides/slide1.xml", "ppt/slides/slide2.xml", "ppt/slides/slide10.xml"]
        );
    }

    #[test]
    fn test_slide_parts_unnumbered_last() {
        let files = vec!["ppt/slides/slideX.xml".to_string(), "ppt/slides/slide4.xml".to_string()];
        assert_eq!(slide_parts(&files), vec!["ppt/slides/slide4.xml", "ppt/slides/slideX.xml"]);
    }
}
