//! Conversion options.

use serde::{Deserialize, Serialize};

/// Default rewrite target for image paths.
pub const DEFAULT_ASSET_PATH_PREFIX: &str = "/<provider>/<category>/<offering>/assets/images";

/// Relative media directory used by image relationship targets.
pub const MEDIA_DIR_PREFIX: &str = "../media";

/// How promoted headings are ordered when a slide has more than one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingOrder {
    /// Each heading is inserted at the front, so the last one found comes first.
    #[default]
    Reverse,
    /// Headings stay in the order they were found.
    Encounter,
}

/// Options controlling a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Replaces the leading `../media` of resolved image targets.
    pub asset_path_prefix: String,

    /// Ordering of promoted headings within a slide.
    pub heading_order: HeadingOrder,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            asset_path_prefix: DEFAULT_ASSET_PATH_PREFIX.to_string(),
            heading_order: HeadingOrder::default(),
        }
    }
}

impl ConvertOptions {
    /// Create options with the default asset prefix and heading order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom asset path prefix.
    pub fn with_asset_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_path_prefix = prefix.into();
        self
    }

    /// Use a custom heading order.
    pub fn with_heading_order(mut self, order: HeadingOrder) -> Self {
        self.heading_order = order;
        self
    }

    /// Rewrite a relationship target into the published asset location.
    ///
    /// Only a leading `../media` segment is rewritten; other targets pass
    /// through unchanged.
    pub fn rewrite_asset_path(&self, target: &str) -> String {
        match target.strip_prefix(MEDIA_DIR_PREFIX) {
            Some(rest) => format!("{}{}", self.asset_path_prefix.trim_end_matches('/'), rest),
            None => target.to_string(),
        }
    }
}
