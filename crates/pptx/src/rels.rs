//! Relationship manifests (`_rels/*.rels`) and image target resolution.

use crate::xml::XmlNode;
use pptmd_core::{ConvertOptions, Error, Result};
use std::collections::HashMap;

/// Relationship id to target mapping for one package part.
#[derive(Debug, Clone, Default)]
pub struct RelationshipManifest {
    part: String,
    targets: HashMap<String, String>,
}

impl RelationshipManifest {
    /// Build from an already parsed `Relationships` element.
    ///
    /// Entries without an `Id` or `Target` are ignored; a repeated id keeps
    /// its first target.
    pub fn from_node(part: &str, root: &XmlNode) -> Self {
        let mut targets = HashMap::new();

        for rel in root.children("Relationship") {
            match (rel.attr("Id"), rel.attr("Target")) {
                (Some(id), Some(target)) => {
                    targets
                        .entry(id.to_string())
                        .or_insert_with(|| target.to_string());
                }
                _ => log::debug!("{}: skipping incomplete relationship", part),
            }
        }

        Self {
            part: part.to_string(),
            targets,
        }
    }

    /// Raw target for an id.
    pub fn target(&self, id: &str) -> Option<&str> {
        self.targets.get(id).map(String::as_str)
    }

    /// Resolve an id to its published asset path.
    ///
    /// An id missing from the manifest means the package is malformed.
    pub fn resolve(&self, id: &str, options: &ConvertOptions) -> Result<String> {
        let target = self.target(id).ok_or_else(|| Error::UnknownRelationship {
            rels: self.part.clone(),
            id: id.to_string(),
        })?;
        Ok(options.rewrite_asset_path(target))
    }
}
