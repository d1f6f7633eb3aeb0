//! Schema-variant configuration for fic exports.
//!
//! The publishing site has shipped several export layouts over the years,
//! and the rule for what counts as an author-note block differs between
//! them. The membership rule is data, not logic: each variant is a
//! `Schema` value handed to the classifier.

/// Classification rules for one export variant.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Class tokens that mark a node as an author-note block.
    pub note_classes: Vec<String>,
    /// Whether a note block must also carry an `id` attribute to qualify.
    pub note_requires_id: bool,
}

impl Schema {
    /// The layout used by full-work downloads: note blocks carry both a
    /// marker class and an `id` attribute.
    pub fn strict_download() -> Self {
        Self {
            note_requires_id: true,
            ..Self::default()
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            note_classes: ["notes", "meta", "end"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            note_requires_id: false,
        }
    }
}
