//! Classifies nodes of a fic export by their structural role.
//!
//! Classification is recomputed on every call, never cached: earlier
//! pipeline stages rewrite tag names and text, and later stages must see
//! the current state. Nodes with no class tokens classify as nothing.

use crate::dom::{FicDom, NodeId};
use crate::schema::Schema;

/// Exact text of the redundant section label injected before chapter text.
pub const CHAPTER_TEXT_LABEL: &str = "Chapter Text";

/// Structural role of a node, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Author commentary block (begin/end notes, meta block).
    Note,
    /// Author-written synopsis block.
    Summary,
    /// Section heading (work title, chapter title, note title).
    Heading,
    /// Redundant "Chapter Text" label preceding narrative text.
    ChapterTextMarker,
    /// Anything else.
    Other,
}

/// Check whether a node is an author-note block under the given schema.
pub fn is_note(dom: &FicDom, id: NodeId, schema: &Schema) -> bool {
    let classes = dom.element_classes(id);
    if !classes.iter().any(|c| schema.note_classes.contains(c)) {
        return false;
    }
    !schema.note_requires_id || dom.has_attr(id, "id")
}

/// Check whether a node is a summary block.
pub fn is_summary(dom: &FicDom, id: NodeId) -> bool {
    dom.element_classes(id).iter().any(|c| c == "summary")
}

/// Check whether a node is a heading.
pub fn is_heading(dom: &FicDom, id: NodeId) -> bool {
    dom.element_classes(id)
        .iter()
        .any(|c| c == "heading" || c == "title")
}

/// Check whether a node is the redundant "Chapter Text" section label.
pub fn is_chapter_text_marker(dom: &FicDom, id: NodeId) -> bool {
    dom.is_tag(id, "h3") && dom.collect_text(id).trim() == CHAPTER_TEXT_LABEL
}

/// Compute a node's role under the given schema.
///
/// The marker is checked before the heading rule: exports tag the marker
/// node with the heading class as well, and it must be removed rather
/// than normalized.
pub fn role_of(dom: &FicDom, id: NodeId, schema: &Schema) -> Role {
    if is_chapter_text_marker(dom, id) {
        Role::ChapterTextMarker
    } else if is_summary(dom, id) {
        Role::Summary
    } else if is_note(dom, id, schema) {
        Role::Note
    } else if is_heading(dom, id) {
        Role::Heading
    } else {
        Role::Other
    }
}
