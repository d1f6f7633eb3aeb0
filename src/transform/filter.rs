//! Structure filter: removes site furniture from the chapter subtree.
//!
//! Removal is permanent; callers that need notes preserved must disable
//! note removal up front, there is no recovery path afterward.

use crate::classify::{is_chapter_text_marker, is_heading, is_note, is_summary};
use crate::dom::{FicDom, NodeId};
use crate::schema::Schema;

/// Remove every summary block, hoisting a nested heading out first.
pub fn remove_summaries(dom: &mut FicDom, root: NodeId) {
    let summaries = dom.find_all_in(root, |d, id| is_summary(d, id));
    for block in summaries {
        hoist_heading_and_detach(dom, root, block);
    }
}

/// Remove every author-note block, hoisting a nested heading out first.
///
/// Gated by pipeline configuration; notes are kept by default.
pub fn remove_author_notes(dom: &mut FicDom, root: NodeId, schema: &Schema) {
    let notes = dom.find_all_in(root, |d, id| is_note(d, id, schema));
    for block in notes {
        hoist_heading_and_detach(dom, root, block);
    }
}

/// Delete every redundant "Chapter Text" label.
pub fn remove_chapter_text_markers(dom: &mut FicDom, root: NodeId) {
    let markers = dom.find_all_in(root, |d, id| is_chapter_text_marker(d, id));
    for marker in markers {
        dom.detach(marker);
    }
}

/// Relocate-then-remove policy shared by summary and note removal: a
/// heading nested in the block survives, reinserted immediately before
/// the block's former position, still in raw form for the normalizer.
fn hoist_heading_and_detach(dom: &mut FicDom, root: NodeId, block: NodeId) {
    // A block nested inside an already-removed block is gone with it.
    if !in_subtree(dom, block, root) {
        return;
    }

    if let Some(heading) = dom.find_in(block, |d, id| is_heading(d, id)) {
        dom.detach(heading);
        dom.insert_before(block, heading);
    }
    dom.detach(block);
}

fn in_subtree(dom: &FicDom, id: NodeId, root: NodeId) -> bool {
    dom.ancestors(id).any(|a| a == root)
}
