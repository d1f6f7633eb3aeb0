//! Whitespace compactor: drops paragraphs that would paginate as blank
//! segments.

use crate::dom::{FicDom, NodeId};

/// Remove every paragraph whose trimmed text is empty and that has no
/// element children. A paragraph holding only an element (an image
/// placeholder, say) is structural and survives.
pub fn remove_empty_paragraphs(dom: &mut FicDom, root: NodeId) {
    let paragraphs = dom.find_all_in(root, |d, id| d.is_tag(id, "p"));

    for p in paragraphs {
        let has_element_child = dom.children(p).any(|c| dom.is_element(c));
        if !has_element_child && dom.collect_text(p).trim().is_empty() {
            dom.detach(p);
        }
    }
}
