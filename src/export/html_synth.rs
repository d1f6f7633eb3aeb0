//! Synthesizes a complete HTML document around the transformed chapter
//! subtree, so the renderer receives something independently parseable
//! rather than a bare fragment.

use crate::dom::{FicDom, NodeId, serialize_node};

/// Wrap a transformed subtree in a minimal full-document skeleton.
pub fn synthesize_document(dom: &FicDom, root: NodeId, title: &str) -> String {
    let body = serialize_node(dom, root);

    let mut doc = String::with_capacity(body.len() + 256);
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<title>");
    doc.push_str(&escape_xml(title));
    doc.push_str("</title>\n</head>\n<body>\n");
    doc.push_str(&body);
    doc.push_str("\n</body>\n</html>\n");
    doc
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
