//! Serialize a FicDom subtree back to HTML text.
//!
//! The output only needs to round-trip through the print renderer's own
//! HTML parser, so this is a plain tree walk with escaping rather than a
//! full html5ever serializer over the arena.

use std::fmt::Write;

use super::arena::{FicDom, NodeData, NodeId};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize a node and its subtree to HTML, including the node itself.
pub fn serialize_node(dom: &FicDom, id: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, id, &mut out);
    out
}

fn write_node(dom: &FicDom, id: NodeId, out: &mut String) {
    let Some(node) = dom.get(id) else {
        return;
    };

    match &node.data {
        NodeData::Document => {
            for child in dom.children(id) {
                write_node(dom, child, out);
            }
        }
        NodeData::Doctype { name } => {
            write!(out, "<!DOCTYPE {name}>").unwrap();
        }
        NodeData::Text(text) => out.push_str(&escape_text(text)),
        NodeData::Comment(_) => {}
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.as_ref();
            out.push('<');
            out.push_str(tag);
            for attr in attrs {
                write!(
                    out,
                    " {}=\"{}\"",
                    attr.name.local.as_ref(),
                    escape_attr(&attr.value)
                )
                .unwrap();
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            for child in dom.children(id) {
                write_node(dom, child, out);
            }
            write!(out, "</{tag}>").unwrap();
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
