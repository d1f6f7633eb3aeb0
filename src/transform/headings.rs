//! Heading normalizer: rewrites every surviving heading to one canonical
//! form so the pagination stylesheet can key page breaks and running
//! headers off a single tag.

use crate::classify::{Role, is_note, role_of};
use crate::dom::{FicDom, NodeId};
use crate::schema::Schema;

/// Canonical tag for section headings; `h2` drives the forced page break
/// and the running-header string set in the print stylesheet.
const SECTION_HEADING_TAG: &str = "h2";

/// Tag for headings nested inside a kept note block: inline emphasis
/// instead of a page-breaking section heading.
const NOTE_HEADING_TAG: &str = "em";

/// Normalize every node currently classified as a heading.
///
/// Any embedded anchor is detached and its text merged into the heading's
/// plain text. Idempotent: a second pass finds no anchor and already
/// trimmed text, leaving the tree unchanged.
pub fn normalize_headings(dom: &mut FicDom, root: NodeId, schema: &Schema) {
    let headings =
        dom.find_all_in(root, |d, id| role_of(d, id, schema) == Role::Heading);

    for heading in headings {
        let anchor_text = match dom.find_in(heading, |d, id| d.is_tag(id, "a")) {
            Some(anchor) => {
                let text = dom.collect_text(anchor);
                dom.detach(anchor);
                text
            }
            None => String::new(),
        };

        let remaining = dom.collect_text(heading);
        let mut merged = anchor_text;
        merged.push_str(remaining.trim());
        dom.set_text(heading, merged.trim().to_string());

        let ancestors: Vec<_> = dom.ancestors(heading).collect();
        let inside_note = ancestors.iter().any(|&a| is_note(dom, a, schema));
        let tag = if inside_note {
            NOTE_HEADING_TAG
        } else {
            SECTION_HEADING_TAG
        };
        dom.rename(heading, tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse_fic, serialize_node};

    fn run(html: &str) -> String {
        let mut dom = parse_fic(html);
        let root = dom.get_by_id("chapters").expect("chapters container");
        normalize_headings(&mut dom, root, &Schema::default());
        serialize_node(&dom, root)
    }

    #[test]
    fn test_anchor_text_merged() {
        let html = run(
            r##"<div id="chapters"><h2 class="heading"><a href="#s1">1</a>Chapter One</h2></div>"##,
        );
        assert!(html.contains(">1Chapter One<"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_heading_div_renamed_to_canonical_tag() {
        let html = run(r#"<div id="chapters"><div class="heading">  Chapter Two </div></div>"#);
        assert!(html.contains(r#"<h2 class="heading">Chapter Two</h2>"#));
    }

    #[test]
    fn test_heading_inside_kept_note_becomes_emphasis() {
        let html = run(
            r#"<div id="chapters">
                 <div class="notes"><h2 class="heading">Notes</h2><p>hi</p></div>
               </div>"#,
        );
        assert!(html.contains(r#"<em class="heading">Notes</em>"#));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_idempotent() {
        let src = r#"<div id="chapters">
                       <h2 class="heading"><a>1</a> Chapter One </h2>
                       <div class="notes"><h2 class="heading">Notes</h2></div>
                     </div>"#;

        let mut dom = parse_fic(src);
        let root = dom.get_by_id("chapters").unwrap();
        let schema = Schema::default();

        normalize_headings(&mut dom, root, &schema);
        let once = serialize_node(&dom, root);

        normalize_headings(&mut dom, root, &schema);
        let twice = serialize_node(&dom, root);

        assert_eq!(once, twice);
    }
}
