//! Extracts bibliographic metadata from a parsed fic export.
//!
//! Runs read-only against the full document before any mutation begins;
//! the donor nodes sit outside the chapter container, so later tree
//! surgery never invalidates what was read here.

use crate::dom::{FicDom, NodeId};
use crate::error::{Error, Result};

/// Title and author of a work. Both fields are non-empty: extraction
/// fails rather than producing a partial record, since the output
/// filename and progress reporting depend on them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct WorkMetadata {
    pub title: String,
    pub author: String,
}

/// Ordered title-extraction strategies, tried in sequence. Each covers
/// one export layout and is independently testable.
const TITLE_STRATEGIES: &[fn(&FicDom) -> Option<String>] =
    &[title_from_meta_block, title_from_preface_group];

/// Extract metadata from a parsed document.
///
/// Fails with [`Error::MetadataMissing`] when every title strategy comes
/// up empty or no author anchor exists.
pub fn extract_metadata(dom: &FicDom) -> Result<WorkMetadata> {
    let title = TITLE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(dom))
        .ok_or(Error::MetadataMissing { field: "title" })?;

    let author = author_from_rel_anchor(dom)
        .ok_or(Error::MetadataMissing { field: "author" })?;

    Ok(WorkMetadata { title, author })
}

/// Layout 1: the `meta` block holds the work title as its first `<h1>`.
fn title_from_meta_block(dom: &FicDom) -> Option<String> {
    let meta = dom.find_in(dom.document(), |d, id| {
        d.element_classes(id).iter().any(|c| c == "meta")
    })?;
    let h1 = dom.find_in(meta, |d, id| d.is_tag(id, "h1"))?;
    nonempty_text(dom, h1)
}

/// Layout 2: a node classed exactly `preface group` holds the title as
/// its first `<h2>`.
fn title_from_preface_group(dom: &FicDom) -> Option<String> {
    let preface = dom.find_in(dom.document(), |d, id| {
        let classes = d.element_classes(id);
        classes.len() == 2
            && classes.iter().any(|c| c == "preface")
            && classes.iter().any(|c| c == "group")
    })?;
    let h2 = dom.find_in(preface, |d, id| d.is_tag(id, "h2"))?;
    nonempty_text(dom, h2)
}

/// The author is the first anchor carrying `rel="author"`.
fn author_from_rel_anchor(dom: &FicDom) -> Option<String> {
    let anchor = dom.find_in(dom.document(), |d, id| {
        d.is_tag(id, "a") && d.get_attr(id, "rel") == Some("author")
    })?;
    nonempty_text(dom, anchor)
}

fn nonempty_text(dom: &FicDom, id: NodeId) -> Option<String> {
    let text = dom.collect_text(id).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_fic;

    #[test]
    fn test_title_from_meta_block() {
        let dom = parse_fic(r#"<div class="meta"><h1>My Fic</h1></div>"#);
        assert_eq!(title_from_meta_block(&dom).as_deref(), Some("My Fic"));
    }

    #[test]
    fn test_title_from_preface_group() {
        let dom = parse_fic(r#"<div class="preface group"><h2>Alternate Layout</h2></div>"#);
        assert_eq!(
            title_from_preface_group(&dom).as_deref(),
            Some("Alternate Layout")
        );
    }

    #[test]
    fn test_preface_group_must_match_exactly() {
        // A third class token disqualifies the node for this layout.
        let dom = parse_fic(r#"<div class="preface group extra"><h2>Nope</h2></div>"#);
        assert_eq!(title_from_preface_group(&dom), None);
    }

    #[test]
    fn test_meta_block_preferred_over_preface() {
        let dom = parse_fic(
            r#"<div class="meta"><h1>Primary</h1></div>
               <div class="preface group"><h2>Fallback</h2></div>
               <a rel="author">Jane Doe</a>"#,
        );
        let meta = extract_metadata(&dom).expect("metadata present");
        assert_eq!(meta.title, "Primary");
        assert_eq!(meta.author, "Jane Doe");
    }

    #[test]
    fn test_author_trimmed() {
        let dom = parse_fic(r#"<a rel="author">  Jane Doe  </a>"#);
        assert_eq!(author_from_rel_anchor(&dom).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_missing_title_is_fatal() {
        let dom = parse_fic(r#"<a rel="author">Jane Doe</a><p>no title anywhere</p>"#);
        let err = extract_metadata(&dom).unwrap_err();
        assert!(matches!(err, Error::MetadataMissing { field: "title" }));
    }

    #[test]
    fn test_missing_author_is_fatal() {
        let dom = parse_fic(r#"<div class="meta"><h1>My Fic</h1></div><a>not the author</a>"#);
        let err = extract_metadata(&dom).unwrap_err();
        assert!(matches!(err, Error::MetadataMissing { field: "author" }));
    }
}
