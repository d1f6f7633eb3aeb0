//! The transformation pipeline: classify, prune, and re-shape a parsed
//! fic export until it is ready for the pagination stylesheet.
//!
//! Single-threaded and synchronous by design: every stage fully mutates
//! the tree before the next begins, and the pipeline owns the tree
//! exclusively for the duration of the run. No stage performs I/O.

use crate::dom::parse_fic;
use crate::error::{Error, Result};
use crate::export::{PAGE_STYLESHEET, synthesize_document};
use crate::metadata::{WorkMetadata, extract_metadata};
use crate::schema::Schema;
use crate::transform;

/// The stable identifier of the container wrapping all chapter sections.
const CHAPTERS_ID: &str = "chapters";

/// Pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Remove author-note blocks. Off by default: removal permanently
    /// discards content.
    pub remove_notes: bool,
    /// Which export variant's classification rules to apply.
    pub schema: Schema,
}

/// A transformed work, ready for the rendering collaborator.
#[derive(Debug, Clone)]
pub struct PressedWork {
    pub metadata: WorkMetadata,
    /// Complete HTML document around the transformed chapter subtree.
    pub document: String,
    /// The fixed print stylesheet, applied unmodified.
    pub stylesheet: &'static str,
}

impl PressedWork {
    /// Default output filename, derived from the work title.
    pub fn default_filename(&self) -> String {
        format!("{}.pdf", self.metadata.title)
    }
}

/// Run the whole pipeline over a serialized fic export.
///
/// Metadata is extracted before any mutation; a failure there or a
/// missing chapters container aborts the run with nothing written.
pub fn press(html: &str, options: &Options) -> Result<PressedWork> {
    let mut dom = parse_fic(html);

    let metadata = extract_metadata(&dom)?;

    let chapters = dom.get_by_id(CHAPTERS_ID).ok_or(Error::SchemaMismatch {
        expected: "chapters container (id=\"chapters\")",
    })?;

    transform::remove_summaries(&mut dom, chapters);
    if options.remove_notes {
        transform::remove_author_notes(&mut dom, chapters, &options.schema);
    }
    transform::remove_chapter_text_markers(&mut dom, chapters);
    transform::normalize_headings(&mut dom, chapters, &options.schema);
    transform::remove_empty_paragraphs(&mut dom, chapters);

    let document = synthesize_document(&dom, chapters, &metadata.title);

    Ok(PressedWork {
        metadata,
        document,
        stylesheet: PAGE_STYLESHEET,
    })
}
