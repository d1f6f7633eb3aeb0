//! # ficpress
//!
//! Turns a fan-fiction HTML export (the multi-chapter download format of
//! a popular publishing site) into a print-ready, book-paginated
//! document: site furniture stripped, headings canonicalized, empty
//! paragraphs collapsed, and a fixed book-page stylesheet attached.
//!
//! ## Quick Start
//!
//! ```
//! use ficpress::{Options, press};
//!
//! let html = r#"
//!     <div class="meta"><h1>My Fic</h1></div>
//!     <a rel="author">Jane Doe</a>
//!     <div id="chapters"><p>Once upon a time.</p></div>
//! "#;
//!
//! let work = press(html, &Options::default()).unwrap();
//! assert_eq!(work.metadata.title, "My Fic");
//! assert_eq!(work.default_filename(), "My Fic.pdf");
//! ```
//!
//! ## Rendering
//!
//! The pipeline stops at a transformed document plus stylesheet; an
//! external renderer paginates it to PDF:
//!
//! ```no_run
//! use std::path::Path;
//!
//! use ficpress::{Options, Renderer, WeasyPrint, press};
//!
//! let html = std::fs::read_to_string("fic.html").unwrap();
//! let work = press(&html, &Options::default()).unwrap();
//!
//! let renderer = WeasyPrint::default();
//! renderer
//!     .render(&work.document, work.stylesheet, Path::new("fic.pdf"))
//!     .unwrap();
//! ```

pub mod classify;
pub mod dom;
pub mod error;
pub mod export;
pub mod metadata;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod transform;
pub mod util;

pub use error::{Error, Result};
pub use metadata::{WorkMetadata, extract_metadata};
pub use pipeline::{Options, PressedWork, press};
pub use render::{Renderer, WeasyPrint};
pub use schema::Schema;
