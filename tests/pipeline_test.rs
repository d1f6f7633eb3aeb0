//! End-to-end pipeline tests over realistic export fixtures.
//!
//! Each fixture is an inline cut-down of the publishing site's download
//! format: a preface with the meta block and author anchor, then the
//! `chapters` container with site furniture interleaved.

use ficpress::{Error, Options, Schema, press};

/// A two-chapter work with summary, begin/end notes, chapter-text
/// markers, and blank paragraphs.
const FULL_WORK: &str = r##"<!DOCTYPE html>
<html>
<body>
<div class="meta">
  <h1>The Long Watch</h1>
  <div class="byline">by <a rel="author" href="/users/jdoe">Jane Doe</a></div>
  <div class="summary module"><h2 class="heading">Summary</h2><p>A synopsis.</p></div>
</div>
<div id="chapters">
  <div id="n1" class="notes module"><h2 class="heading"><a href="#top">1</a>Notes</h2><p>Thanks to my beta.</p></div>
  <h2 class="heading"><a name="ch1"></a>Chapter One</h2>
  <h3 class="landmark heading" id="work">Chapter Text</h3>
  <p>It began at dusk.</p>
  <p>   </p>
  <p><img src="divider.png" alt=""></p>
  <h2 class="heading">Chapter Two</h2>
  <h3 class="landmark heading">Chapter Text</h3>
  <p>It ended at dawn.</p>
  <div id="n2" class="end notes module"><h2 class="heading">End Notes</h2><p>See you next time.</p></div>
</div>
</body>
</html>"##;

#[test]
fn test_metadata_extracted() {
    let work = press(FULL_WORK, &Options::default()).expect("press succeeds");
    assert_eq!(work.metadata.title, "The Long Watch");
    assert_eq!(work.metadata.author, "Jane Doe");
    assert_eq!(work.default_filename(), "The Long Watch.pdf");
}

#[test]
fn test_metadata_scenario_minimal() {
    // Scenario 1 from the published format description.
    let html = r#"
        <div class="meta"><h1>My Fic</h1></div>
        <a rel="author">Jane Doe</a>
        <div id="chapters"></div>
    "#;
    let work = press(html, &Options::default()).unwrap();
    assert_eq!(work.metadata.title, "My Fic");
    assert_eq!(work.metadata.author, "Jane Doe");
}

#[test]
fn test_metadata_missing_aborts() {
    let html = r#"<div id="chapters"><p>text</p></div>"#;
    let err = press(html, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::MetadataMissing { .. }));
}

#[test]
fn test_chapter_text_markers_gone_order_kept() {
    let work = press(FULL_WORK, &Options::default()).unwrap();
    assert!(!work.document.contains("Chapter Text"));

    let first = work.document.find("It began at dusk.").unwrap();
    let second = work.document.find("It ended at dawn.").unwrap();
    assert!(first < second);
}

#[test]
fn test_notes_kept_by_default_as_inline_headings() {
    let work = press(FULL_WORK, &Options::default()).unwrap();

    // Note bodies survive; their headings are inline emphasis now.
    assert!(work.document.contains("Thanks to my beta."));
    assert!(work.document.contains("See you next time."));
    assert!(work.document.contains(r#"<em class="heading">1Notes</em>"#));
    assert!(work.document.contains(r#"<em class="heading">End Notes</em>"#));
}

#[test]
fn test_note_removal_hoists_heading() {
    // Scenario 2: the heading survives as text immediately before the
    // note's former position; the note body is gone.
    let html = r#"
        <div class="meta"><h1>My Fic</h1></div>
        <a rel="author">Jane Doe</a>
        <div id="chapters">
          <div id="n1" class="notes"><h2 class="heading"><a>1</a>Note</h2><p>text</p></div>
          <p>story</p>
        </div>
    "#;
    let options = Options {
        remove_notes: true,
        ..Options::default()
    };
    let work = press(html, &options).unwrap();

    assert!(!work.document.contains(">text<"));
    assert!(work.document.contains(r#"<h2 class="heading">1Note</h2>"#));

    let heading = work.document.find("1Note").unwrap();
    let story = work.document.find("story").unwrap();
    assert!(heading < story);
}

#[test]
fn test_note_removal_clears_all_notes() {
    let options = Options {
        remove_notes: true,
        ..Options::default()
    };
    let work = press(FULL_WORK, &options).unwrap();

    assert!(!work.document.contains("Thanks to my beta."));
    assert!(!work.document.contains("See you next time."));
    // Hoisted note headings survive in canonical form.
    assert!(work.document.contains(r#"<h2 class="heading">1Notes</h2>"#));
    assert!(work.document.contains(r#"<h2 class="heading">End Notes</h2>"#));
}

#[test]
fn test_strict_schema_spares_idless_notes() {
    let html = r#"
        <div class="meta"><h1>My Fic</h1></div>
        <a rel="author">Jane Doe</a>
        <div id="chapters">
          <div class="notes"><p>no id on this block</p></div>
        </div>
    "#;
    let options = Options {
        remove_notes: true,
        schema: Schema::strict_download(),
    };
    let work = press(html, &options).unwrap();
    assert!(work.document.contains("no id on this block"));
}

#[test]
fn test_empty_paragraph_compaction() {
    // Scenario 4: the blank paragraph goes, the image paragraph stays.
    let work = press(FULL_WORK, &Options::default()).unwrap();
    assert!(!work.document.contains("<p>   </p>"));
    assert!(work.document.contains(r#"<p><img src="divider.png" alt=""></p>"#));
}

#[test]
fn test_headings_canonicalized() {
    let work = press(FULL_WORK, &Options::default()).unwrap();
    assert!(work.document.contains(r#"<h2 class="heading">Chapter One</h2>"#));
    assert!(work.document.contains(r#"<h2 class="heading">Chapter Two</h2>"#));
    assert!(!work.document.contains("<h3"));
}

#[test]
fn test_summary_removed_from_chapters() {
    let html = r#"
        <div class="meta"><h1>My Fic</h1></div>
        <a rel="author">Jane Doe</a>
        <div id="chapters">
          <div class="summary"><h2 class="heading">Summary</h2><p>the blurb</p></div>
          <p>story</p>
        </div>
    "#;
    let work = press(html, &Options::default()).unwrap();
    assert!(!work.document.contains("the blurb"));
    assert!(work.document.contains(r#"<h2 class="heading">Summary</h2>"#));
}

#[test]
fn test_document_is_complete_and_styled() {
    let work = press(FULL_WORK, &Options::default()).unwrap();

    assert!(work.document.starts_with("<!DOCTYPE html>"));
    assert!(work.document.contains("<title>The Long Watch</title>"));
    assert!(work.document.contains(r#"<div id="chapters">"#));

    // The stylesheet rides along unmodified.
    assert!(work.stylesheet.contains("size: 110mm 170mm;"));
    assert!(work.stylesheet.contains("string-set: heading content()"));
}

#[test]
fn test_press_is_stable_across_runs() {
    let once = press(FULL_WORK, &Options::default()).unwrap();
    let twice = press(FULL_WORK, &Options::default()).unwrap();
    assert_eq!(once.document, twice.document);
}
