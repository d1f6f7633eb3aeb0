//! The fixed book-page stylesheet.
//!
//! This is configuration data, handed to the renderer unmodified: a
//! 110x170mm page with mirrored margins, running chapter headers from the
//! `string-set` on `h2`, page-number counters in the outer margins,
//! forced breaks before sections and canonical headings, and justified,
//! hyphenated, first-line-indented body text.

/// Print stylesheet applied to every pressed work.
pub const PAGE_STYLESHEET: &str = r#"@page {
  size: 110mm 170mm;
}
@page :left {
  margin: 12mm 10mm 20mm 15mm;
  @bottom-left { content: counter(page) }
  @top-right { content: string(heading); font-variant: small-caps }
}
@page :right {
  margin: 12mm 20mm 12mm 10mm;
  @top-left { content: string(heading); font-variant: small-caps }
  @bottom-right { content: counter(page) }
}
@page :blank {
  @top-right { content: none }
  @top-left { content: none }
}
@page :clean {
  @top-right { content: none }
  @top-left { content: none }
}

img {
  display: none;
}

html {
  font-size: 8pt;
}
body {
  margin: 0;
}
section {
  break-after: right;
  padding-top: 25mm;
}
aside {
  display: none;
}

h1 {
  break-after: right;
  font-size: 2.6em;
  font-weight: normal;
  margin: 3em 0;
  page: clean;
}
h2 {
  break-before: always;
  font-size: 1.4em;
  font-variant: small-caps;
  font-weight: normal;
  margin: 0 0 1em;
  page: clean;
  string-set: heading content();
  text-align: center;
}
p {
  hyphens: auto;
  margin: 0;
  text-align: justify;
  text-indent: 1em;
}
dd {
  margin: 0 0 0 1em;
}
br::after {
  content: '';
  display: inline-block;
  width: 0.78em;
}

.fullpage {
  display: none;
}
"#;
