//! # article-extractor
//!
//! Heuristic main-article selection for parsed HTML pages.
//!
//! The extractor strips scripts and styles, scores every paragraph-like
//! block, picks the element most likely to hold the article, then repairs
//! the media inside it (sibling images, video sources, lazy figure images)
//! before serializing it back to HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_extractor::extract;
//!
//! let story = "This paragraph is the story the reader came for. ".repeat(10);
//! let html = format!(
//!     r#"<html><body>
//!         <div class="ad-widget"><p>Buy now</p></div>
//!         <div class="content"><p>{story}</p></div>
//!     </body></html>"#
//! );
//!
//! let result = extract(&html)?;
//! assert!(result.content_html.starts_with(r#"<div class="content">"#));
//! assert!(!result.content_text.contains("Buy now"));
//! # Ok::<(), article_extractor::Error>(())
//! ```
//!
//! ## Selection
//!
//! - **Content indicator**: when [`Options::content_indicator`] is set, the
//!   candidate with the longest text containing it wins outright.
//! - **Weighted**: otherwise each candidate is weighted from its class, id,
//!   style and text, and the heaviest one wins. A weight above 300 stops the
//!   scan early.
//! - **Body fallback**: when nothing qualifies the whole `<body>` is returned.

mod error;
mod extract;
mod options;
mod result;

/// Regex tables used to classify candidate elements.
pub mod patterns;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Script and style removal.
pub mod sanitize;

/// Candidate element collection.
pub mod candidates;

/// Content selection strategies and element weighting.
pub mod selector;

/// Repairs applied to the selected element before serialization.
pub mod postprocess;

/// Character encoding detection and transcoding.
pub mod encoding;

use std::io::Read;

use dom_query::Document;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ExtractResult, Strategy};

/// Extracts the main article from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use article_extractor::{extract, Strategy};
///
/// let result = extract("<html><body><span>only inline text</span></body></html>")?;
/// assert_eq!(result.strategy, Strategy::BodyFallback);
/// assert_eq!(result.content_text, "only inline text");
/// # Ok::<(), article_extractor::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use article_extractor::{extract_with_options, Options, Strategy};
///
/// let html = "<body><div><p>intro</p><p>We know about the matter in detail.</p></div></body>";
/// let options = Options::default().with_content_indicator("know about the matter");
///
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.strategy, Strategy::ContentIndicator);
/// assert!(result.content_html.starts_with("<div>"));
/// # Ok::<(), article_extractor::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    let doc = dom::parse(html);
    extract_document(&doc, options)
}

/// Extracts from an already parsed document.
///
/// The document is modified in place: scripts and styles are removed and the
/// selected element is repaired. Fails with [`Error::MissingDocument`] when
/// the tree has no root element.
pub fn extract_document(doc: &Document, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(doc, options)
}

/// Extracts from raw HTML bytes with automatic encoding detection.
///
/// # Character Encoding
///
/// The encoding is detected from:
/// - a byte order mark
/// - `<meta charset="...">`
/// - `<meta http-equiv="Content-Type" content="...; charset=...">`
/// - UTF-8 when no declaration is found
///
/// Invalid sequences are replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use article_extractor::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.content_text.contains("Caf\u{e9}"));
/// # Ok::<(), article_extractor::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts from raw HTML bytes with custom options and automatic encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Reads a whole HTML document from `reader` and extracts from it.
///
/// Read failures surface as [`Error::Io`].
pub fn extract_reader<R: Read>(mut reader: R, options: &Options) -> Result<ExtractResult> {
    let mut html = Vec::new();
    reader.read_to_end(&mut html)?;
    extract_bytes_with_options(&html, options)
}
