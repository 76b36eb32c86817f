//! Character encoding detection and transcoding.
//!
//! Raw HTML bytes are decoded to UTF-8 before parsing. The charset is taken
//! from, in order: a byte order mark, a `charset=` declaration in a `<meta>`
//! tag within the first [`SNIFF_LIMIT`] bytes, and finally UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes of the document inspected for a `<meta>` charset declaration.
pub const SNIFF_LIMIT: usize = 1024;

/// Matches both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([a-z0-9_:.+-]+)"#)
        .expect("META_CHARSET_RE regex")
});

/// Detects the character encoding of HTML bytes.
///
/// # Examples
///
/// ```
/// use article_extractor::encoding::detect_encoding;
///
/// let html = br#"<meta charset="windows-1252"><p>caf\xE9</p>"#;
/// assert_eq!(detect_encoding(html).name(), "windows-1252");
/// ```
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LIMIT)];
    META_CHARSET_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing, and a leading byte
/// order mark is stripped.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> Cow<'_, str> {
    let (decoded, encoding, had_errors) = detect_encoding(html).decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    decoded
}
