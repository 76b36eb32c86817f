//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Which selection path produced the extracted HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Strategy {
    /// Longest candidate containing the content indicator and not the title indicator.
    ContentIndicator,

    /// Highest weighted candidate.
    ///
    /// `content_filter` is true when only candidates whose leading text
    /// contains the content indicator were considered.
    Weighted {
        /// Whether the content-filtered pass produced the match.
        content_filter: bool,
    },

    /// No candidate was selected; the whole `<body>` was returned.
    BodyFallback,
}

impl Strategy {
    /// Returns true when an element was selected rather than the body fallback.
    #[must_use]
    pub fn is_match(self) -> bool {
        !matches!(self, Strategy::BodyFallback)
    }
}

/// Result of content extraction from an HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Serialized HTML of the selected and post-processed element, or of
    /// `<body>` on fallback. Empty when the document has no body.
    pub content_html: String,

    /// Whitespace normalized text of the same element.
    pub content_text: String,

    /// Selection path that produced `content_html`.
    pub strategy: Strategy,
}
