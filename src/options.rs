//! Configuration options for content extraction.
//!
//! The `Options` struct carries the two optional hints a caller may know
//! about the article: a fragment of its body text and a fragment of its
//! title. Both are plain substrings, compared case-sensitively against the
//! whitespace normalized text of candidate elements.

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use article_extractor::Options;
///
/// // No hints: weighted matching only
/// let options = Options::default();
///
/// let options = Options::default()
///     .with_content_indicator("The council voted on Tuesday")
///     .with_title_indicator("Council approves budget");
/// assert!(options.content_indicator().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Text expected to appear in the article body.
    ///
    /// Enables the exact indicator match and the filtered weighted pass.
    ///
    /// Default: `None`
    pub content_indicator: Option<String>,

    /// Text from the article title.
    ///
    /// Candidates repeating it are rejected by the indicator match, since
    /// they are usually headers or teasers rather than the body.
    ///
    /// Default: `None`
    pub title_indicator: Option<String>,
}

impl Options {
    /// Sets the content indicator.
    #[must_use]
    pub fn with_content_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.content_indicator = Some(indicator.into());
        self
    }

    /// Sets the title indicator.
    #[must_use]
    pub fn with_title_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.title_indicator = Some(indicator.into());
        self
    }

    /// Content indicator, `None` when unset or empty.
    #[must_use]
    pub fn content_indicator(&self) -> Option<&str> {
        non_empty(self.content_indicator.as_deref())
    }

    /// Title indicator, `None` when unset or empty.
    ///
    /// Every string contains the empty string, so an empty title would
    /// reject every candidate.
    #[must_use]
    pub fn title_indicator(&self) -> Option<&str> {
        non_empty(self.title_indicator.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
