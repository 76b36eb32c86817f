//! Content Selector
//!
//! Picks the single candidate most likely to hold the article body.
//!
//! Two strategies run in priority order:
//!
//! 1. **Content indicator match**: the longest candidate whose full text
//!    contains the content indicator and does not contain the title
//!    indicator. Only attempted when a content indicator is given.
//! 2. **Weighted matching**: the candidate with the highest [`Scorer`]
//!    weight, first restricted to candidates whose leading text contains the
//!    content indicator, then unrestricted. Scanning stops as soon as a
//!    weight above [`EARLY_EXIT_WEIGHT`] is seen.
//!
//! Ties always go to the candidate seen first in document order.

use tracing::{debug, trace};

use crate::dom::{self, NodeRef};
use crate::patterns::FILTER_WHITESPACE;
use crate::result::Strategy;

pub mod weight;

pub use weight::{HeuristicScorer, Scorer};

/// A weight above this ends the weighted scan immediately.
pub const EARLY_EXIT_WEIGHT: i32 = 300;

/// Leading characters of a candidate's text checked by the content filter.
pub const FILTER_PREFIX_CHARS: usize = 200;

/// The chosen element and the strategy that chose it.
#[derive(Debug, Clone, Copy)]
pub struct Selected<'a> {
    /// Selected element.
    pub element: NodeRef<'a>,
    /// Strategy that produced the match. Never [`Strategy::BodyFallback`].
    pub strategy: Strategy,
}

/// Selects the best candidate with the default [`HeuristicScorer`].
///
/// `candidates` must be in document order. Returns `None` when no strategy
/// finds a match.
///
/// # Example
///
/// ```rust
/// use article_extractor::{candidates, dom, selector};
///
/// let doc = dom::parse(r#"<body><div class="teaser">Breaking: Title here</div>
///     <div class="body">Title-free body text that we know about.</div></body>"#);
/// let nodes = candidates::collect_candidates(&doc);
///
/// let selected = selector::select(&nodes, Some("we know about"), Some("Title here")).unwrap();
/// assert_eq!(dom::class_name(&selected.element), "body");
/// ```
#[must_use]
pub fn select<'a>(
    candidates: &[NodeRef<'a>],
    content_indicator: Option<&str>,
    title_indicator: Option<&str>,
) -> Option<Selected<'a>> {
    select_with_scorer(candidates, content_indicator, title_indicator, &HeuristicScorer)
}

/// Selects the best candidate, weighting with `scorer`.
#[must_use]
pub fn select_with_scorer<'a, S: Scorer + ?Sized>(
    candidates: &[NodeRef<'a>],
    content_indicator: Option<&str>,
    title_indicator: Option<&str>,
    scorer: &S,
) -> Option<Selected<'a>> {
    let content_indicator = content_indicator.filter(|c| !c.is_empty());
    let title_indicator = title_indicator.filter(|t| !t.is_empty());

    if let Some(indicator) = content_indicator {
        if let Some(element) = match_content_indicator(candidates, indicator, title_indicator) {
            debug!(
                text_len = dom::char_len(&dom::full_text(&element)),
                "content indicator match"
            );
            return Some(Selected {
                element,
                strategy: Strategy::ContentIndicator,
            });
        }

        if let Some(element) = conventional_matching(candidates, Some(indicator), true, scorer) {
            debug!(
                text_len = dom::char_len(&dom::full_text(&element)),
                "weighted match with content filter"
            );
            return Some(Selected {
                element,
                strategy: Strategy::Weighted {
                    content_filter: true,
                },
            });
        }
    }

    let element = conventional_matching(candidates, content_indicator, false, scorer)?;
    debug!(
        text_len = dom::char_len(&dom::full_text(&element)),
        "weighted match without content filter"
    );
    Some(Selected {
        element,
        strategy: Strategy::Weighted {
            content_filter: false,
        },
    })
}

/// Longest candidate containing `content_indicator` but not `title_indicator`.
///
/// Favors the largest container holding the known body text while skipping
/// headers and teasers that repeat the title.
#[must_use]
pub fn match_content_indicator<'a>(
    candidates: &[NodeRef<'a>],
    content_indicator: &str,
    title_indicator: Option<&str>,
) -> Option<NodeRef<'a>> {
    let mut best: Option<NodeRef<'a>> = None;
    let mut max_len = 0;

    for candidate in candidates {
        let text = dom::full_text(candidate);
        if !text.contains(content_indicator) {
            continue;
        }
        if title_indicator.is_some_and(|title| text.contains(title)) {
            continue;
        }
        let len = dom::char_len(&text);
        if len > max_len {
            max_len = len;
            best = Some(*candidate);
        }
    }

    best
}

/// Highest weighted candidate, or `None` if no weight rises above zero.
///
/// With `with_content_filter`, candidates whose first
/// [`FILTER_PREFIX_CHARS`] characters do not contain `content_indicator`
/// are skipped; without an indicator that filter matches nothing.
#[must_use]
pub fn conventional_matching<'a, S: Scorer + ?Sized>(
    candidates: &[NodeRef<'a>],
    content_indicator: Option<&str>,
    with_content_filter: bool,
    scorer: &S,
) -> Option<NodeRef<'a>> {
    let mut best: Option<NodeRef<'a>> = None;
    let mut max_weight = 0;

    for candidate in candidates {
        if with_content_filter {
            let Some(indicator) = content_indicator else {
                return None;
            };
            if !leading_text(candidate).contains(indicator) {
                continue;
            }
        }

        let weight = scorer.weight(candidate);
        trace!(
            tag = dom::tag_name(candidate).unwrap_or_default(),
            class = dom::class_name(candidate),
            weight,
            "weighted candidate"
        );

        if weight > max_weight {
            max_weight = weight;
            best = Some(*candidate);
            if max_weight > EARLY_EXIT_WEIGHT {
                break;
            }
        }
    }

    best
}

/// First [`FILTER_PREFIX_CHARS`] characters of the full text, whitespace and
/// no-break spaces collapsed.
fn leading_text(node: &NodeRef) -> String {
    let prefix: String = dom::full_text(node).chars().take(FILTER_PREFIX_CHARS).collect();
    FILTER_WHITESPACE.replace_all(&prefix, " ").into_owned()
}
