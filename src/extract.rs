//! Core extraction pipeline.
//!
//! Sanitizer -> candidate collector -> selector -> post-processor. When no
//! candidate is selected the serialized `<body>` is returned instead.

use tracing::{debug, warn};

use crate::candidates::collect_candidates;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::postprocess::post_process;
use crate::result::{ExtractResult, Strategy};
use crate::sanitize::remove_scripts_and_styles;
use crate::selector;

/// Runs the full pipeline over `doc`, mutating it in place.
pub(crate) fn extract_content(doc: &Document, options: &Options) -> Result<ExtractResult> {
    if dom::document_element(doc).is_none() {
        return Err(Error::MissingDocument);
    }

    let removed = remove_scripts_and_styles(doc);
    let candidates = collect_candidates(doc);
    debug!(
        removed,
        candidates = candidates.len(),
        title = options.title_indicator().unwrap_or_default(),
        "prepared document"
    );

    let Some(selected) = selector::select(
        &candidates,
        options.content_indicator(),
        options.title_indicator(),
    ) else {
        warn!("content selection failed, returning document body");
        return Ok(body_fallback(doc));
    };

    let content_html = post_process(&selected.element);
    let content_text = dom::full_text(&selected.element);

    Ok(ExtractResult {
        content_html,
        content_text,
        strategy: selected.strategy,
    })
}

/// Serialized `<body>`, or empty output when the tree has none.
fn body_fallback(doc: &Document) -> ExtractResult {
    let (content_html, content_text) = doc
        .body()
        .map(|body| (dom::outer_html(&body).to_string(), dom::full_text(&body)))
        .unwrap_or_default();

    ExtractResult {
        content_html,
        content_text,
        strategy: Strategy::BodyFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn missing_document_is_an_error() {
        let result = extract_content(&Document::default(), &Options::default());
        assert!(matches!(result, Err(Error::MissingDocument)));
    }

    #[test]
    fn no_candidates_falls_back_to_body() {
        let doc = parse(r#"<html><body><span>just a span</span><script>x()</script></body></html>"#);
        let result = extract_content(&doc, &Options::default()).expect("extraction");

        assert_eq!(result.strategy, Strategy::BodyFallback);
        assert_eq!(result.content_html, "<body><span>just a span</span></body>");
        assert_eq!(result.content_text, "just a span");
    }

    #[test]
    fn fragment_without_body_yields_empty_output() {
        let doc = Document::fragment(r#"<div><p>fragment text</p></div>"#);
        let result = extract_content(&doc, &Options::default()).expect("extraction");

        assert_eq!(result.strategy, Strategy::BodyFallback);
        assert!(result.content_html.is_empty());
        assert!(result.content_text.is_empty());
    }

    #[test]
    fn selected_element_is_post_processed() {
        let text = "Real article text. ".repeat(20);
        let doc = parse(&format!(
            r#"<body><div class="article"><p>{text}</p><aside>side</aside></div></body>"#
        ));
        let result = extract_content(&doc, &Options::default()).expect("extraction");

        assert!(result.strategy.is_match());
        assert!(result.content_html.starts_with(r#"<div class="article">"#));
        assert!(!result.content_html.contains("side"));
    }
}
