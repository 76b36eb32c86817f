//! Candidate weighting.
//!
//! A candidate's weight combines three signals: class/id/attribute patterns
//! on the element itself, the amount of text it holds directly, and the
//! shape of its direct children (long paragraphs, headings, captions).

use crate::dom::{self, NodeRef};
use crate::patterns::{NEGATIVE, NEGATIVE_STYLE, POSITIVE, UNLIKELY};

/// Children with less full text than this are ignored.
pub const MIN_CHILD_TEXT: usize = 20;

/// Own text longer than this earns a child the long-text bonus.
const LONG_OWN_TEXT: usize = 200;

/// Paragraphs must carry more full text than this to count.
const MIN_PARAGRAPH_TEXT: usize = 50;

/// Header tags bonus list. Tested with substring containment, so any tag
/// name that is a substring of this string counts.
const HEADER_TAGS: &str = "h1;h2;h3;h4;h5;h6";

/// Computes the weight of a candidate element.
///
/// Implementations must not mutate the tree.
pub trait Scorer {
    /// Weight of `node`. Higher is more likely to be the article body.
    fn weight(&self, node: &NodeRef) -> i32;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn weight(&self, node: &NodeRef) -> i32 {
        (**self).weight(node)
    }
}

/// The default scorer: pattern weight, own-text density and child weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl Scorer for HeuristicScorer {
    fn weight(&self, node: &NodeRef) -> i32 {
        calc_weight(node) + own_text_weight(node) + weight_child_nodes(node)
    }
}

/// Pattern weight from the element's class, id, attribute values and inline style.
#[must_use]
pub fn calc_weight(node: &NodeRef) -> i32 {
    let class = dom::class_name(node).to_lowercase();
    let id = dom::id(node).to_lowercase();
    let mut weight = 0;

    if POSITIVE.is_match(&class) {
        weight += 35;
    }
    if POSITIVE.is_match(&id) {
        weight += 40;
    }
    // Custom attributes count too, e.g. itemprop="articleBody"
    if dom::attribute_values(node)
        .iter()
        .any(|value| POSITIVE.is_match(&value.to_lowercase()))
    {
        weight += 35;
    }

    if UNLIKELY.is_match(&class) {
        weight -= 20;
    }
    if UNLIKELY.is_match(&id) {
        weight -= 20;
    }

    if NEGATIVE.is_match(&class) {
        weight -= 50;
    }
    if NEGATIVE.is_match(&id) {
        weight -= 50;
    }

    if let Some(style) = dom::get_attribute(node, "style") {
        if !style.is_empty() && NEGATIVE_STYLE.is_match(&style.to_lowercase()) {
            weight -= 50;
        }
    }

    weight
}

/// Ten points per hundred characters of own text, rounded.
#[must_use]
pub fn own_text_weight(node: &NodeRef) -> i32 {
    let own_len = dom::char_len(&dom::own_text(node));
    (own_len as f64 / 100.0 * 10.0).round() as i32
}

/// Weight contributed by the element's direct children.
#[must_use]
pub fn weight_child_nodes(root: &NodeRef) -> i32 {
    let mut weight = 0;
    let mut has_caption = false;
    let mut paragraphs = 0usize;

    for child in dom::element_children(root) {
        let child = collapse_wrappers(child);
        let text_len = dom::char_len(&dom::full_text(&child));
        if text_len < MIN_CHILD_TEXT {
            continue;
        }

        let own_len = dom::char_len(&dom::own_text(&child));
        if own_len > LONG_OWN_TEXT {
            weight += (own_len / 10).max(50) as i32;
        }

        let tag = dom::tag_name(&child).unwrap_or_default();
        match tag.as_str() {
            "h1" | "h2" => weight += 30,
            "div" | "p" => {
                weight += (own_len / 25) as i32;
                if tag == "p" && text_len > MIN_PARAGRAPH_TEXT {
                    paragraphs += 1;
                }
                if dom::class_name(&child).to_lowercase() == "caption" {
                    has_caption = true;
                }
            }
            _ => {}
        }
    }

    if has_caption {
        weight += 30;
    }

    if paragraphs >= 2 {
        for child in dom::element_children(root) {
            if dom::tag_name(&child).is_some_and(|tag| HEADER_TAGS.contains(tag.as_str())) {
                weight += 20;
            }
        }
    }

    weight
}

/// Descends through wrappers that hold exactly one element and no own text.
fn collapse_wrappers(mut node: NodeRef<'_>) -> NodeRef<'_> {
    loop {
        let children = dom::element_children(&node);
        if children.len() != 1 || !dom::own_text(&node).is_empty() {
            return node;
        }
        node = children[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse, Document};

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
        tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
        exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor \
        in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

    fn first<'a>(doc: &'a Document, sel: &str) -> NodeRef<'a> {
        *doc.select(sel).nodes().first().expect("fixture element")
    }

    #[test]
    fn positive_class_and_attribute_both_count() {
        let doc = parse(r#"<div class="content">x</div>"#);
        assert_eq!(calc_weight(&first(&doc, "div")), 70);
    }

    #[test]
    fn positive_id_scores_forty() {
        let doc = parse(r#"<div data-x="1" id="Story">x</div>"#);
        // id and the id attribute value both match
        assert_eq!(calc_weight(&first(&doc, "div")), 75);
    }

    #[test]
    fn custom_attribute_can_be_positive() {
        let doc = parse(r#"<div itemprop="articleBody">x</div>"#);
        assert_eq!(calc_weight(&first(&doc, "div")), 35);
    }

    #[test]
    fn unlikely_and_negative_penalties_stack() {
        let doc = parse(r#"<div class="ad-widget">x</div>"#);
        assert_eq!(calc_weight(&first(&doc, "div")), -70);

        let doc = parse(r#"<div class="Sidebar" id="footer">x</div>"#);
        // class: unlikely -20, negative -50; id: unlikely -20, negative -50
        assert_eq!(calc_weight(&first(&doc, "div")), -140);
    }

    #[test]
    fn hidden_style_is_penalized() {
        let doc = parse(r#"<div style="Display:None">x</div>"#);
        assert_eq!(calc_weight(&first(&doc, "div")), -50);

        let doc = parse(r#"<div style="">x</div>"#);
        assert_eq!(calc_weight(&first(&doc, "div")), 0);
    }

    #[test]
    fn own_text_weight_rounds_per_ten_chars() {
        let doc = parse(&format!("<div>{}</div>", "a".repeat(125)));
        assert_eq!(own_text_weight(&first(&doc, "div")), 13);

        let doc = parse(&format!("<div>{}</div>", "a".repeat(124)));
        assert_eq!(own_text_weight(&first(&doc, "div")), 12);
    }

    #[test]
    fn short_children_are_skipped() {
        let doc = parse(r#"<div><p>too short</p><h1>tiny</h1></div>"#);
        assert_eq!(weight_child_nodes(&first(&doc, "div")), 0);
    }

    #[test]
    fn long_paragraph_child() {
        let text = "x".repeat(300);
        let doc = parse(&format!(r#"<div id="root"><p>{text}</p></div>"#));
        // long own text: max(50, 30) = 50; p density: 300 / 25 = 12
        assert_eq!(weight_child_nodes(&first(&doc, "#root")), 62);
    }

    #[test]
    fn headings_and_captions() {
        let doc = parse(
            r#"<div id="root">
                <h2>A heading that is long enough</h2>
                <div class="Caption">A caption that is long enough</div>
            </div>"#,
        );
        // h2: 30; caption div: own 30 / 25 = 1; caption bonus: 30
        assert_eq!(weight_child_nodes(&first(&doc, "#root")), 61);
    }

    #[test]
    fn header_bonus_needs_two_paragraphs() {
        let para = "p".repeat(60);
        let doc = parse(&format!(
            r#"<div id="root"><h3>short</h3><h4>h</h4><p>{para}</p><p>{para}</p></div>"#
        ));
        // each p: 60 / 25 = 2; two paragraphs enable +20 per h3/h4 even though they are short
        assert_eq!(weight_child_nodes(&first(&doc, "#root")), 2 + 2 + 40);

        let doc = parse(&format!(r#"<div id="root"><h3>short</h3><p>{para}</p></div>"#));
        assert_eq!(weight_child_nodes(&first(&doc, "#root")), 2);
    }

    #[test]
    fn wrappers_are_collapsed() {
        let para = "w".repeat(100);
        let doc = parse(&format!(
            r#"<div id="root"><section><div><p>{para}</p></div></section><section><p>{para}</p></section></div>"#
        ));
        // both sections collapse to their paragraph: 100 / 25 = 4 each, two paragraphs, no headers
        assert_eq!(weight_child_nodes(&first(&doc, "#root")), 8);
    }

    #[test]
    fn wrapper_with_own_text_is_not_collapsed() {
        let para = "w".repeat(100);
        let doc = parse(&format!(r#"<div id="root"><section>lead <p>{para}</p></section></div>"#));
        // section is not div/p: nothing beyond the length check applies
        assert_eq!(weight_child_nodes(&first(&doc, "#root")), 0);
    }

    #[test]
    fn heuristic_scorer_sums_parts() {
        let doc = parse(&format!(
            r#"<body><div class="content"><p>{LOREM}</p></div></body>"#
        ));
        let div = first(&doc, "div");
        let expected = calc_weight(&div) + own_text_weight(&div) + weight_child_nodes(&div);
        assert_eq!(HeuristicScorer.weight(&div), expected);
        assert!(expected > 0);
    }

    #[test]
    fn more_own_text_never_lowers_weight() {
        let mut previous = i32::MIN;
        for n in [0, 10, 50, 199, 200, 201, 500, 2000] {
            let doc = parse(&format!(
                r#"<div class="post">{}<p>{LOREM}</p></div>"#,
                "t".repeat(n)
            ));
            let weight = HeuristicScorer.weight(&first(&doc, "div"));
            assert!(weight >= previous, "{n}: {weight} < {previous}");
            previous = weight;
        }
    }
}
