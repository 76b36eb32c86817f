//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` that give the rest of the crate the element
//! view the heuristics were tuned against: lower-case tag names, whitespace
//! normalized full/own text, element-only children and tag lookups that
//! include the element itself.
//!
//! `dom_query` keeps the tree in an arena addressed by `NodeId`, so a
//! `NodeRef` stays valid while nodes are moved between parents.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

pub use tendril::StrTendril;

/// Elements that separate words when their text is flattened.
const TEXT_BREAK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Returns the `<html>` element, or `None` for a tree that was never populated.
#[must_use]
pub fn document_element(doc: &Document) -> Option<NodeRef<'_>> {
    doc.root().first_element_child()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Checks the tag name without allocating.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.node_name()
        .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Get element class attribute, empty when absent
#[must_use]
pub fn class_name(node: &NodeRef) -> String {
    node.class().map(|c| c.to_string()).unwrap_or_default()
}

/// Get element ID attribute, empty when absent
#[must_use]
pub fn id(node: &NodeRef) -> String {
    node.id_attr().map(|i| i.to_string()).unwrap_or_default()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Get all attribute values in source order
#[must_use]
pub fn attribute_values(node: &NodeRef) -> Vec<String> {
    node.attrs()
        .iter()
        .map(|attr| attr.value.to_string())
        .collect()
}

// === Text Content ===

/// Collapses runs of HTML whitespace to one space and trims the ends.
///
/// U+00A0 is not HTML whitespace and survives untouched.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{000C}') {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

/// Full text of the element and all its descendants, whitespace normalized.
#[must_use]
pub fn full_text(node: &NodeRef) -> String {
    let mut raw = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            raw.push_str(&descendant.text());
        } else if TEXT_BREAK_TAGS.iter().any(|tag| is_tag(&descendant, tag)) {
            raw.push(' ');
        }
    }
    normalize_whitespace(&raw)
}

/// Text held directly by the element, excluding descendant elements' text.
#[must_use]
pub fn own_text(node: &NodeRef) -> String {
    normalize_whitespace(&node.immediate_text())
}

/// Length in characters, the unit every text threshold is expressed in.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

// === Tree Navigation ===

/// Get direct element children in document order
#[inline]
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.element_children()
}

/// Elements with the given tag, the element itself first when it matches,
/// then descendants in pre-order.
#[must_use]
pub fn elements_by_tag<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    std::iter::once(*node)
        .chain(node.descendants())
        .filter(|n| n.is_element() && is_tag(n, tag))
        .collect()
}

/// Returns true when the element is, or contains, an element with the given tag.
#[must_use]
pub fn contains_tag(node: &NodeRef, tag: &str) -> bool {
    is_tag(node, tag) || node.descendants_it().any(|n| n.is_element() && is_tag(&n, tag))
}

// === Serialization ===

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}
