//! Document sanitizing.
//!
//! Script, noscript and style elements are removed before anything is
//! measured so their text never counts towards a candidate.

use crate::dom::{self, Document};

/// Tags removed from the whole document, body and head alike.
pub const REMOVED_TAGS: &[&str] = &["script", "noscript", "style"];

/// Detaches every script, noscript and style element from the document.
///
/// Returns the number of elements removed. Running it a second time removes
/// nothing.
pub fn remove_scripts_and_styles(doc: &Document) -> usize {
    let doomed: Vec<_> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(|node| node.is_element() && REMOVED_TAGS.iter().any(|tag| dom::is_tag(node, tag)))
        .collect();

    // Nested matches are detached along with their ancestor; detaching them
    // again is a no-op on an already detached subtree.
    for node in &doomed {
        node.remove_from_parent();
    }
    doomed.len()
}
