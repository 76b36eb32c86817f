//! Candidate collection.
//!
//! Every element under `<body>` whose tag is structurally interesting is a
//! candidate. The list is in pre-order document order, which is also the
//! order every tie-break in the selector relies on.

use crate::dom::{self, Document, NodeRef};
use crate::patterns::NODES;

/// Collects the candidate elements under `<body>`.
///
/// Returns an empty list when the document has no body or nothing matches.
#[must_use]
pub fn collect_candidates(doc: &Document) -> Vec<NodeRef<'_>> {
    let Some(body) = doc.body() else {
        return Vec::new();
    };

    body.descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .filter(|node| dom::tag_name(node).is_some_and(|tag| NODES.is_match(&tag)))
        .collect()
}
