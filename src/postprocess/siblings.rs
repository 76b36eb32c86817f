//! Structural cleanup around the selected element: aside removal and
//! adoption of image-bearing siblings.

use tracing::debug;

use crate::dom::{self, NodeRef};

/// Removes the first `<aside>` descendant, if any.
///
/// Returns true when an element was removed.
pub fn remove_first_aside(root: &NodeRef) -> bool {
    let aside = root
        .descendants_it()
        .find(|node| node.is_element() && dom::is_tag(node, "aside"));

    match aside {
        Some(aside) => {
            aside.remove_from_parent();
            debug!("removed aside");
            true
        }
        None => false,
    }
}

/// Moves sibling elements containing an `<img>` into `root`.
///
/// Preceding siblings are prepended, nearest first, so their original order
/// is kept ahead of the existing children. Following siblings are appended
/// the same way. Siblings without images stay where they are. Returns the
/// number of siblings moved.
pub fn adopt_sibling_images(root: &NodeRef) -> usize {
    let mut adopted = 0;

    let mut previous = root.prev_element_sibling();
    while let Some(sibling) = previous {
        previous = sibling.prev_element_sibling();
        if dom::contains_tag(&sibling, "img") {
            root.prepend_child(&sibling);
            adopted += 1;
            debug!(sibling = %dom::outer_html(&sibling), "prepended image sibling");
        }
    }

    let mut next = root.next_element_sibling();
    while let Some(sibling) = next {
        next = sibling.next_element_sibling();
        if dom::contains_tag(&sibling, "img") {
            root.append_child(&sibling);
            adopted += 1;
            debug!(sibling = %dom::outer_html(&sibling), "appended image sibling");
        }
    }

    adopted
}
