//! Post-processing of the selected element.
//!
//! Runs once per extraction, after selection, and mutates the document in
//! place: nodes are moved or removed rather than copied.
//!
//! Steps, in order:
//! 1. Remove the first `<aside>` descendant.
//! 2. Adopt sibling elements that carry images.
//! 3. Make metadata-only `<video>` elements playable.
//! 4. Restore lazy-loaded `<figure>` image URLs.
//! 5. Serialize the element.

use crate::dom::{self, NodeRef};

pub mod media;
pub mod siblings;

/// Applies every post-processing step to `element` and returns its HTML.
#[must_use]
pub fn post_process(element: &NodeRef) -> String {
    siblings::remove_first_aside(element);
    siblings::adopt_sibling_images(element);
    media::fix_videos(element);
    media::fix_lazy_images(element);
    dom::outer_html(element).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn runs_all_steps() {
        let doc = parse(
            r#"<body>
                <figure data-lazy-image='{"src": "/hero.jpg"}'><img src="data:,"></figure>
                <article id="root">
                    <p>Body text.</p>
                    <aside>Related links</aside>
                    <video><meta itemprop="thumbnailUrl" content="t.jpg"><meta itemprop="contentURL" content="v.mp4"></video>
                </article>
            </body>"#,
        );
        let root = *doc.select("#root").nodes().first().expect("fixture element");

        let html = post_process(&root);

        assert!(html.starts_with(r#"<article id="root"><figure"#));
        assert!(html.contains(r#"<img src="/hero.jpg">"#));
        assert!(!html.contains("Related links"));
        assert!(html.contains(r#"<video controls="" poster="t.jpg">"#));
        assert!(html.contains(r#"<source src="v.mp4">"#));
        assert!(html.ends_with("</article>"));
    }
}
