//! Media markup repair.
//!
//! Some sites ship videos as hidden `<video>` shells carrying schema.org
//! `<meta>` children, and images as SVG placeholders inside a `<figure>`
//! whose `data-lazy-image` attribute holds the real URL. Both are rewritten
//! into plain, renderable markup.

use serde_json::Value;
use tracing::debug;

use crate::dom::{self, NodeRef};

/// `itemprop` value of the poster image meta.
const THUMBNAIL_PROP: &str = "thumbnailUrl";

/// `itemprop` value of the video file meta.
const CONTENT_URL_PROP: &str = "contentURL";

/// Attribute on `<figure>` carrying the lazy image JSON.
const LAZY_IMAGE_ATTR: &str = "data-lazy-image";

/// Turns `<video>` elements described only by `<meta>` children into playable ones.
///
/// When both a `thumbnailUrl` and a `contentURL` meta are present, the video
/// gets `controls`, a `poster` and a `<source>` child. Returns the number of
/// videos rewritten.
pub fn fix_videos(root: &NodeRef) -> usize {
    let mut fixed = 0;

    for video in dom::elements_by_tag(root, "video") {
        let mut thumbnail = None;
        let mut content_url = None;

        for meta in dom::elements_by_tag(&video, "meta") {
            match dom::get_attribute(&meta, "itemprop").as_deref() {
                Some(THUMBNAIL_PROP) => {
                    thumbnail = Some(dom::get_attribute(&meta, "content").unwrap_or_default());
                }
                Some(CONTENT_URL_PROP) => {
                    content_url = Some(dom::get_attribute(&meta, "content").unwrap_or_default());
                }
                _ => {}
            }
        }

        let (Some(thumbnail), Some(content_url)) = (thumbnail, content_url) else {
            continue;
        };

        video.set_attr("controls", "");
        video.set_attr("poster", &thumbnail);
        let source = video.tree.new_element("source");
        source.set_attr("src", &content_url);
        video.append_child(&source);

        fixed += 1;
        debug!(url = %content_url, "fixed video");
    }

    fixed
}

/// Restores the real `src` of images lazily loaded through their parent `<figure>`.
///
/// Images whose figure lacks a usable `data-lazy-image` value are left as
/// they are. Returns the number of images rewritten.
pub fn fix_lazy_images(root: &NodeRef) -> usize {
    let mut fixed = 0;

    for img in dom::elements_by_tag(root, "img") {
        let Some(figure) = img.parent().filter(|p| dom::is_tag(p, "figure")) else {
            continue;
        };
        let Some(src) = dom::get_attribute(&figure, LAZY_IMAGE_ATTR)
            .as_deref()
            .and_then(lazy_image_src)
        else {
            continue;
        };

        img.set_attr("src", &src);
        fixed += 1;
        debug!(src = %src, "removed lazy-load");
    }

    fixed
}

/// Extracts the image URL from a `data-lazy-image` value such as
/// `{"src": "/i/1.jpg"}`.
///
/// Only values whose first key is `src` are recognized, checked at fixed
/// offsets. The value is read as JSON when it parses, otherwise the first
/// quoted string after the key is taken.
#[must_use]
pub fn lazy_image_src(raw: &str) -> Option<String> {
    if raw.get(2..5) != Some("src") {
        return None;
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value.get("src").and_then(Value::as_str).map(str::to_owned),
        Err(_) => {
            let rest = raw.get(6..)?;
            let start = rest.find('"')? + 1;
            let len = rest[start..].find('"')?;
            Some(rest[start..start + len].to_owned())
        }
    }
}
