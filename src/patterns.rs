//! Compiled regex patterns used to classify elements.
//!
//! All patterns are compiled once on first use with `LazyLock` and shared
//! read-only across threads. Class, id and attribute strings are lower-cased
//! before they are tested, so the tables themselves are lower-case only.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate Tags
// =============================================================================

/// Tags whose elements are eligible for content selection. Whole-name match.
pub static NODES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:p|div|td|h1|h2|article|section|main)$").expect("NODES regex")
});

// =============================================================================
// Class / Id Scoring Patterns
// =============================================================================

/// Class/id fragments of blocks that rarely hold the article body.
pub static UNLIKELY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"com(bx|ment|munity)|dis(qus|cuss)|e(xtra|-?mail)|foot|header|menu|re(mark|ply)|rss|sh(are|outbox)|sponsor|a(d|ll|gegate|rchive|ttachment)|(pag(er|ination))|popup|print|login|si(debar|gn|ngle)",
    )
    .expect("UNLIKELY regex")
});

/// Class/id/attribute fragments that mark article containers.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(^(body|content|h?entry|main|page|post|text|blog|story|haupt))|arti(cle|kel)|instapaper_body",
    )
    .expect("POSITIVE regex")
});

/// Class/id fragments of navigation, widgets and other page furniture.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"nav($|igation)|user|com(ment|bx)|(^com-)|contact|foot|masthead|(me(dia|ta))|outbrain|promo|related|scroll|(sho(utbox|pping))|sidebar|sponsor|tags|tool|widget|player|disclaimer|toc|infobox|vcard",
    )
    .expect("NEGATIVE regex")
});

/// Inline styles that hide an element or shrink it to fine print.
pub static NEGATIVE_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hidden|display: ?none|font-size: ?small").expect("NEGATIVE_STYLE regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Whitespace runs including no-break spaces, collapsed before the content filter check.
pub static FILTER_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\u{00A0}]+").expect("FILTER_WHITESPACE regex")
});
