use article_extractor::{extract, extract_with_options, Options};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_unclosed_tags() {
    let result = extract("<p>text<div>more").expect("extraction failed");
    assert!(result.content_text.contains("text") || result.content_text.contains("more"));
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    assert!(extract("<p><div></p></div>").is_ok());
    assert!(extract("<td><article></td><main>").is_ok());
}

#[test]
fn extract_does_not_panic_on_binary_like_input() {
    let html = "\u{0}\u{1}<div>\u{FFFD}\u{FFFD}</div>\u{7f}";
    assert!(extract(html).is_ok());
}

#[test]
fn extract_handles_multibyte_text_near_filter_boundary() {
    // 199 ASCII chars followed by multi-byte chars straddling the prefix cut
    let prefix = "a".repeat(199);
    let html = format!("<body><div><p>{prefix}日本語のテキスト</p></div></body>");
    let options = Options::default().with_content_indicator("日本");

    let result = extract_with_options(&html, &options).expect("extraction failed");
    assert!(result.content_text.contains("日本語"));
}

#[test]
fn extract_handles_empty_indicators() {
    let html = "<body><div class=\"post\"><p>Article body text goes here for the reader.</p></div></body>";
    let options = Options::default()
        .with_content_indicator("")
        .with_title_indicator("");

    let result = extract_with_options(html, &options).expect("extraction failed");
    assert!(result.strategy.is_match());
}

#[test]
fn extract_handles_deep_nesting() {
    let depth = 200;
    let html = format!(
        "<body>{}<p>Deeply nested paragraph with enough text to weigh something.</p>{}</body>",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );

    let result = extract(&html).expect("extraction failed");
    assert!(result.content_text.contains("Deeply nested"));
}

#[test]
fn extract_large_document_completes_quickly() {
    let teaser = "<div class=\"promo\"><p>Short teaser line.</p></div>";
    let body = "Long paragraph text for the real article body. ".repeat(40);
    let html = format!(
        "<html><body>{}<div class=\"content\"><p>{body}</p><p>{body}</p></div>{}</body></html>",
        teaser.repeat(2000),
        teaser.repeat(2000)
    );

    let start = Instant::now();
    let result = extract(&html).expect("extraction failed");
    let elapsed = start.elapsed();

    assert!(result.content_html.starts_with("<div class=\"content\">"));
    assert!(elapsed < Duration::from_secs(10), "extraction took {elapsed:?}");
}
