//! Reads HTML from stdin and writes the extraction result as JSON to stdout.
//!
//! Usage: `extract_stdin [CONTENT_INDICATOR [TITLE_INDICATOR]] < page.html`

use std::io;

use article_extractor::{extract_reader, Options};

fn main() {
    let mut args = std::env::args().skip(1);
    let mut options = Options::default();
    if let Some(content) = args.next() {
        options = options.with_content_indicator(content);
    }
    if let Some(title) = args.next() {
        options = options.with_title_indicator(title);
    }

    let result = match extract_reader(io::stdin().lock(), &options) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("extraction failed: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            std::process::exit(1);
        }
    }
}
