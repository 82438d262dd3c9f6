//! Batch processing over real files

use drp::{process_batch, BatchOptions, FileOutcome, SkipReason};

use crate::helpers::{temp_fixtures, write_file};

#[test]
fn fixtures_batch() {
    let (temp, mut paths) = temp_fixtures(&["cart.js", "styles.css", "tight.css"]);
    paths.push(write_file(temp.path(), "readme.md", "# hi"));

    let summary = process_batch(&paths, &BatchOptions::default());

    assert_eq!(summary.success, 3);
    assert_eq!(summary.failure, 1);
    let names: Vec<_> = summary
        .processed()
        .map(|f| f.output_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["cart_drp.min.js", "styles_drp.min.css", "tight_drp.css"]
    );
    assert_eq!(summary.total_sizes(), (180 + 143 + 12, 99 + 90 + 12));
    assert!(matches!(
        &summary.outcomes[3],
        FileOutcome::Skipped(SkipReason::Unsupported { name }) if name == "readme.md"
    ));
}

#[test]
fn uppercase_extension_is_unsupported() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = write_file(temp.path(), "APP.JS", "var a = 1;");
    let summary = process_batch(&[path], &BatchOptions::default());
    assert_eq!(summary.success, 0);
    assert_eq!(
        summary.skipped().next().map(|r| r.to_string()).as_deref(),
        Some("Skipped APP.JS: Unsupported file type")
    );
}

#[test]
fn custom_marker_and_literal_aware() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = write_file(temp.path(), "s.js", "var s = 'a//b' ; // c\n");
    let mut options = BatchOptions {
        marker: ".out".to_string(),
        ..BatchOptions::default()
    };
    options.minify.literal_aware = true;

    let summary = process_batch(&[path], &options);
    let file = summary.processed().next().unwrap();
    assert_eq!(file.output_name, "s.out.min.js");
    assert_eq!(file.result.minified, "var s='a//b';");
}
