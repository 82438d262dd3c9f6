//! Unit tests for output file naming

use drp::files::filename::{is_min_file, output_file_name, DEFAULT_MARKER};
use drp::SourceKind;

fn name(input: &str, kind: SourceKind, already_minified: bool) -> String {
    output_file_name(input, kind, already_minified, DEFAULT_MARKER)
}

#[test]
fn naming_table() {
    let cases = [
        ("app.js", SourceKind::JavaScript, false, "app_drp.min.js"),
        ("app.js", SourceKind::JavaScript, true, "app_drp.js"),
        ("site.css", SourceKind::Css, false, "site_drp.min.css"),
        ("site.css", SourceKind::Css, true, "site_drp.css"),
        ("lib.min.js", SourceKind::JavaScript, false, "lib_drp.min.js"),
        ("lib.min.css", SourceKind::Css, true, "lib_drp.min.css"),
        ("lib_drp.min.css", SourceKind::Css, false, "lib_drp.min.css"),
        ("my_drp.css", SourceKind::Css, true, "my_drp.css"),
    ];
    for (input, kind, already, expected) in cases {
        assert_eq!(name(input, kind, already), expected, "input: {}", input);
    }
}

#[test]
fn output_never_repeats_marker() {
    for input in ["a_drp.js", "a_drp.min.js", "x_drp_y.css"] {
        let kind = SourceKind::from_file_name(input).unwrap();
        for already in [false, true] {
            assert_eq!(name(input, kind, already).matches(DEFAULT_MARKER).count(), 1);
        }
    }
}

#[test]
fn min_file_detection() {
    assert!(is_min_file("jquery.min.js"));
    assert!(is_min_file("BOOTSTRAP.MIN.CSS"));
    assert!(!is_min_file("minimal.js"));
    assert!(!is_min_file("app.min.jsx"));
}
