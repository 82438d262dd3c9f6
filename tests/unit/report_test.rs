//! Unit tests for size reporting

use drp::{classify, minify_css, minify_javascript, ReportError};

#[test]
fn end_to_end_javascript_reduction() {
    let src = "// header\nfunction add ( a , b ) {\n  return a + b ;\n}\n";
    let out = minify_javascript(src);
    let result = classify(src, &out).unwrap();

    assert_eq!(result.minified, " function add(a,b){return a+b}");
    assert_eq!(result.original_size_bytes, 54);
    assert_eq!(result.minified_size_bytes, 30);
    assert_eq!(result.reduction_percent, 44);
    assert!(!result.already_minified);
}

#[test]
fn minified_css_is_already_minified() {
    let src = "a{color:red}";
    let result = classify(src, &minify_css(src)).unwrap();
    assert!(result.already_minified);
    assert_eq!(result.summary(), "File is already minified");
}

#[test]
fn division_guard() {
    let err = classify("", "").unwrap_err();
    assert_eq!(err, ReportError::InvalidDivision);
    assert_eq!(err.to_string(), "Cannot compute a reduction for empty input");
}

#[test]
fn result_serializes_all_fields() {
    let result = classify("a { b : c }", "a{b:c}").unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["minified"], "a{b:c}");
    assert_eq!(value["original_size_bytes"], 11);
    assert_eq!(value["minified_size_bytes"], 6);
    assert_eq!(value["reduction_percent"], 45);
    assert_eq!(value["already_minified"], false);
}
