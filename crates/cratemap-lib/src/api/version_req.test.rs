use super::*;

#[test]
fn test_caret_prefix_stripped() {
    assert_eq!(normalize_requirement("^1.2.3"), "1.2.3");
}

#[test]
fn test_tilde_prefix_stripped() {
    assert_eq!(normalize_requirement("~0.3"), "0.3");
}

#[test]
fn test_exact_prefix_stripped() {
    assert_eq!(normalize_requirement("=2.0.1"), "2.0.1");
}

#[test]
fn test_compound_requirement_truncated_at_comma() {
    assert_eq!(normalize_requirement(">=1.0,<2.0"), ">=1.0");
    assert_eq!(normalize_requirement("~0.3,<0.4"), "0.3");
}

#[test]
fn test_comparison_operators_survive() {
    // Only the prefix operator run is stripped; `>=` is part of the token.
    assert_eq!(normalize_requirement(">=1.0"), ">=1.0");
    assert_eq!(normalize_requirement("<0.9"), "<0.9");
}

#[test]
fn test_stacked_prefix_operators() {
    assert_eq!(normalize_requirement("~=1.0"), "1.0");
}

#[test]
fn test_whitespace_trimmed() {
    assert_eq!(normalize_requirement("  ^1.2 , <1.5"), "1.2");
}

#[test]
fn test_idempotent_over_all_vectors() {
    for raw in [
        "^1.2.3",
        "~0.3,<0.4",
        ">=1.0,<2.0",
        "=2.0.1",
        "*",
        "not-a-version",
        "",
    ] {
        let once = normalize_requirement(raw);
        assert_eq!(normalize_requirement(&once), once, "input: {raw:?}");
    }
}

#[test]
fn test_deterministic() {
    assert_eq!(
        normalize_requirement("^1.2.3"),
        normalize_requirement("^1.2.3")
    );
}

#[test]
fn test_garbage_passes_through() {
    // No validation by design: unparseable input becomes the node token as-is.
    assert_eq!(normalize_requirement("banana"), "banana");
    assert_eq!(normalize_requirement("*"), "*");
}
