use anyhow::Result;
use pastebox::{
    contains_only_alphanumeric, equal_strings, is_empty_string, keep_alphanumeric_and_space,
    max_length, min_length, null_safe_string, pattern, remove_extra_spaces,
    remove_new_line_return_tab_with_space, replace_string_with_boolean, PasteboxError,
    BLANK_STRING_VALUE,
};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "\t\n",
    "a",
    "  padded  ",
    "many    inner   spaces",
    "tab\tand\nnewline",
    "ünïcödé",
    " mixed \t whitespace \r\n ",
];

/// 測試空字串判斷：缺值或全為空白
#[test]
fn test_is_empty_string_matches_whitespace_definition() {
    assert!(is_empty_string(None));
    for sample in SAMPLES {
        let expected = sample.chars().all(char::is_whitespace);
        assert_eq!(is_empty_string(Some(*sample)), expected, "sample: {:?}", sample);
    }
}

#[test]
fn test_length_bounds_agree_with_char_count() -> Result<()> {
    for sample in SAMPLES {
        let len = sample.chars().count();
        for n in 0..=len + 1 {
            assert_eq!(min_length(Some(*sample), n)?, len >= n, "{:?} >= {}", sample, n);
            assert_eq!(max_length(Some(*sample), n)?, len <= n, "{:?} <= {}", sample, n);
        }
    }
    Ok(())
}

#[test]
fn test_remove_extra_spaces_is_idempotent() {
    for sample in SAMPLES {
        let once = remove_extra_spaces(sample);
        assert_eq!(remove_extra_spaces(&once), once, "sample: {:?}", sample);
    }
}

#[test]
fn test_normalization_pipeline() {
    let raw = "  Order #42:\tshipped\r\n  today!  ";
    let flattened = remove_new_line_return_tab_with_space(raw);
    let cleaned = keep_alphanumeric_and_space(&flattened);
    assert_eq!(remove_extra_spaces(&cleaned), "Order 42 shipped today");
}

#[test]
fn test_pattern_and_equality_errors_are_distinguishable() {
    assert!(matches!(
        pattern(Some("abc"), "[a-"),
        Err(PasteboxError::InvalidPattern { .. })
    ));
    assert!(matches!(
        equal_strings(None, Some("abc")),
        Err(PasteboxError::MissingValue { .. })
    ));
    assert!(matches!(
        min_length(None, 0),
        Err(PasteboxError::MissingValue { .. })
    ));
}

#[test]
fn test_pattern_full_match() -> Result<()> {
    assert!(pattern(Some("2024-01-15"), r"\d{4}-\d{2}-\d{2}")?);
    assert!(!pattern(Some("on 2024-01-15"), r"\d{4}-\d{2}-\d{2}")?);
    assert!(!pattern(None, r"\d+")?);
    Ok(())
}

#[test]
fn test_flag_and_default_helpers() {
    assert!(replace_string_with_boolean(Some("YES")));
    assert!(!replace_string_with_boolean(Some("no")));
    assert!(!replace_string_with_boolean(Some("")));

    assert!(contains_only_alphanumeric(Some("Abc123")));
    assert!(!contains_only_alphanumeric(Some("abc_123")));

    assert_eq!(null_safe_string(Some("kept")), "kept");
    assert_eq!(null_safe_string(Some(" ")), BLANK_STRING_VALUE);
    assert_eq!(null_safe_string(None), BLANK_STRING_VALUE);
}
