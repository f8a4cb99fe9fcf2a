use crate::core::BLANK_STRING_VALUE;
use crate::utils::error::{PasteboxError, Result};
use regex::Regex;
use regex_automata::meta;
use regex_syntax::hir::{Hir, Look};
use std::sync::LazyLock;

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" +").expect("space run pattern should compile"));

static CONTROL_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\t\n\r]+").expect("control whitespace pattern should compile"));

/// True for an absent value, a zero-length value, or one made only of whitespace.
pub fn is_empty_string(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Length is counted in characters, not bytes.
pub fn min_length(value: Option<&str>, length: usize) -> Result<bool> {
    let value = value.ok_or(PasteboxError::MissingValue {
        operation: "min_length",
    })?;
    Ok(value.chars().count() >= length)
}

pub fn max_length(value: Option<&str>, length: usize) -> Result<bool> {
    let value = value.ok_or(PasteboxError::MissingValue {
        operation: "max_length",
    })?;
    Ok(value.chars().count() <= length)
}

/// Full-string regular expression match.
///
/// The pattern is compiled on every call and a malformed pattern is an error
/// even when `value` is absent. An absent value never matches.
pub fn pattern(value: Option<&str>, pattern: &str) -> Result<bool> {
    let invalid = |message: String| PasteboxError::InvalidPattern {
        pattern: pattern.to_string(),
        source: regex::Error::Syntax(message),
    };

    // Anchor the parsed tree rather than the source text, so flags and
    // comments inside the pattern cannot reach the anchors.
    let parsed = regex_syntax::parse(pattern).map_err(|e| invalid(e.to_string()))?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), parsed, Hir::look(Look::End)]);
    let matcher = meta::Regex::builder()
        .build_from_hir(&anchored)
        .map_err(|e| invalid(e.to_string()))?;

    Ok(value.is_some_and(|v| matcher.is_match(v)))
}

/// Case-sensitive equality. The first operand is required, the second is not.
pub fn equal_strings(first: Option<&str>, second: Option<&str>) -> Result<bool> {
    let first = first.ok_or(PasteboxError::MissingValue {
        operation: "equal_strings",
    })?;
    Ok(second == Some(first))
}

/// Trims, then deletes every remaining space character.
pub fn remove_spaces(value: &str) -> String {
    SPACE_RUN.replace_all(value.trim(), "").into_owned()
}

/// Trims, then collapses each run of spaces into one.
pub fn remove_extra_spaces(value: &str) -> String {
    SPACE_RUN.replace_all(value.trim(), " ").into_owned()
}

pub fn replace_multiple_space_with_single_space(value: &str) -> String {
    SPACE_RUN.replace_all(value, " ").into_owned()
}

pub fn remove_new_line_return_tab_with_space(value: &str) -> String {
    CONTROL_WHITESPACE_RUN.replace_all(value, " ").into_owned()
}

/// Drops everything except ASCII letters, digits and whitespace.
pub fn keep_alphanumeric_and_space(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_pattern_whitespace(*c))
        .collect()
}

// The classic `\s` class: space, tab, newline, vertical tab, form feed, carriage return.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn contains_only_alphanumeric(value: Option<&str>) -> bool {
    match value {
        Some(v) if !is_empty_string(Some(v)) => v.chars().all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// `"yes"` in any letter case is true; everything else, including absent, is false.
pub fn replace_string_with_boolean(value: Option<&str>) -> bool {
    !is_empty_string(value) && value.is_some_and(|v| v.eq_ignore_ascii_case("yes"))
}

pub fn null_safe_string(value: Option<&str>) -> &str {
    match value {
        Some(v) if !is_empty_string(Some(v)) => v,
        _ => BLANK_STRING_VALUE,
    }
}

pub fn long_from_string_value(value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|source| PasteboxError::NumberFormat {
            value: value.to_string(),
            source,
        })
}

/// Milliseconds since the Unix epoch.
pub fn current_time_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
