/// Linear scan for an exact match.
pub fn array_contains_value<T: PartialEq>(array: &[T], value: &T) -> bool {
    array.iter().any(|item| item == value)
}

pub fn string_array_contains_value<S: AsRef<str>>(array: &[S], value: &str) -> bool {
    array.iter().any(|item| item.as_ref() == value)
}

pub fn int_array_contains_value(array: &[i32], value: i32) -> bool {
    array_contains_value(array, &value)
}

pub fn long_array_contains_value(array: &[i64], value: i64) -> bool {
    array_contains_value(array, &value)
}

/// Uses exact `==` with no tolerance, so `0.1 + 0.2` will not be found in `[0.3]`
/// and `NaN` is never found.
pub fn double_array_contains_value(array: &[f64], value: f64) -> bool {
    array_contains_value(array, &value)
}

pub fn is_empty_array<T>(array: Option<&[T]>) -> bool {
    array.map_or(true, <[T]>::is_empty)
}

/// Copy of `array` with every occurrence of `value` removed.
pub fn remove_element_from_string_array<S: AsRef<str>>(array: &[S], value: &str) -> Vec<String> {
    array
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| *item != value)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_membership() {
        assert!(string_array_contains_value(&["a", "b"], "b"));
        assert!(!string_array_contains_value(&["a", "b"], "B"));
        assert!(int_array_contains_value(&[1, 2, 3], 3));
        assert!(!int_array_contains_value(&[], 3));
        assert!(long_array_contains_value(&[i64::MAX], i64::MAX));
        assert!(double_array_contains_value(&[1.1, 2.2], 1.1));
    }

    #[test]
    fn test_double_membership_has_no_tolerance() {
        assert!(!double_array_contains_value(&[0.3], 0.1 + 0.2));
        assert!(!double_array_contains_value(&[f64::NAN], f64::NAN));
    }

    #[test]
    fn test_is_empty_array() {
        let empty: [i32; 0] = [];
        assert!(is_empty_array::<i32>(None));
        assert!(is_empty_array(Some(&empty[..])));
        assert!(!is_empty_array(Some(&[1][..])));
    }

    #[test]
    fn test_remove_element_removes_every_occurrence() {
        let array = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(remove_element_from_string_array(&array, "a"), vec!["b"]);
        assert_eq!(remove_element_from_string_array(&array, "z"), array);
        assert_eq!(array.len(), 3);
    }
}
