use crate::utils::error::{PasteboxError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PasteboxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Err(PasteboxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// A delimiter must be exactly one character that can never appear inside a
/// field produced by the alphanumeric or whitespace helpers.
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    let delimiter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(PasteboxError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Delimiter must be exactly one character".to_string(),
            })
        }
    };

    if delimiter.is_alphanumeric() || delimiter.is_whitespace() {
        return Err(PasteboxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter cannot be alphanumeric or whitespace".to_string(),
        });
    }

    Ok(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("csv.delimiter", ",").unwrap(), ',');
        assert_eq!(validate_delimiter("csv.delimiter", ";").unwrap(), ';');
        assert!(validate_delimiter("csv.delimiter", "").is_err());
        assert!(validate_delimiter("csv.delimiter", ",,").is_err());
        assert!(validate_delimiter("csv.delimiter", "a").is_err());
        assert!(validate_delimiter("csv.delimiter", "\t").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["trace", "debug", "info"];
        assert!(validate_one_of("logging.level", "debug", &levels).is_ok());
        assert!(validate_one_of("logging.level", "DEBUG", &levels).is_ok());
        assert!(validate_one_of("logging.level", "loud", &levels).is_err());
    }
}
