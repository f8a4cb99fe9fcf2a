//! Bare delimiter-joined lists.
//!
//! Fields are never trimmed, quoted or unescaped: a field that contains the
//! delimiter cannot survive a round trip.

use crate::config::CsvConfig;
use crate::core::strings::is_empty_string;
use crate::utils::error::Result;
use crate::utils::validation::validate_delimiter;

pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvCodec {
    delimiter: char,
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CsvCodec {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn from_config(config: &CsvConfig) -> Result<Self> {
        match &config.delimiter {
            Some(delimiter) => Ok(Self::new(validate_delimiter("csv.delimiter", delimiter)?)),
            None => Ok(Self::default()),
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Absent, empty and whitespace-only input all yield an empty list.
    pub fn split(&self, csv: Option<&str>) -> Vec<String> {
        match csv {
            Some(csv) if !is_empty_string(Some(csv)) => {
                csv.split(self.delimiter).map(str::to_string).collect()
            }
            _ => Vec::new(),
        }
    }

    /// All-or-nothing: one unparsable field empties the whole result.
    pub fn split_longs(&self, csv: Option<&str>) -> Vec<i64> {
        let fields = self.split(csv);
        let parsed: std::result::Result<Vec<i64>, _> =
            fields.iter().map(|field| field.parse::<i64>()).collect();

        match parsed {
            Ok(values) => values,
            Err(e) => {
                tracing::debug!(
                    "Discarding {} CSV fields, one is not a 64-bit integer: {}",
                    fields.len(),
                    e
                );
                Vec::new()
            }
        }
    }

    pub fn join<S: AsRef<str>>(&self, array: Option<&[S]>) -> String {
        let Some(array) = array else {
            return String::new();
        };

        let mut csv = String::new();
        for (i, item) in array.iter().enumerate() {
            if i > 0 {
                csv.push(self.delimiter);
            }
            csv.push_str(item.as_ref());
        }
        csv
    }
}

pub fn split_csv_to_string_array(csv: Option<&str>) -> Vec<String> {
    CsvCodec::default().split(csv)
}

pub fn split_csv_to_long_array(csv: Option<&str>) -> Vec<i64> {
    CsvCodec::default().split_longs(csv)
}

pub fn concat_string_array_to_csv<S: AsRef<str>>(array: Option<&[S]>) -> String {
    CsvCodec::default().join(array)
}
