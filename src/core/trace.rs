//! Text rendering of error chains.
//!
//! An error's trace is its message followed by one `Caused by:` line for
//! every error in its `source()` chain. When the error has a cause, the
//! cause's own trace is appended after a caller-supplied separator.

use crate::config::TraceConfig;
use crate::utils::error::{PasteboxError, Result};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

pub const DEFAULT_SEPARATOR: &str = "\n";

pub struct TraceReport<'a> {
    error: &'a (dyn Error + 'static),
    separator: &'a str,
    backtrace: Option<&'a Backtrace>,
}

impl<'a> TraceReport<'a> {
    pub fn new(error: &'a (dyn Error + 'static), separator: &'a str) -> Self {
        Self {
            error,
            separator,
            backtrace: None,
        }
    }

    pub fn with_backtrace(mut self, backtrace: &'a Backtrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

fn write_chain(f: &mut fmt::Formatter<'_>, error: &(dyn Error + 'static)) -> fmt::Result {
    writeln!(f, "{}", error)?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(f, "Caused by: {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

impl fmt::Display for TraceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.error)?;

        if let Some(backtrace) = self.backtrace {
            if backtrace.status() == BacktraceStatus::Captured {
                writeln!(f, "Stack backtrace:")?;
                writeln!(f, "{}", backtrace)?;
            }
        }

        if let Some(cause) = self.error.source() {
            f.write_str(self.separator)?;
            write_chain(f, cause)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFormatter {
    separator: String,
    include_backtrace: bool,
}

impl Default for TraceFormatter {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            include_backtrace: false,
        }
    }
}

impl TraceFormatter {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            include_backtrace: false,
        }
    }

    pub fn from_config(config: &TraceConfig) -> Result<Self> {
        let separator = match &config.separator {
            Some(separator) if separator.is_empty() => {
                return Err(PasteboxError::ConfigValidationError {
                    field: "trace.separator".to_string(),
                    message: "Separator cannot be empty; omit it to use the default".to_string(),
                })
            }
            Some(separator) => separator.clone(),
            None => DEFAULT_SEPARATOR.to_string(),
        };

        Ok(Self {
            separator,
            include_backtrace: config.include_backtrace.unwrap_or(false),
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn format(&self, error: &(dyn Error + 'static)) -> String {
        TraceReport::new(error, &self.separator).to_string()
    }

    pub fn format_anyhow(&self, error: &anyhow::Error) -> String {
        let root: &(dyn Error + 'static) = error.as_ref();
        let report = TraceReport::new(root, &self.separator);
        if self.include_backtrace {
            report.with_backtrace(error.backtrace()).to_string()
        } else {
            report.to_string()
        }
    }
}

pub fn stack_trace_as_string(error: &(dyn Error + 'static), separator: &str) -> String {
    TraceReport::new(error, separator).to_string()
}

/// Like [`stack_trace_as_string`], with the captured backtrace (if any)
/// rendered after the error's own chain.
pub fn anyhow_stack_trace_as_string(error: &anyhow::Error, separator: &str) -> String {
    let root: &(dyn Error + 'static) = error.as_ref();
    TraceReport::new(root, separator)
        .with_backtrace(error.backtrace())
        .to_string()
}
