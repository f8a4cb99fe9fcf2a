pub mod toml_config;

pub use toml_config::{CsvConfig, LoggingConfig, PasteboxConfig, TraceConfig, LOG_LEVELS};
