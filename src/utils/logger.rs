use crate::config::{LoggingConfig, LOG_LEVELS};
use crate::utils::error::{PasteboxError, Result};
use crate::utils::validation::validate_one_of;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

fn already_installed(e: impl std::fmt::Display) -> PasteboxError {
    PasteboxError::ConfigError {
        message: format!("Failed to install tracing subscriber: {}", e),
    }
}

pub fn init_logger(verbose: bool) -> Result<()> {
    let filter = if verbose {
        default_filter("pastebox=debug,info")
    } else {
        default_filter("pastebox=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(already_installed)
}

pub fn init_json_logger() -> Result<()> {
    let filter = default_filter("pastebox=info");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .map_err(already_installed)
}

/// 依設定檔的 `[logging]` 區段初始化日誌
pub fn init_logger_from_config(config: &LoggingConfig) -> Result<()> {
    validate_one_of("logging.level", config.level(), &LOG_LEVELS)?;

    let directive = format!("pastebox={}", config.level().to_ascii_lowercase());
    let filter = default_filter(&directive);
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json.unwrap_or(false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
            .map_err(already_installed)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
            .map_err(already_installed)
    }
}
