use std::env;

use anyhow::{Context, Result};
use log::LevelFilter;

pub(crate) const LOG_TARGET: &str = "trait_oracle";

/// Our own messages are shown at `log_level`, everything else only from warnings up. `RUST_LOG` overrides both.
pub(super) fn init_logging(log_level: LevelFilter) -> Result<()> {
    let mut log_builder = pretty_env_logger::formatted_timed_builder();
    log_builder
        .filter(None, LevelFilter::Warn)
        .filter_module(LOG_TARGET, log_level);
    if let Ok(directives) = env::var("RUST_LOG") {
        log_builder.parse_filters(&directives);
    }

    log_builder.try_init().context("Logger creation failed")
}
