// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html).
///
/// A [`LevelFilter::OFF`] config skips installation altogether.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already installed.
pub fn try_initialize_logging_global(
    tracing_config: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let tracing_config: TracingConfig = tracing_config.into();

    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    tracing_config.install_global()
}
