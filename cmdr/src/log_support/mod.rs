// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
