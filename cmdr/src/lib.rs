// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # colorconv
//!
//! Terminal front end for [`colorconv_core`]. Type a color as a name, a hex triplet, an
//! RGB triple, or an HSL triple, and see it in all four notations, w/ a truecolor
//! swatch.
//!
//! ```text
//! $ colorconv convert "cornflower blue" 6495ed
//! Name: Cornflower Blue
//! Hex:  #6495ED
//! RGB:  100, 149, 237
//! HSL:  218, 79%, 66%
//! ```
//!
//! This crate owns everything the core library doesn't care about:
//! - [`clap_config`]: the command line interface.
//! - [`settings`] and [`language`]: which language to talk to the user in, loaded from
//!   `<config_dir>/colorconv/settings.json` and overridden by `--language`.
//! - [`ui_str`]: every user facing string, in English, Romanian, and French.
//! - [`app`]: the command handlers and the interactive loop.
//! - [`log_support`]: [`tracing`] subscriber set up, enabled by `--enable-logging`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod app;
pub mod clap_config;
pub mod language;
pub mod log_support;
pub mod settings;
pub mod ui_str;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use colorconv_core::{assert_eq2, inline_string, ok};
pub use language::*;
pub use log_support::*;
pub use settings::*;
pub use ui_str::*;
