// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # colorconv_core
//!
//! Takes a color typed by a human in one of four notations, figures out which notation
//! it is, and re-expresses it in all four:
//!
//! | Notation     | Example input                                   | Canonical form      |
//! | :----------- | :---------------------------------------------- | :------------------ |
//! | Literal name | `Cornflower Blue`, `cornflowerblue`             | `Cornflower Blue`   |
//! | Hex          | `6495ed`, `#6495ED`                             | `#6495ED`           |
//! | RGB          | `100, 149, 237`, `100 149 237`, `100,149,237`   | `100, 149, 237`     |
//! | HSL          | `218, 79%, 66%`, `218 0.79 0.66`                | `218, 79%, 66%`     |
//!
//! The pipeline is:
//!
//! ```text
//! raw text ──trim──▶ detect() ──DetectedFormat──▶ convert_detected() ──▶ ConvertedColor
//!                       │
//!                       └──▶ ColorError (NumericParse | InvalidColor)
//! ```
//!
//! - [`detect()`] runs an ordered list of rules, first match wins. See
//!   [`mod@detect`].
//! - [`convert_detected()`] echoes the exact numbers the user typed for their own
//!   notation, and derives the other three.
//! - [`complement()`] rotates a canonical HSL string by 180 degrees.
//! - [`sample()`] produces random, syntactically varied, valid inputs.
//!
//! # Example
//!
//! ```
//! use colorconv_core::convert;
//!
//! let it = convert("  100, 149, 237 ").unwrap();
//! assert_eq!(it.name.as_deref(), Some("Cornflower Blue"));
//! assert_eq!(it.hex, "#6495ED");
//! assert_eq!(it.rgb, "100, 149, 237");
//! assert_eq!(it.hsl, "218, 79%, 66%");
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod color_value;
pub mod complement;
pub mod convert;
pub mod decl_macros;
pub mod detect;
pub mod error;
pub mod known_names;
pub mod sample;
pub mod sizes;

// Re-export.
pub use color_value::*;
pub use complement::*;
pub use convert::*;
pub use detect::*;
pub use error::*;
pub use known_names::{KnownColorName, format_display_name, lookup_name, lookup_rgb};
pub use sample::*;
pub use sizes::*;
