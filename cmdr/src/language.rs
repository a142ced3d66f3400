// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The languages the front end can talk in. The core library is language neutral, so
/// this never crosses into [`colorconv_core`].
///
/// The lowercase code (`en`, `ro`, `fr`) is used everywhere: the settings file, the
/// `--language` flag, and [`Display`](std::fmt::Display).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[clap(help = "English")]
    En,
    #[clap(help = "Română")]
    Ro,
    #[clap(help = "Français")]
    Fr,
}
