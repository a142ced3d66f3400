// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The command handlers. Each one writes to any [`Write`] (and the interactive loop
//! reads from any [`BufRead`]) so they can be driven by tests w/out a terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use colorconv_core::{ColorError, ConvertedColor, InlineString, RgbTriple, complement,
                     convert_detected, detect, sample};
use crossterm::style::{Color, Stylize};
use miette::IntoDiagnostic;

use crate::{CLICommand, EMPTY_CONVERSION, Label, UiStrings, inline_string};

/// Printed w/ the color as its background.
const SWATCH: &str = "                ";

/// [`OutputMode::Ansi`] adds bold labels, red errors, and a truecolor swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Ansi,
    Plain,
}

impl OutputMode {
    /// [`OutputMode::Ansi`] only when stdout is a terminal, so piped output stays clean.
    #[must_use]
    pub fn detect() -> Self {
        if io::stdout().is_terminal() {
            OutputMode::Ansi
        } else {
            OutputMode::Plain
        }
    }
}

/// A line typed in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveCommand<'a> {
    Quit,
    Random,
    Complement,
    Empty,
    Convert(&'a str),
}

impl<'a> From<&'a str> for InteractiveCommand<'a> {
    fn from(line: &'a str) -> Self {
        match line.trim() {
            ":quit" | ":q" => InteractiveCommand::Quit,
            ":random" => InteractiveCommand::Random,
            ":complement" => InteractiveCommand::Complement,
            "" => InteractiveCommand::Empty,
            text => InteractiveCommand::Convert(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct App {
    pub ui: UiStrings,
    pub output_mode: OutputMode,
}

impl App {
    #[must_use]
    pub fn new(ui: impl Into<UiStrings>, output_mode: OutputMode) -> Self {
        Self {
            ui: ui.into(),
            output_mode,
        }
    }

    /// Bad color input is reported to the user in `out` and is not an error here.
    ///
    /// # Errors
    ///
    /// If `input` can't be read or `out` can't be written to.
    pub fn run_command(
        &self,
        command: CLICommand,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> miette::Result<()> {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Run command", command = ?command, app = ?self);

        let result = match command {
            CLICommand::Convert { texts, json } => self.run_convert(&texts, json, out),
            CLICommand::Complement { hsl, convert } => {
                self.run_complement(&hsl, convert, out)
            }
            CLICommand::Random { count, convert } => self.run_random(count, convert, out),
            CLICommand::Interactive => self.run_interactive(input, out),
        };
        result.into_diagnostic()
    }

    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn run_convert(
        &self,
        texts: &[String],
        json: bool,
        out: &mut impl Write,
    ) -> io::Result<()> {
        for (index, text) in texts.iter().enumerate() {
            if json {
                self.write_json(out, text)?;
                continue;
            }
            if index > 0 {
                writeln!(out)?;
            }
            self.write_convert_result(out, text)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn run_complement(
        &self,
        hsl: &str,
        convert: bool,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let Some(complemented) = self.write_complement_result(out, hsl)? else {
            return Ok(());
        };
        if convert {
            self.write_convert_result(out, &complemented)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// If `out` can't be written to.
    pub fn run_random(
        &self,
        count: usize,
        convert: bool,
        out: &mut impl Write,
    ) -> io::Result<()> {
        for index in 0..count {
            if convert && index > 0 {
                writeln!(out)?;
            }
            let it = sample();
            writeln!(out, "{it}")?;
            if convert {
                self.write_convert_result(out, &it)?;
            }
        }
        Ok(())
    }

    /// Converts every line of `input` until `:quit` or the end of `input`. The last
    /// successful conversion is what `:complement` works on.
    ///
    /// # Errors
    ///
    /// If `input` can't be read or `out` can't be written to.
    pub fn run_interactive(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.ui.prompt())?;

        let mut last_hsl: Option<InlineString> = None;
        let mut line = String::new();

        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let converted = match InteractiveCommand::from(line.as_str()) {
                InteractiveCommand::Quit => break,
                InteractiveCommand::Empty => {
                    writeln!(out, "{EMPTY_CONVERSION}")?;
                    None
                }
                InteractiveCommand::Random => {
                    let it = sample();
                    writeln!(out, "{it}")?;
                    self.write_convert_result(out, &it)?
                }
                InteractiveCommand::Complement => match &last_hsl {
                    Some(hsl) => match self.write_complement_result(out, hsl)? {
                        Some(complemented) => {
                            self.write_convert_result(out, &complemented)?
                        }
                        None => None,
                    },
                    None => {
                        writeln!(out, "{}", self.ui.nothing_to_complement())?;
                        None
                    }
                },
                InteractiveCommand::Convert(text) => self.write_convert_result(out, text)?,
            };

            if let Some(converted) = converted {
                last_hsl = Some(converted.hsl);
            }
        }

        Ok(())
    }

    /// Writes the four notations (or the error), and returns the conversion if there is
    /// one.
    fn write_convert_result(
        &self,
        out: &mut impl Write,
        text: &str,
    ) -> io::Result<Option<ConvertedColor>> {
        match detect(text.trim()) {
            Ok(detected) => {
                let converted = convert_detected(&detected);
                self.write_conversion(out, &converted, detected.rgb())?;
                Ok(Some(converted))
            }
            Err(error) => {
                self.write_error(out, &error)?;
                Ok(None)
            }
        }
    }

    fn write_complement_result(
        &self,
        out: &mut impl Write,
        hsl: &str,
    ) -> io::Result<Option<InlineString>> {
        match complement(hsl.trim()) {
            Ok(complemented) => {
                self.write_row(out, Label::Complement, &complemented, 0)?;
                Ok(Some(complemented))
            }
            Err(error) => {
                self.write_error(out, &error)?;
                Ok(None)
            }
        }
    }

    fn write_conversion(
        &self,
        out: &mut impl Write,
        converted: &ConvertedColor,
        rgb: RgbTriple,
    ) -> io::Result<()> {
        let rows = [
            (
                Label::Name,
                converted.name.as_deref().unwrap_or(self.ui.no_name()),
            ),
            (Label::Hex, converted.hex.as_str()),
            (Label::Rgb, converted.rgb.as_str()),
            (Label::Hsl, converted.hsl.as_str()),
        ];

        let width = rows
            .iter()
            .map(|(label, _)| self.ui.label(*label).chars().count())
            .max()
            .unwrap_or_default();

        for (label, value) in rows {
            self.write_row(out, label, value, width)?;
        }

        if self.output_mode == OutputMode::Ansi {
            let RgbTriple { red, green, blue } = rgb;
            let color = Color::Rgb {
                r: red,
                g: green,
                b: blue,
            };
            writeln!(out, "{}", SWATCH.on(color))?;
        }

        Ok(())
    }

    /// `width` is the widest label, so values line up.
    fn write_row(
        &self,
        out: &mut impl Write,
        label: Label,
        value: &str,
        width: usize,
    ) -> io::Result<()> {
        let label = inline_string!("{}:", self.ui.label(label));
        let padded = inline_string!("{label:<width$}", width = width + 1);
        match self.output_mode {
            OutputMode::Ansi => writeln!(out, "{} {value}", padded.as_str().bold()),
            OutputMode::Plain => writeln!(out, "{padded} {value}"),
        }
    }

    fn write_error(&self, out: &mut impl Write, error: &ColorError) -> io::Result<()> {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Conversion failed", error = ?error);

        let message = self.ui.error_message(error);
        match self.output_mode {
            OutputMode::Ansi => writeln!(out, "{}", message.as_str().red()),
            OutputMode::Plain => writeln!(out, "{message}"),
        }
    }

    /// One JSON object per line: the [`ConvertedColor`], or `{"input", "error"}`.
    fn write_json(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        match colorconv_core::convert(text) {
            Ok(converted) => serde_json::to_writer(&mut *out, &converted)?,
            Err(error) => {
                let it = serde_json::json!({
                    "input": text,
                    "error": self.ui.error_message(&error).as_str(),
                });
                serde_json::to_writer(&mut *out, &it)?;
            }
        }
        writeln!(out)
    }
}
