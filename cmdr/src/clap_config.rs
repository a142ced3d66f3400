// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{DEFAULT_LOG_FILE_NAME, Language, TracingConfig, WriterConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "colorconv")]
#[command(about = "🎨 Convert colors between names, hex, RGB, and HSL")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  colorconv [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    /// [None] runs [`CLICommand::Interactive`].
    #[command(subcommand)]
    pub command: Option<CLICommand>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, help = "Log app output to stderr for debugging")]
    pub log_to_stderr: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        help = "Language of the labels and messages; overrides the settings file"
    )]
    pub language: Option<Language>,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        help = "Read settings from this file instead of `<config_dir>/colorconv/settings.json`"
    )]
    pub settings: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🔎 Show each color in all four notations\n💡 Eg: `colorconv convert \"cornflower blue\" \"#6495ED\"`"
    )]
    Convert {
        #[arg(required = true, value_name = "COLOR")]
        texts: Vec<String>,

        #[arg(long, help = "Print JSON instead of labels and a swatch")]
        json: bool,
    },

    #[clap(
        about = "🌗 Rotate an HSL color by 180 degrees\n💡 Eg: `colorconv complement \"218, 79%, 66%\"`"
    )]
    Complement {
        #[arg(value_name = "HSL")]
        hsl: String,

        #[arg(long, help = "Also show the complement in all four notations")]
        convert: bool,
    },

    #[clap(about = "🎲 Print random colors in random notations\n💡 Eg: `colorconv random -c 5`")]
    Random {
        #[arg(long, short = 'c', default_value_t = 1)]
        count: usize,

        #[arg(long, help = "Also show each color in all four notations")]
        convert: bool,
    },

    #[clap(
        about = "⌨️  Convert every line typed on stdin (the default)\n💡 Commands: `:random`, `:complement`, `:quit`"
    )]
    Interactive,
}

impl GlobalOption {
    /// [None] when no logging flag is passed.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        let writer_config = [
            self.enable_logging
                .then(|| WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())),
            self.log_to_stderr.then_some(WriterConfig::Stderr),
        ]
        .into_iter()
        .flatten()
        .fold(WriterConfig::None, |acc, it| acc + it);

        (writer_config != WriterConfig::None).then(|| TracingConfig::from(writer_config))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_cli_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let it = CLIArg::try_parse_from(["colorconv"]).unwrap();
        assert!(it.command.is_none());
        assert!(!it.global_options.enable_logging);
        assert_eq2!(it.global_options.language, None);
        assert_eq2!(it.global_options.tracing_config(), None);
    }

    #[test_case(&["-l"], WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()))]
    #[test_case(&["--log-to-stderr"], WriterConfig::Stderr)]
    #[test_case(
        &["--log-to-stderr", "-l"],
        WriterConfig::StderrAndFile(DEFAULT_LOG_FILE_NAME.to_string())
    )]
    fn test_logging_flags(flags: &[&str], expected: WriterConfig) {
        let args = ["colorconv", "random"].iter().chain(flags).copied();
        let it = CLIArg::try_parse_from(args).unwrap();
        assert_eq2!(
            it.global_options.tracing_config(),
            Some(TracingConfig::from(expected))
        );
    }

    #[test]
    fn test_convert_with_global_options() {
        let it = CLIArg::try_parse_from([
            "colorconv",
            "convert",
            "red",
            "10, 20, 30",
            "--json",
            "-l",
            "--language",
            "ro",
        ])
        .unwrap();

        assert!(it.global_options.enable_logging);
        assert_eq2!(it.global_options.language, Some(Language::Ro));
        let Some(CLICommand::Convert { texts, json }) = it.command else {
            panic!("expected convert, got {:?}", it.command);
        };
        assert_eq2!(texts, vec!["red".to_string(), "10, 20, 30".to_string()]);
        assert!(json);
    }

    #[test]
    fn test_convert_requires_text() {
        assert!(CLIArg::try_parse_from(["colorconv", "convert"]).is_err());
    }

    #[test]
    fn test_random_defaults_to_one() {
        let it = CLIArg::try_parse_from(["colorconv", "random"]).unwrap();
        let Some(CLICommand::Random { count, convert }) = it.command else {
            panic!("expected random, got {:?}", it.command);
        };
        assert_eq2!(count, 1);
        assert!(!convert);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(CLIArg::try_parse_from(["colorconv", "--language", "de"]).is_err());
    }
}
