use clap::Parser;

use crate::{
    bytes::{
        Base, FormatMode, FormatOptions, DEFAULT_PRECISION, DEFAULT_SEPARATOR, MAX_PRECISION,
    },
    config::{Config, Operation},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Byte counts to format, or sizes to parse with --parse. Put sizes that
    /// start with '-' but are not plain numbers (like "-1.5 KiB") after `--`
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    #[arg(name = "parse", long = "parse", short = 'p')]
    pub parse: bool,

    #[arg(name = "base", long = "base", short = 'b', default_value_t = Base::Binary)]
    pub base: Base,
    #[arg(
        name = "precision",
        long = "precision",
        alias = "prec",
        default_value_t = DEFAULT_PRECISION
    )]
    pub precision: usize,
    #[arg(
        name = "separator",
        long = "separator",
        aliases = vec!["sep"],
        default_value = DEFAULT_SEPARATOR
    )]
    pub separator: String,

    #[arg(
        name = "mode",
        long = "mode",
        short = 'm',
        conflicts_with = "standard",
        default_value_t = FormatMode::Iec
    )]
    pub mode: FormatMode,
    #[arg(name = "standard", long = "standard", alias = "std")]
    pub standard: bool,

    #[arg(name = "align", long = "align", short = 'a')]
    pub align: bool,
    #[arg(
        name = "no-errors",
        long = "no-errors",
        aliases = vec![
            "no-error",
            "no-errs",
            "no-err",
            "noerrors",
            "noerror",
            "noerrs",
            "noerr"
        ]
    )]
    pub no_errors: bool,
    #[arg(name = "verbose", long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        if self.precision > MAX_PRECISION {
            anyhow::bail!(
                "precision {} is too large (at most {} decimal places)",
                self.precision,
                MAX_PRECISION
            );
        }

        let operation = if self.parse {
            Operation::Parse
        } else {
            Operation::Format
        };

        let mode = if self.standard {
            FormatMode::Standard
        } else {
            self.mode
        };

        let options = FormatOptions::new()
            .with_base(self.base)
            .with_precision(self.precision)
            .with_separator(self.separator)
            .with_mode(mode);

        Ok(Config {
            operation,
            values: self.values,
            options,
            align: self.align,
            no_errors: self.no_errors,
            verbose: self.verbose,
        })
    }
}
