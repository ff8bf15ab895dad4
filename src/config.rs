use std::ffi::OsString;

use anyhow::{anyhow, Context};
use clap::Parser;

use crate::{
    bytes::{format_with_options, parse, FormatOptions},
    cli::Args,
};

pub struct Config {
    pub operation: Operation,
    pub values: Vec<String>,
    pub options: FormatOptions,
    pub align: bool,
    pub no_errors: bool,
    pub verbose: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(itr)
            .context("invalid command line arguments")?
            .try_into()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Byte count in, human-readable size out.
    Format,
    /// Human-readable size in, byte count out.
    Parse,
}

impl Operation {
    pub fn apply(&self, value: &str, options: &FormatOptions) -> anyhow::Result<String> {
        match self {
            Self::Format => {
                let bytes: i64 = value
                    .trim()
                    .parse()
                    .map_err(|err| anyhow!("'{}' is not a byte count: {}", value, err))?;
                Ok(format_with_options(bytes, options))
            }
            Self::Parse => Ok(parse(value)?.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::{Base, FormatMode};

    #[test]
    fn defaults() {
        let config = Config::parse(["filesize", "1024"]).unwrap();
        assert_eq!(config.operation, Operation::Format);
        assert_eq!(config.values, vec!["1024"]);
        assert_eq!(config.options, FormatOptions::default());
        assert!(!config.align);
        assert!(!config.no_errors);
        assert!(!config.verbose);
    }

    #[test]
    fn options_are_carried_over() {
        let config = Config::parse([
            "filesize",
            "--base",
            "1000",
            "--precision",
            "3",
            "--separator",
            "",
            "--standard",
            "--align",
            "1",
            "2",
        ])
        .unwrap();

        assert_eq!(config.options.base, Base::Decimal);
        assert_eq!(config.options.precision, 3);
        assert_eq!(config.options.separator, "");
        assert_eq!(config.options.mode, FormatMode::Standard);
        assert!(config.align);
        assert_eq!(config.values, vec!["1", "2"]);
    }

    #[test]
    fn unknown_base_falls_back_to_binary() {
        let config = Config::parse(["filesize", "--base", "0", "1"]).unwrap();
        assert_eq!(config.options.base, Base::Binary);
    }

    #[test]
    fn negative_byte_counts_are_values() {
        let config = Config::parse(["filesize", "-1024", "2048"]).unwrap();
        assert_eq!(config.operation, Operation::Format);
        assert_eq!(config.values, vec!["-1024", "2048"]);
    }

    #[test]
    fn negative_sizes_after_double_dash() {
        let config = Config::parse(["filesize", "--parse", "--", "-1.5 KiB"]).unwrap();
        assert_eq!(config.operation, Operation::Parse);
        assert_eq!(config.values, vec!["-1.5 KiB"]);
    }

    #[test]
    fn flags_after_values_are_still_flags() {
        let config = Config::parse(["filesize", "1024", "--align"]).unwrap();
        assert_eq!(config.values, vec!["1024"]);
        assert!(config.align);

        let config = Config::parse(["filesize", "1 KiB", "-p"]).unwrap();
        assert_eq!(config.values, vec!["1 KiB"]);
        assert_eq!(config.operation, Operation::Parse);

        let config = Config::parse(["filesize", "-1024", "--precision", "2", "1536"]).unwrap();
        assert_eq!(config.values, vec!["-1024", "1536"]);
        assert_eq!(config.options.precision, 2);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Config::parse(["filesize"]).is_err());
        assert!(Config::parse(["filesize", "--mode", "metric", "1"]).is_err());
        assert!(Config::parse(["filesize", "--mode", "iec", "--standard", "1"]).is_err());
        assert!(Config::parse(["filesize", "--precision", "40", "1"]).is_err());
    }

    #[test]
    fn apply() {
        let options = FormatOptions::default();
        assert_eq!(Operation::Format.apply("1536", &options).unwrap(), "1.5 KiB");
        assert_eq!(Operation::Format.apply(" -1024 ", &options).unwrap(), "-1 KiB");
        assert_eq!(Operation::Parse.apply("1.5 KiB", &options).unwrap(), "1536");
        assert!(Operation::Format.apply("1.5 KiB", &options).is_err());
        assert!(Operation::Parse.apply("1.5 XB", &options).is_err());
    }
}
