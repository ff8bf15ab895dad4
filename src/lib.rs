pub mod bytes;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod run;
pub mod utils;

pub use bytes::{format, format_with_options, parse, Base, FormatMode, FormatOptions, ParseError};
