use std::{fmt, str::FromStr};

use anyhow::anyhow;

pub const BASE_BINARY: u32 = 1024;
pub const BASE_DECIMAL: u32 = 1000;

pub const DEFAULT_PRECISION: usize = 1;
/// More places than an f64 can meaningfully show. Larger precisions are clamped.
pub const MAX_PRECISION: usize = 17;
pub const DEFAULT_SEPARATOR: &str = " ";

/// Numeric base used to scale a byte count.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Base {
    /// Powers of 1024 (KiB, MiB, ...).
    #[default]
    Binary,
    /// Powers of 1000 (KB, MB, ...).
    Decimal,
}

impl Base {
    pub fn value(&self) -> u32 {
        match self {
            Self::Binary => BASE_BINARY,
            Self::Decimal => BASE_DECIMAL,
        }
    }
}

/// Anything other than 1000 falls back to the binary base, including 0.
impl From<u32> for Base {
    fn from(value: u32) -> Self {
        match value {
            BASE_DECIMAL => Self::Decimal,
            _ => Self::Binary,
        }
    }
}

impl FromStr for Base {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("binary") || s.eq_ignore_ascii_case("bin") {
            Ok(Self::Binary)
        } else if s.eq_ignore_ascii_case("decimal") || s.eq_ignore_ascii_case("si") {
            Ok(Self::Decimal)
        } else if let Ok(n) = s.parse::<u32>() {
            Ok(Self::from(n))
        } else {
            Err(anyhow!("Invalid value for Base: {}", s))
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Which suffix spelling the formatter emits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FormatMode {
    /// Decimal suffixes (KB, MB, ...) whatever the base, like Windows Explorer.
    Standard,
    /// Binary suffixes (KiB, MiB, ...) for base 1024, decimal ones for base 1000.
    #[default]
    Iec,
}

impl FromStr for FormatMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("standard") || s.eq_ignore_ascii_case("std") {
            Ok(Self::Standard)
        } else if s.eq_ignore_ascii_case("iec") {
            Ok(Self::Iec)
        } else {
            Err(anyhow!("Invalid value for FormatMode: {}", s))
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Iec => write!(f, "IEC"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatOptions {
    pub base: Base,
    /// Decimal places shown for scaled values, at most `MAX_PRECISION`.
    pub precision: usize,
    /// Placed between the number and the suffix. May be empty.
    pub separator: String,
    pub mode: FormatMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            base: Base::default(),
            precision: DEFAULT_PRECISION,
            separator: DEFAULT_SEPARATOR.to_string(),
            mode: FormatMode::default(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<Base>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_mode(mut self, mode: FormatMode) -> Self {
        self.mode = mode;
        self
    }
}
