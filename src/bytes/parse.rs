use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

use crate::bytes::{options::BASE_BINARY, B, UNIT_TABLE};

/// Why a non-empty input was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidReason {
    /// No known suffix, and not a bare integer either.
    UnknownUnit,
    /// A suffix matched but what precedes it is not a number.
    InvalidNumber,
    /// A non-zero number that rounds to zero bytes.
    SubByte,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnit => write!(f, "unrecognized unit"),
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::SubByte => write!(f, "less than one byte"),
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: InvalidReason },
}

impl ParseError {
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::EmptyInput => None,
            Self::InvalidInput { reason, .. } => Some(*reason),
        }
    }
}

/// An uppercased multi-letter suffix and the magnitude it stands for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuffixCandidate {
    pub suffix: String,
    pub magnitude: usize,
}

/// Every multi-letter suffix, longest first, then by magnitude. A bare "B"
/// is the tail of all of them, so it is tried separately once these fail.
pub static SUFFIX_CANDIDATES: Lazy<Vec<SuffixCandidate>> = Lazy::new(|| {
    let mut candidates: Vec<SuffixCandidate> = UNIT_TABLE
        .iter()
        .enumerate()
        .skip(1)
        .flat_map(|(magnitude, entry)| {
            [entry.decimal, entry.binary]
                .into_iter()
                .map(move |suffix| SuffixCandidate {
                    suffix: suffix.to_uppercase(),
                    magnitude,
                })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.suffix
            .len()
            .cmp(&a.suffix.len())
            .then(a.magnitude.cmp(&b.magnitude))
    });
    candidates
});

// input is uppercased before matching, hence `E`
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:E[+-]?\d+)?$").expect("valid number pattern")
});

/// Parses a human-readable size such as `1.5 GiB`, `100mb` or `2048` into a
/// byte count.
///
/// Suffixes are case-insensitive. Both spellings of a unit scale by powers of
/// 1024, so `1 KB` and `1 KiB` are both 1024 bytes. A bare integer is taken
/// as a byte count as-is. The scaled value is rounded half away from zero.
///
/// Anything with a unit goes through an `f64`, so beyond 2^53 bytes the
/// result is only as exact as the float: `9007199254740993 B` comes back as
/// 9007199254740992. Values past the `i64` range saturate to `i64::MIN` or
/// `i64::MAX`, which keeps `8 EiB` (the formatting of `i64::MAX`) parseable.
pub fn parse(input: &str) -> Result<i64, ParseError> {
    let prepared = input.trim().to_uppercase();

    if prepared.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if let Ok(bytes) = prepared.parse::<i64>() {
        return Ok(bytes);
    }

    let mut reason = InvalidReason::UnknownUnit;

    for candidate in SUFFIX_CANDIDATES.iter() {
        let Some(prefix) = prepared.strip_suffix(candidate.suffix.as_str()) else {
            continue;
        };

        match parse_number(prefix) {
            Some(value) => {
                trace!(input, suffix = %candidate.suffix, value, "matched unit suffix");
                return scale(value, candidate.magnitude).map_err(|r| invalid(input, r));
            }
            None => {
                trace!(
                    input,
                    suffix = %candidate.suffix,
                    "suffix matched but prefix is not a number"
                );
                reason = InvalidReason::InvalidNumber;
            }
        }
    }

    if let Some(prefix) = prepared.strip_suffix(B) {
        match parse_number(prefix) {
            Some(value) => return scale(value, 0).map_err(|r| invalid(input, r)),
            // "1.5 XB": the letter before B is an unknown unit, not a bad number
            None if prefix.ends_with(|c: char| c.is_alphabetic()) => {}
            None => reason = InvalidReason::InvalidNumber,
        }
    }

    debug!(input, %reason, "could not parse size");
    Err(invalid(input, reason))
}

fn invalid(input: &str, reason: InvalidReason) -> ParseError {
    ParseError::InvalidInput {
        input: input.to_string(),
        reason,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if !NUMBER.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn scale(value: f64, magnitude: usize) -> Result<i64, InvalidReason> {
    let raw = (value * f64::from(BASE_BINARY).powi(magnitude as i32)).round();

    if raw == 0.0 && value != 0.0 {
        return Err(InvalidReason::SubByte);
    }

    // float to int `as` saturates at the i64 bounds
    Ok(raw as i64)
}
