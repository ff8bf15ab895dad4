use tracing::trace;

use crate::bytes::{
    options::{Base, FormatMode, FormatOptions, MAX_PRECISION},
    B, MAX_MAGNITUDE, UNIT_TABLE,
};

/// Formats `bytes` with the default options: base 1024, one decimal place,
/// a single space before the suffix, IEC suffixes.
pub fn format(bytes: i64) -> String {
    format_with_options(bytes, &FormatOptions::default())
}

/// Formats `bytes` as a human-readable size. Never fails.
///
/// The value is divided by the largest power of the base that does not
/// exceed it (capped at exa), rounded to `precision` places, and rendered
/// without a fractional part when the rounded value is whole.
pub fn format_with_options(bytes: i64, opts: &FormatOptions) -> String {
    if bytes == 0 {
        return format!("0{}{}", opts.separator, B);
    }

    let magnitude = magnitude_of(bytes, opts.base);
    let scale = f64::from(opts.base.value()).powi(magnitude as i32);
    // divide the signed value so that the sign carries through
    let scaled = bytes as f64 / scale;

    let number = to_fixed(scaled, opts.precision.min(MAX_PRECISION));
    let unit = suffix_for(magnitude, opts.mode, opts.base);

    trace!(bytes, magnitude, unit, "formatted byte count");

    format!("{}{}{}", number, opts.separator, unit)
}

/// Index into the unit table for `bytes`: floor(log_base |bytes|), clamped
/// to the table.
pub fn magnitude_of(bytes: i64, base: Base) -> usize {
    let value = bytes.unsigned_abs();
    let base = u64::from(base.value());

    let mut magnitude = 0;
    let mut threshold = base;

    while magnitude < MAX_MAGNITUDE && value >= threshold {
        magnitude += 1;
        threshold = threshold.saturating_mul(base);
    }

    magnitude
}

pub fn suffix_for(magnitude: usize, mode: FormatMode, base: Base) -> &'static str {
    let entry = &UNIT_TABLE[magnitude.min(MAX_MAGNITUDE)];
    match (mode, base) {
        // binary suffixes only make sense for a binary base
        (FormatMode::Iec, Base::Binary) => entry.binary,
        _ => entry.decimal,
    }
}

fn to_fixed(value: f64, precision: usize) -> String {
    let rendered = format!("{:.*}", precision, value);

    match rendered.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole.to_string(),
        _ => rendered,
    }
}
