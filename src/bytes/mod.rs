pub mod format;
pub mod options;
pub mod parse;

pub use format::{format, format_with_options};
pub use options::{
    Base, FormatMode, FormatOptions, BASE_BINARY, BASE_DECIMAL, DEFAULT_PRECISION,
    DEFAULT_SEPARATOR, MAX_PRECISION,
};
pub use parse::{parse, InvalidReason, ParseError};

pub const B: &str = "B";

pub const KB: &str = "KB";
pub const MB: &str = "MB";
pub const GB: &str = "GB";
pub const TB: &str = "TB";
pub const PB: &str = "PB";
pub const EB: &str = "EB";

pub const KIB: &str = "KiB";
pub const MIB: &str = "MiB";
pub const GIB: &str = "GiB";
pub const TIB: &str = "TiB";
pub const PIB: &str = "PiB";
pub const EIB: &str = "EiB";

/// Highest magnitude the unit table knows about (exa).
pub const MAX_MAGNITUDE: usize = 6;

/// One rung of the magnitude ladder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnitEntry {
    pub decimal: &'static str,
    pub binary: &'static str,
}

/// Suffixes indexed by magnitude, i.e. by the power of the base they stand for.
pub const UNIT_TABLE: [UnitEntry; MAX_MAGNITUDE + 1] = [
    UnitEntry { decimal: B, binary: B },
    UnitEntry { decimal: KB, binary: KIB },
    UnitEntry { decimal: MB, binary: MIB },
    UnitEntry { decimal: GB, binary: GIB },
    UnitEntry { decimal: TB, binary: TIB },
    UnitEntry { decimal: PB, binary: PIB },
    UnitEntry { decimal: EB, binary: EIB },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_suffix_is_decimal_suffix_with_an_i() {
        assert_eq!(UNIT_TABLE[0].decimal, UNIT_TABLE[0].binary);

        for entry in &UNIT_TABLE[1..] {
            let (prefix, rest) = entry.decimal.split_at(1);
            assert_eq!(entry.binary, format!("{prefix}i{rest}"));
        }
    }

    #[test]
    fn table_covers_seven_magnitudes() {
        assert_eq!(UNIT_TABLE.len(), 7);
        assert_eq!(UNIT_TABLE[MAX_MAGNITUDE].binary, EIB);
    }
}
