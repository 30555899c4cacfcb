//! Human-readable byte counts.
//!
//! [`ByteCountFormatter`] follows the conventions of the platform byte-count
//! formatters found on desktop systems: a configurable set of allowed units, a
//! count style that decides between 1000 and 1024 based units, and adaptive
//! precision (whole numbers for bytes and KB, one fraction digit for MB, two
//! for GB and above, trailing zeros trimmed).
//!
//! ```rust
//! use storage_sense::format::{ByteCountFormatter, ByteUnit, CountStyle};
//!
//! let formatter = ByteCountFormatter::new()
//!     .with_allowed_units(&[ByteUnit::MB, ByteUnit::GB])
//!     .with_count_style(CountStyle::File);
//!
//! assert_eq!(formatter.string_from_byte_count(1_230_000_000), "1.23 GB");
//! assert_eq!(formatter.string_from_byte_count(400_000_000), "400 MB");
//! ```


/// Counting convention used to pick the unit base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountStyle {
    /// File sizes, 1000 bytes per KB
    #[default]
    File,
    /// Memory sizes, 1024 bytes per KB
    Memory,
    /// Always 1000 bytes per KB
    Decimal,
    /// Always 1024 bytes per KB
    Binary,
}

impl CountStyle {
    /// Number of bytes in one step between adjacent units
    pub const fn base(self) -> u64 {
        match self {
            Self::File | Self::Decimal => 1000,
            Self::Memory | Self::Binary => 1024,
        }
    }
}

/// A unit a byte count may be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteUnit {
    Bytes,
    KB,
    MB,
    GB,
    TB,
}

impl ByteUnit {
    /// Every unit, smallest first
    pub const ALL: &'static [ByteUnit] = &[Self::Bytes, Self::KB, Self::MB, Self::GB, Self::TB];

    const fn exponent(self) -> u32 {
        match self {
            Self::Bytes => 0,
            Self::KB => 1,
            Self::MB => 2,
            Self::GB => 3,
            Self::TB => 4,
        }
    }

    const fn fraction_digits(self) -> usize {
        match self {
            Self::Bytes | Self::KB => 0,
            Self::MB => 1,
            Self::GB | Self::TB => 2,
        }
    }

    /// Display label, e.g. `"MB"`
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
        }
    }

    /// Size of one unit in bytes under the given count style
    pub const fn size(self, style: CountStyle) -> u64 {
        style.base().pow(self.exponent())
    }
}

/// Formats byte counts as localized-looking strings such as `"1.2 GB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCountFormatter {
    allowed_units: &'static [ByteUnit],
    count_style: CountStyle,
}

impl Default for ByteCountFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteCountFormatter {
    /// Formatter allowing every unit with the file count style
    pub const fn new() -> Self {
        Self { allowed_units: ByteUnit::ALL, count_style: CountStyle::File }
    }

    /// Restricts the units the formatter may pick. An empty slice allows every unit.
    pub const fn with_allowed_units(mut self, units: &'static [ByteUnit]) -> Self {
        self.allowed_units = if units.is_empty() { ByteUnit::ALL } else { units };
        self
    }

    /// Sets the counting convention, see [`CountStyle`]
    pub const fn with_count_style(mut self, count_style: CountStyle) -> Self {
        self.count_style = count_style;
        self
    }

    /// Units the formatter may pick from
    pub const fn allowed_units(&self) -> &'static [ByteUnit] {
        self.allowed_units
    }

    /// Counting convention in use
    pub const fn count_style(&self) -> CountStyle {
        self.count_style
    }

    /// Formats `count` bytes using the largest allowed unit that fits.
    pub fn string_from_byte_count(&self, count: i64) -> String {
        let magnitude = count.unsigned_abs();
        let sign = if count < 0 { "-" } else { "" };

        let mut units = self.allowed_units.to_vec();
        units.sort_unstable();
        units.dedup();

        let style = self.count_style;
        let mut index = units.iter().rposition(|unit| unit.size(style) <= magnitude).unwrap_or(0);

        // 999.96 MB would read "1000 MB"
        if let Some(next) = units.get(index + 1) {
            let ratio = next.size(style) as f64 / units[index].size(style) as f64;
            if round_in_unit(magnitude, units[index], style) >= ratio {
                index += 1;
            }
        }

        let unit = units[index];
        let value = round_in_unit(magnitude, unit, style);
        let number = trim_fraction(format!("{:.*}", unit.fraction_digits(), value));
        let label = if unit == ByteUnit::Bytes && magnitude == 1 { "byte" } else { unit.label() };

        format!("{sign}{number} {label}")
    }
}

fn round_in_unit(magnitude: u64, unit: ByteUnit, style: CountStyle) -> f64 {
    let scale = 10f64.powi(unit.fraction_digits() as i32);
    let value = magnitude as f64 / unit.size(style) as f64;
    (value * scale).round() / scale
}

fn trim_fraction(number: String) -> String {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        number
    }
}
