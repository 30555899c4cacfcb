use crate::format::{ByteUnit, CountStyle};

/// Units used when displaying storage figures
pub const STORAGE_UNITS: &[ByteUnit] = &[ByteUnit::MB, ByteUnit::GB];

/// Count style used when displaying storage figures
pub const STORAGE_COUNT_STYLE: CountStyle = CountStyle::File;

/// Separator between used and total space in the status description
pub const USED_OUT_OF: &str = " used out of ";

/// Fraction digits of the used percentage in the status description
pub const PERCENT_DIGITS: usize = 2;
