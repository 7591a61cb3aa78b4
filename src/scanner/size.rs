use humansize::{FormatSizeOptions, BINARY, DECIMAL};

use crate::config::SizeUnits;

/// Format size in human-readable form with one decimal place, e.g. "4.2 kB".
pub fn format_size(bytes: u64, units: SizeUnits) -> String {
    humansize::format_size(bytes, size_options(units))
}

fn size_options(units: SizeUnits) -> FormatSizeOptions {
    let base = match units {
        SizeUnits::Decimal => DECIMAL,
        SizeUnits::Binary => BINARY,
    };
    FormatSizeOptions::from(base).decimal_places(1)
}
