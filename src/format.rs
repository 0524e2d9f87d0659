// Byte-count scaling and decimal trimming for the rendered labels

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

fn scale(bytes: f64) -> (f64, &'static str) {
    let mut value = bytes;
    let mut order = 0;
    // Clamp at the last unit rather than overflowing past it.
    while value >= 1024.0 && order < UNITS.len() - 1 {
        value /= 1024.0;
        order += 1;
    }
    (value, UNITS[order])
}

/// Human-readable byte count with at most one decimal: `1536` -> "1.5KB",
/// `1024` -> "1KB", `0` -> "0B".
pub fn format_bytes(bytes: f64) -> String {
    let (value, unit) = scale(bytes);
    format!("{}{}", format_decimal(value, 1), unit)
}

/// Byte count with up to two decimals, for the memory section.
pub fn format_bytes_detailed(bytes: f64) -> String {
    let (value, unit) = scale(bytes);
    format!("{}{}", format_decimal(value, 2), unit)
}

/// Fixed-precision decimal with trailing zeros (and a bare point) removed:
/// `format_decimal(42.0, 1)` -> "42", `format_decimal(75.25, 2)` -> "75.25".
pub fn format_decimal(value: f64, max_decimals: usize) -> String {
    let s = format!("{value:.max_decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
