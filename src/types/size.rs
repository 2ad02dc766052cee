use crate::types::error::S3cliError;

pub const KB: u64 = 1024;
pub const MB: u64 = KB * KB;
pub const GB: u64 = MB * KB;

// Longer suffixes first, so that "B" does not match inside "KB".
const UNITS: [(&str, u64); 4] = [("GB", GB), ("MB", MB), ("KB", KB), ("B", 1)];

/// Parses a size such as `10MB`, `512kb` or `5` (bytes) into a byte count.
///
/// Units are base-1024. A fractional number is accepted and truncated to whole bytes,
/// so that strings produced by [`humanize_size`] can be read back.
pub fn parse_size(input: &str) -> Result<u64, S3cliError> {
    let upper = input.trim().to_uppercase();

    let (number, unit) = UNITS
        .iter()
        .find_map(|(suffix, unit)| upper.strip_suffix(suffix).map(|number| (number, *unit)))
        .unwrap_or((upper.as_str(), 1));
    let number = number.trim();
    if !is_plain_decimal(number) {
        return Err(S3cliError::Parse(input.to_string()));
    }

    if let Ok(value) = number.parse::<u64>() {
        return value
            .checked_mul(unit)
            .ok_or_else(|| S3cliError::Parse(input.to_string()));
    }

    let value = number
        .parse::<f64>()
        .map_err(|_| S3cliError::Parse(input.to_string()))?;

    let bytes = value * unit as f64;
    if (u64::MAX as f64) <= bytes {
        return Err(S3cliError::Parse(input.to_string()));
    }

    Ok(bytes as u64)
}

/// `digits` or `digits.digits`, without sign or exponent.
fn is_plain_decimal(number: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match number.split_once('.') {
        Some((integer, fraction)) => all_digits(integer) && all_digits(fraction),
        None => all_digits(number),
    }
}

/// Formats a byte count with the largest unit the value strictly exceeds, e.g. `1.50MB`.
pub fn humanize_size(size: u64) -> String {
    if size > GB {
        return format!("{:.2}GB", size as f64 / GB as f64);
    }

    if size > MB {
        return format!("{:.2}MB", size as f64 / MB as f64);
    }

    if size > KB {
        return format!("{:.2}KB", size as f64 / KB as f64);
    }

    format!("{:.2}B", size as f64)
}
