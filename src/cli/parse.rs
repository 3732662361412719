//! Value parsers for numeric CLI arguments.

use std::num::NonZeroU64;

use crate::histogram::MAX_GRID_SIZE;

/// Parse and validate grid size (values above 256 are clamped)
pub fn parse_size(s: &str) -> Result<u16, String> {
    let size: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid grid size", s))?;
    if size == 0 {
        return Err("Grid size must be greater than 0".to_string());
    }
    Ok(size.min(u64::from(MAX_GRID_SIZE)) as u16)
}

/// Multiplier for a byte-count suffix.
///
/// Lowercase suffixes are decimal (k = 10^3 ... p = 10^15), uppercase are
/// binary (K = 2^10 ... P = 2^50).
fn suffix_multiplier(suffix: char) -> Option<u64> {
    let m = match suffix {
        'k' => 1_000,
        'm' => 1_000_000,
        'g' => 1_000_000_000,
        't' => 1_000_000_000_000,
        'p' => 1_000_000_000_000_000,
        'K' => 1 << 10,
        'M' => 1 << 20,
        'G' => 1 << 30,
        'T' => 1 << 40,
        'P' => 1 << 50,
        _ => return None,
    };
    Some(m)
}

/// Parse a byte count such as `4096`, `64k` or `2M`.
pub fn parse_byte_count(s: &str) -> Result<NonZeroU64, String> {
    let s = s.trim();
    let (digits, multiplier) = match s.chars().last() {
        Some(c) if !c.is_ascii_digit() => {
            let m = suffix_multiplier(c).ok_or_else(|| {
                format!(
                    "Unknown size suffix '{}' in '{}'. Use one of k, K, m, M, g, G, t, T, p, P",
                    c, s
                )
            })?;
            (&s[..s.len() - c.len_utf8()], m)
        }
        _ => (s, 1),
    };

    let value: u64 = digits
        .parse()
        .map_err(|_| format!("'{}' is not a valid byte count", s))?;
    let bytes = value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Byte count '{}' is too large", s))?;

    NonZeroU64::new(bytes).ok_or_else(|| "Byte count must be greater than 0".to_string())
}
