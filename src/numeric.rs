//! Best-effort integer scanning.
//!
//! Configuration values are converted the way a C `strtol` call converts
//! them: leading whitespace is skipped, an optional sign and (for base 16)
//! an optional `0x` prefix are accepted, and digits are consumed until the
//! first character that is not a digit of the base. Text without any
//! leading digits converts to zero. Nothing here ever fails.
//!
//! The FIR parser reuses the same scanner for its `sscanf`-style fields,
//! where it also needs to know whether anything was matched at all.

/// Radix used to interpret a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Decimal digits only.
    Dec,
    /// Hexadecimal digits, optional `0x`/`0X` prefix.
    Hex,
    /// Detect from the prefix: `0x` is hex, a leading `0` is octal,
    /// anything else is decimal.
    Auto,
}

/// Result of scanning one integer from the front of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    /// Converted value, clamped to the `i64` range.
    pub value: i64,
    /// Bytes consumed, including leading whitespace. Zero means no digits.
    pub consumed: usize,
}

/// Scans a signed integer, saturating at the `i64` limits on overflow.
pub fn scan_long(text: &str, base: Base) -> Scanned {
    let bytes = text.as_bytes();
    let mut pos = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let has_hex_prefix = bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x') | Some(b'X'))
        && bytes.get(pos + 2).is_some_and(|b| b.is_ascii_hexdigit());

    let radix = match base {
        Base::Hex => {
            if has_hex_prefix {
                pos += 2;
            }
            16
        }
        Base::Auto if has_hex_prefix => {
            pos += 2;
            16
        }
        Base::Auto if bytes.get(pos) == Some(&b'0') => 8,
        Base::Auto | Base::Dec => 10,
    };

    let digits_start = pos;
    // Accumulate as a negative magnitude so that i64::MIN is reachable.
    let mut acc: i64 = 0;
    let mut overflow = false;
    while let Some(digit) = bytes.get(pos).and_then(|b| (*b as char).to_digit(radix)) {
        if !overflow {
            match acc
                .checked_mul(radix as i64)
                .and_then(|v| v.checked_sub(digit as i64))
            {
                Some(v) => acc = v,
                None => overflow = true,
            }
        }
        pos += 1;
    }

    if pos == digits_start {
        return Scanned {
            value: 0,
            consumed: 0,
        };
    }

    let value = match (overflow, negative) {
        (true, true) => i64::MIN,
        (true, false) => i64::MAX,
        (false, true) => acc,
        (false, false) => acc.checked_neg().unwrap_or(i64::MAX),
    };

    Scanned {
        value,
        consumed: pos,
    }
}

/// `strtol` equivalent: the scanned value, or zero when nothing matched.
pub fn parse_long(text: &str, base: Base) -> i64 {
    scan_long(text, base).value
}

/// Scans an unsigned 32-bit field the way `%u` does: the text is read as a
/// signed integer and wrapped modulo 2^32, so `-1` becomes `u32::MAX`.
pub fn scan_u32(text: &str) -> Option<(u32, usize)> {
    let scanned = scan_long(text, Base::Dec);
    (scanned.consumed > 0).then_some((scanned.value as u32, scanned.consumed))
}

/// Scans a signed field the way `%i` does (auto-detected base).
pub fn scan_auto(text: &str) -> Option<(i64, usize)> {
    let scanned = scan_long(text, Base::Auto);
    (scanned.consumed > 0).then_some((scanned.value, scanned.consumed))
}
