/// Parse an unsigned integer in the given radix. Surrounding whitespace is
/// ignored, as is a `0x`/`0b` prefix for hex/binary. Signs are rejected.
pub(super) fn parse(value: &str, radix: u32) -> Option<u64> {
    let digits = value.trim();
    let digits = match radix {
        16 => digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits),
        2 => digits.strip_prefix("0b").unwrap_or(digits),
        _ => digits,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn format(n: u64, radix: u32) -> String {
    match radix {
        2 => format!("{n:b}"),
        16 => format!("{n:X}"),
        _ => n.to_string(),
    }
}

pub(super) fn reformat(value: &str, from: u32, to: u32) -> String {
    parse(value, from)
        .map(|n| format(n, to))
        .unwrap_or_default()
}

/// A single number to the ASCII character with that code (0-127).
pub(super) fn to_ascii(value: &str, radix: u32) -> String {
    parse(value, radix)
        .and_then(|n| u8::try_from(n).ok())
        .filter(u8::is_ascii)
        .map(|b| char::from(b).to_string())
        .unwrap_or_default()
}

/// Fixed-width digit groups (2 hex digits or 8 bits) to ASCII text.
/// A trailing partial group is ignored.
pub(super) fn bytes_to_ascii(value: &str, radix: u32) -> String {
    let digits = value.trim();
    let width = if radix == 16 { 2 } else { 8 };
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return String::new();
    }

    let mut text = String::new();
    for group in digits.as_bytes().chunks_exact(width) {
        let byte = std::str::from_utf8(group)
            .ok()
            .and_then(|g| u8::from_str_radix(g, radix).ok());
        match byte {
            Some(b) if b.is_ascii() => text.push(char::from(b)),
            _ => return String::new(),
        }
    }
    text
}

/// ASCII text to its decimal character codes, separated by spaces.
pub(super) fn ascii_codes(value: &str) -> String {
    if !value.is_ascii() {
        return String::new();
    }
    value
        .bytes()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// ASCII text to concatenated fixed-width groups (`41` or `01000001`).
pub(super) fn ascii_to_bytes(value: &str, radix: u32) -> String {
    if !value.is_ascii() {
        return String::new();
    }
    value
        .bytes()
        .map(|b| match radix {
            16 => format!("{b:02X}"),
            _ => format!("{b:08b}"),
        })
        .collect()
}
