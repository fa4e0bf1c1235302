use super::numeric;

const NUMERALS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

const MAX: u64 = 3999;

fn to_roman(mut n: u64) -> Option<String> {
    if !(1..=MAX).contains(&n) {
        return None;
    }
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    Some(out)
}

pub(super) fn encode(value: &str) -> String {
    numeric::parse(value, 10)
        .and_then(to_roman)
        .unwrap_or_default()
}

/// Only canonical numerals are accepted: `IIII` and `VX` are rejected.
pub(super) fn decode(value: &str) -> String {
    let numeral = value.trim().to_ascii_uppercase();
    let mut rest = numeral.as_str();
    let mut total = 0u64;
    for (value, symbol) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += value;
            rest = tail;
        }
    }

    if !rest.is_empty() || to_roman(total).as_deref() != Some(numeral.as_str()) {
        return String::new();
    }
    total.to_string()
}
