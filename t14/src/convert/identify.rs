use super::Operator;

/// Try binary, then hexadecimal readings of an unknown value.
pub(super) fn report(unknown: &str) -> Vec<String> {
    let value = unknown.trim();
    if value.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![format!("Trying to figure out what {value} is ...")];

    if value.chars().all(|c| c == '0' || c == '1') {
        lines.push("It might be binary.".to_string());
        push_reading(&mut lines, Operator::BinaryToDecimal, "bin->dec", value);
        push_reading(&mut lines, Operator::BinaryToHex, "bin->hex", value);
        push_reading(&mut lines, Operator::BinaryToAscii, "bin->ascii", value);
    } else if value.chars().all(|c| c.is_ascii_hexdigit()) {
        lines.push("It might be hexadecimal.".to_string());
        push_reading(&mut lines, Operator::HexToDecimal, "hex->dec", value);
        push_reading(&mut lines, Operator::HexToAscii, "hex->ascii", value);
    } else {
        lines.push("No interpretation found.".to_string());
    }

    lines
}

fn push_reading(lines: &mut Vec<String>, operator: Operator, name: &str, value: &str) {
    let reading = operator.apply(value);
    if !reading.is_empty() {
        lines.push(format!("::{name}[{value}] = {reading}"));
    }
}
