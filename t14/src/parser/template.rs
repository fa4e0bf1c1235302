use crate::command::Operand;
use crate::command::template::{Template, TemplatePart};
use crate::parser::is_identifier;

/// Scan a text line into literal, `[NAME]` and `::OP[VALUE]` parts.
pub fn parse_template(text: &str) -> Template {
    scan(text, true)
}

/// Scan for `[NAME]` tokens only; `::OP[VALUE]` stays literal.
pub fn parse_interpolation(text: &str) -> Template {
    scan(text, false)
}

fn scan(text: &str, conversions: bool) -> Template {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let token = if conversions {
            conversion_at(rest).or_else(|| variable_at(rest))
        } else {
            variable_at(rest)
        };

        match token {
            Some((part, consumed)) => {
                if !literal.is_empty() {
                    parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(part);
                rest = &rest[consumed..];
            }
            None => {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(literal));
    }
    Template { parts }
}

fn is_operator_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '>')
}

/// `::OP[VALUE]` at the start of `text`, where VALUE runs to the bracket
/// that balances the opening one.
fn conversion_at(text: &str) -> Option<(TemplatePart, usize)> {
    let body = text.strip_prefix("::")?;
    let operator_len = body.find(|c: char| !is_operator_char(c))?;
    if operator_len == 0 {
        return None;
    }
    let bracketed = &body[operator_len..];
    let bracketed_len = balanced_len(bracketed)?;
    let consumed = 2 + operator_len + bracketed_len;

    Some((
        TemplatePart::Conversion {
            operator: body[..operator_len].to_string(),
            value: Operand::parse(&bracketed[1..bracketed_len - 1]),
            raw: text[..consumed].to_string(),
        },
        consumed,
    ))
}

/// Byte length of the `[...]` group at the start of `text`, brackets included.
fn balanced_len(text: &str) -> Option<usize> {
    if !text.starts_with('[') {
        return None;
    }
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn variable_at(text: &str) -> Option<(TemplatePart, usize)> {
    let inner = text.strip_prefix('[')?;
    let end = inner.find(']')?;
    let name = &inner[..end];
    if !is_identifier(name) {
        return None;
    }
    Some((TemplatePart::Variable(name.to_string()), end + 2))
}
