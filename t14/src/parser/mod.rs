mod structural;
mod template;

pub use template::{parse_interpolation, parse_template};

use crate::command::Command;

/// Classify a single script line into a [`Command`].
///
/// Returns `None` for comments: empty or whitespace-only lines and lines
/// starting with `#`. Otherwise the recognizers are tried in a fixed
/// priority order and the first match wins; a line matching none of the
/// structural commands becomes a conversion expression or plain text.
pub fn classify(line: &str) -> Option<Command> {
    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }

    let trimmed = line.trim();
    let command = structural::terminate(trimmed)
        .or_else(|| structural::block_start(trimmed))
        .or_else(|| structural::block_end(trimmed))
        .or_else(|| structural::invoke(trimmed))
        .or_else(|| structural::assign_literal(trimmed))
        .or_else(|| structural::assign_from_variable(trimmed))
        .or_else(|| structural::conditional(trimmed))
        .or_else(|| structural::identify(trimmed))
        .unwrap_or_else(|| {
            let template = parse_template(line);
            if template.has_conversions() {
                Command::Conversion(template)
            } else {
                Command::Text(template)
            }
        });
    Some(command)
}

/// Identifiers (block and variable names) match `[0-9a-zA-Z_-]+`.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// If `text` is exactly one `[NAME]` token, return `NAME`.
pub fn variable_token(text: &str) -> Option<&str> {
    let name = text.strip_prefix('[')?.strip_suffix(']')?;
    is_identifier(name).then_some(name)
}
