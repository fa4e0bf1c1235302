use crate::command::condition::{Comparison, Conditional};
use crate::command::{Command, Operand};
use crate::parser::{is_identifier, variable_token};

// ---------------------------------------------------------------------------
// Whole-line command recognizers. Each receives the trimmed line.
// ---------------------------------------------------------------------------

pub(super) fn terminate(line: &str) -> Option<Command> {
    matches!(line, "::exit" | "::quit").then_some(Command::Terminate)
}

pub(super) fn block_start(line: &str) -> Option<Command> {
    let name = variable_token(line.strip_prefix("::start")?)?;
    Some(Command::BlockStart(name.to_string()))
}

pub(super) fn block_end(line: &str) -> Option<Command> {
    (line == "::end").then_some(Command::BlockEnd)
}

pub(super) fn invoke(line: &str) -> Option<Command> {
    let name = variable_token(line.strip_prefix("::run")?)?;
    Some(Command::Invoke(name.to_string()))
}

pub(super) fn assign_literal(line: &str) -> Option<Command> {
    let (variable, value) = set_fields(line)?;
    // `::set [a] = [b]` is always a copy, never the literal text "[b]".
    if value.is_empty() || variable_token(value).is_some() {
        return None;
    }
    Some(Command::Assign {
        variable: variable.to_string(),
        value: value.to_string(),
    })
}

pub(super) fn assign_from_variable(line: &str) -> Option<Command> {
    let (target, value) = set_fields(line)?;
    let source = variable_token(value)?;
    Some(Command::Copy {
        target: target.to_string(),
        source: source.to_string(),
    })
}

pub(super) fn conditional(line: &str) -> Option<Command> {
    let rest = line.strip_prefix("::if [")?;
    let (expression, rest) = rest.split_once("]->[")?;
    let (then_block, rest) = rest.split_once(']')?;
    if !is_identifier(then_block) {
        return None;
    }

    let rest = rest.trim();
    let else_block = if rest.is_empty() {
        None
    } else {
        let name = variable_token(rest.strip_prefix("else")?.trim_start())?;
        Some(name.to_string())
    };

    let (left, comparison, right) = split_comparison(expression)?;
    Some(Command::Conditional(Conditional {
        left: Operand::parse(left),
        comparison,
        right: Operand::parse(right),
        then_block: then_block.to_string(),
        else_block,
    }))
}

pub(super) fn identify(line: &str) -> Option<Command> {
    let value = line.strip_prefix("::wtf[")?.strip_suffix(']')?;
    if value.trim().is_empty() {
        return None;
    }
    Some(Command::Identify(Operand::parse(value)))
}

// ---------------------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------------------

/// Split `::set [NAME] = VALUE` into its name and trimmed value.
fn set_fields(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("::set [")?;
    let (name, rest) = rest.split_once(']')?;
    if !is_identifier(name) {
        return None;
    }
    let value = rest.trim_start().strip_prefix('=')?.trim();
    Some((name, value))
}

/// Find the leftmost operator written with a space on each side and split
/// the comparison around it. Both operands must be non-empty.
fn split_comparison(expression: &str) -> Option<(&str, Comparison, &str)> {
    let (position, comparison, width) = Comparison::ALL
        .iter()
        .filter_map(|&comparison| {
            let needle = format!(" {} ", comparison.symbol());
            expression
                .find(&needle)
                .map(|position| (position, comparison, needle.len()))
        })
        .min_by_key(|&(position, _, _)| position)?;

    let left = expression[..position].trim();
    let right = expression[position + width..].trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, comparison, right))
}
