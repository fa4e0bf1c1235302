use t14::command::condition::{Comparison, Conditional};
use t14::command::template::{Template, TemplatePart};
use t14::convert::Converter;
use tracing::debug;

use crate::environment::Environment;

/// Evaluate the comparison of an `::if` line.
///
/// When both operands parse as floating-point numbers they are compared
/// numerically. Otherwise the operands are compared as text, where only
/// `==` and `!=` are meaningful and every other operator is false.
pub fn compare(comparison: Comparison, left: &str, right: &str) -> bool {
    match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(a), Ok(b)) => match comparison {
            Comparison::Equal => a == b,
            Comparison::NotEqual => a != b,
            Comparison::LessThanOrEqual => a <= b,
            Comparison::GreaterThanOrEqual => a >= b,
            Comparison::LessThan => a < b,
            Comparison::GreaterThan => a > b,
        },
        _ => match comparison {
            Comparison::Equal => left == right,
            Comparison::NotEqual => left != right,
            _ => false,
        },
    }
}

/// The block a conditional should invoke, if any.
pub fn branch_target<'a>(conditional: &'a Conditional, env: &Environment) -> Option<&'a str> {
    let left = env.resolve_operand(&conditional.left);
    let right = env.resolve_operand(&conditional.right);
    if compare(conditional.comparison, left, right) {
        Some(conditional.then_block.as_str())
    } else {
        conditional.else_block.as_deref()
    }
}

/// Render a text line: substitute variables and apply conversion tokens.
///
/// Tokens are resolved in one left-to-right pass, so conversion results are
/// inserted as-is and never scanned again for `[NAME]` tokens. This departs
/// from a convert-then-interpolate order: a result that forms `[x]` with
/// the text after it prints `[x]`, not the value of `x`. A token with an unknown operator is
/// kept as written, with its variable tokens interpolated.
pub fn render(template: &Template, env: &Environment, converter: &dyn Converter) -> String {
    let mut line = String::new();
    for part in &template.parts {
        match part {
            TemplatePart::Literal(text) => line.push_str(text),
            TemplatePart::Variable(name) => line.push_str(env.resolve_or_empty(name)),
            TemplatePart::Conversion {
                operator,
                value,
                raw,
            } => {
                let input = env.resolve_operand(value);
                match converter.convert(operator, input) {
                    Some(result) => line.push_str(&result),
                    None => {
                        debug!(operator = operator.as_str(), "unknown conversion operator");
                        let kept = t14::parser::parse_interpolation(raw);
                        line.push_str(&render(&kept, env, converter));
                    }
                }
            }
        }
    }
    line
}
