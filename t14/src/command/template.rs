use crate::command::Operand;

/// A line of output text with embedded variable and conversion tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// Literal text content.
    Literal(String),
    /// `[NAME]`: replaced by the variable's value, or nothing if undefined.
    Variable(String),
    /// `::OP[VALUE]`: replaced by the conversion result.
    Conversion {
        operator: String,
        value: Operand,
        /// The token exactly as written, kept for unknown operators.
        raw: String,
    },
}

impl Template {
    pub fn literal(s: impl Into<String>) -> Self {
        Template {
            parts: vec![TemplatePart::Literal(s.into())],
        }
    }

    pub fn has_conversions(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, TemplatePart::Conversion { .. }))
    }
}
