use std::fmt;

use crate::command::Operand;

/// Comparison operators accepted by `::if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThanOrEqual,
    GreaterThanOrEqual,
    LessThan,
    GreaterThan,
}

impl Comparison {
    /// Two-character operators come first so `<=` is never read as `<`.
    pub const ALL: [Comparison; 6] = [
        Comparison::Equal,
        Comparison::NotEqual,
        Comparison::LessThanOrEqual,
        Comparison::GreaterThanOrEqual,
        Comparison::LessThan,
        Comparison::GreaterThan,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::LessThanOrEqual => "<=",
            Comparison::GreaterThanOrEqual => ">=",
            Comparison::LessThan => "<",
            Comparison::GreaterThan => ">",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed `::if [L OP R]->[THEN] else [ELSE]` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub left: Operand,
    pub comparison: Comparison,
    pub right: Operand,
    pub then_block: String,
    pub else_block: Option<String>,
}
