pub mod condition;
pub mod template;

use crate::command::condition::Conditional;
use crate::command::template::Template;

/// A classified script line. Variants are listed in recognition priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `::exit` or `::quit`: stop the whole run.
    Terminate,
    /// `::start[NAME]`: block label, only meaningful to the discovery pass.
    BlockStart(String),
    /// `::end`: return from the current frame.
    BlockEnd,
    /// `::run[NAME]`: call a block.
    Invoke(String),
    /// `::set [NAME] = VALUE`
    Assign { variable: String, value: String },
    /// `::set [TARGET] = [SOURCE]`
    Copy { target: String, source: String },
    /// `::if [L OP R]->[THEN]` with an optional ` else [ELSE]`.
    Conditional(Conditional),
    /// `::wtf[VALUE]`: best-effort identification of an opaque value.
    Identify(Operand),
    /// Text containing at least one `::OP[VALUE]` token.
    Conversion(Template),
    /// Anything else, emitted after interpolation.
    Text(Template),
}

/// A value position that is either literal text or a whole `[NAME]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(String),
    Variable(String),
}

impl Operand {
    pub fn parse(text: &str) -> Self {
        match crate::parser::variable_token(text) {
            Some(name) => Operand::Variable(name.to_string()),
            None => Operand::Literal(text.to_string()),
        }
    }
}
