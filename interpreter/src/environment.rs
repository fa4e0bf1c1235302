use std::collections::HashMap;

use t14::command::Operand;

/// The variable store: one global namespace for the whole run.
/// Variables are created on first assignment and never removed.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Create or overwrite a variable (last write wins).
    pub fn assign(&mut self, name: &str, value: impl Into<String>) {
        self.variables.insert(name.to_string(), value.into());
    }

    /// Copy `source`'s value into `target`. Both variables must already
    /// exist; otherwise nothing changes and `false` is returned.
    pub fn copy(&mut self, source: &str, target: &str) -> bool {
        let Some(value) = self.variables.get(source).cloned() else {
            return false;
        };
        match self.variables.get_mut(target) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Undefined variables read as the empty string. Every variable read
    /// made while executing a script goes through here.
    pub fn resolve_or_empty(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or_default()
    }

    pub fn resolve_operand<'a>(&'a self, operand: &'a Operand) -> &'a str {
        match operand {
            Operand::Literal(text) => text,
            Operand::Variable(name) => self.resolve_or_empty(name),
        }
    }
}
