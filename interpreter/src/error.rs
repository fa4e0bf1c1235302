use std::fmt;
use std::ops::Range;

#[derive(Debug)]
pub enum RuntimeError {
    /// No `::start[main]` block was found by the discovery pass.
    NoEntryPoint,
    /// Block invocations nested deeper than the configured limit.
    StackOverflow { limit: usize },
    IoError(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::NoEntryPoint => {
                write!(f, "no entry point: block '{}' not found", crate::ENTRY_BLOCK)
            }
            RuntimeError::StackOverflow { limit } => {
                write!(f, "stack overflow: block calls nested deeper than {}", limit)
            }
            RuntimeError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// A runtime error enriched with source location information.
#[derive(Debug)]
pub struct DiagnosticError {
    pub error: RuntimeError,
    pub span: Option<Range<usize>>,
    pub source_id: usize,
}

impl DiagnosticError {
    /// Attach the span of the script line that caused the error.
    pub fn at(mut self, span: Range<usize>, source_id: usize) -> Self {
        self.span = Some(span);
        self.source_id = source_id;
        self
    }
}

impl From<RuntimeError> for DiagnosticError {
    fn from(error: RuntimeError) -> Self {
        DiagnosticError {
            error,
            span: None,
            source_id: 0,
        }
    }
}

impl From<std::io::Error> for DiagnosticError {
    fn from(error: std::io::Error) -> Self {
        RuntimeError::IoError(error.to_string()).into()
    }
}

impl fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for DiagnosticError {}
