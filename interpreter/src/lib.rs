pub mod environment;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod registry;

pub use environment::Environment;
pub use error::{DiagnosticError, RuntimeError};
pub use executor::{
    Completion, DEFAULT_MAX_DEPTH, ENTRY_BLOCK, ExecutionConfig, Interpreter, execute_script,
};
pub use registry::BlockRegistry;
