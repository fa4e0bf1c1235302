use std::io::Write;

use t14::Script;
use t14::command::Command;
use t14::convert::{Converter, StandardConverter};
use tracing::{debug, trace};

use crate::environment::Environment;
use crate::error::{DiagnosticError, RuntimeError};
use crate::evaluator;
use crate::registry::BlockRegistry;

/// Name of the block where execution begins.
pub const ENTRY_BLOCK: &str = "main";

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Maximum number of nested block calls below `main`.
    pub max_depth: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        ExecutionConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The entry frame returned or ran off the end of the script.
    Finished,
    /// A `::exit`/`::quit` line stopped the run.
    Halted,
}

/// How a frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Return,
    Halt,
}

/// Execute a script with the built-in converter and default limits.
pub fn execute_script(
    script: &Script,
    output: &mut dyn Write,
) -> Result<Completion, DiagnosticError> {
    Interpreter::new(script).run(output)
}

/// The execution engine. Owns the block registry and variable store for
/// one script, so independent interpreters never share state.
pub struct Interpreter<'a> {
    script: &'a Script,
    converter: &'a dyn Converter,
    config: ExecutionConfig,
    registry: BlockRegistry,
    env: Environment,
}

impl<'a> Interpreter<'a> {
    pub fn new(script: &'a Script) -> Self {
        Interpreter {
            script,
            converter: &StandardConverter,
            config: ExecutionConfig::default(),
            registry: BlockRegistry::new(),
            env: Environment::new(),
        }
    }

    pub fn with_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_converter(mut self, converter: &'a dyn Converter) -> Self {
        self.converter = converter;
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Discover blocks, then run from the line after `::start[main]`.
    /// Every call starts from an empty variable store.
    pub fn run(&mut self, output: &mut dyn Write) -> Result<Completion, DiagnosticError> {
        self.registry = BlockRegistry::discover(self.script);
        self.env = Environment::new();

        let entry = self
            .registry
            .resolve(ENTRY_BLOCK)
            .ok_or(DiagnosticError::from(RuntimeError::NoEntryPoint))?;

        debug!(line = entry + 1, "entering {}", ENTRY_BLOCK);
        match self.run_frame(entry + 1, 0, output)? {
            Flow::Return => Ok(Completion::Finished),
            Flow::Halt => {
                debug!("run halted");
                Ok(Completion::Halted)
            }
        }
    }

    /// Run lines from `start` until `::end` or the end of the script.
    /// The upper bound is always the whole script, never a block-local end.
    fn run_frame(
        &mut self,
        start: usize,
        depth: usize,
        output: &mut dyn Write,
    ) -> Result<Flow, DiagnosticError> {
        let script = self.script;

        for (index, line) in script.lines.iter().enumerate().skip(start) {
            let Some(command) = &line.command else {
                continue;
            };
            trace!(line = index + 1, depth, "execute");

            match command {
                Command::Terminate => return Ok(Flow::Halt),
                // Labels are only meaningful to discovery; execution falls through.
                Command::BlockStart(_) => {}
                Command::BlockEnd => return Ok(Flow::Return),
                Command::Invoke(name) => {
                    if self.invoke(name, index, depth, output)? == Flow::Halt {
                        return Ok(Flow::Halt);
                    }
                }
                Command::Assign { variable, value } => {
                    self.env.assign(variable, value.as_str());
                }
                Command::Copy { target, source } => {
                    if !self.env.copy(source, target) {
                        debug!(
                            destination = target.as_str(),
                            source = source.as_str(),
                            line = index + 1,
                            "copy skipped: both variables must already exist"
                        );
                    }
                }
                Command::Conditional(conditional) => {
                    let Some(target) = evaluator::branch_target(conditional, &self.env) else {
                        continue;
                    };
                    if self.invoke(target, index, depth, output)? == Flow::Halt {
                        return Ok(Flow::Halt);
                    }
                }
                Command::Identify(operand) => {
                    let value = self.env.resolve_operand(operand);
                    for report in self.converter.identify(value) {
                        emit(output, &report)?;
                    }
                }
                Command::Conversion(template) | Command::Text(template) => {
                    let rendered = evaluator::render(template, &self.env, self.converter);
                    if !rendered.is_empty() {
                        emit(output, &rendered)?;
                    }
                }
            }
        }

        Ok(Flow::Return)
    }

    /// Call a block: run a nested frame from the line after its `::start`.
    /// Unknown block names are skipped.
    fn invoke(
        &mut self,
        name: &str,
        caller: usize,
        depth: usize,
        output: &mut dyn Write,
    ) -> Result<Flow, DiagnosticError> {
        let Some(position) = self.registry.resolve(name) else {
            debug!(block = name, line = caller + 1, "unresolved block skipped");
            return Ok(Flow::Return);
        };

        if depth >= self.config.max_depth {
            let span = self.script.lines[caller].span.clone();
            return Err(DiagnosticError::from(RuntimeError::StackOverflow {
                limit: self.config.max_depth,
            })
            .at(span, self.script.source_id));
        }

        debug!(block = name, depth = depth + 1, "entering block");
        self.run_frame(position + 1, depth + 1, output)
    }
}

/// Write one output line and flush it immediately.
fn emit(output: &mut dyn Write, line: &str) -> Result<(), DiagnosticError> {
    writeln!(output, "{}", line)?;
    output.flush()?;
    Ok(())
}
