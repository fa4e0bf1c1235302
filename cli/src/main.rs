mod loader;
mod test_runner;

use std::io::Write;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use interpreter::{
    BlockRegistry, Completion, DEFAULT_MAX_DEPTH, DiagnosticError, ENTRY_BLOCK, Environment,
    ExecutionConfig, Interpreter, RuntimeError,
};
use t14::command::Command as ScriptCommand;
use t14::convert::{Converter, StandardConverter};

const SUBCOMMANDS: &[&str] = &["run", "convert", "test", "help"];

/// Largest accepted `--max-depth`. Each nested call costs native stack, and
/// this bound stays within the main thread's stack in unoptimized builds.
const MAX_DEPTH_LIMIT: u64 = 1024;

#[derive(Parser)]
#[command(
    name = "t14",
    version,
    about = "T14 scripting language interpreter",
    arg_required_else_help = true
)]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log interpreter activity to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a .t14 script
    Run(RunArgs),

    /// Apply conversion tokens such as ::dec->bin[65]
    Convert(ConvertArgs),

    /// Run .test.t14 script tests
    Test(TestArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Script file to execute (must end in .t14)
    file: String,

    /// Maximum nesting of block calls before the run fails
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH as u64,
          value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH_LIMIT))]
    max_depth: u64,

    /// Discover blocks only, don't execute (exit 0 if `main` exists)
    #[arg(long)]
    check: bool,

    /// List all blocks in discovery order
    #[arg(long)]
    list_blocks: bool,

    /// Suppress script output (just check for errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// A line containing conversion tokens, or ::wtf[VALUE]
    expression: String,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.t14 file or a directory containing them
    path: String,
}

fn main() {
    // Shorthands: `t14 file.t14` runs a script and `t14 ::dec->bin[65]`
    // converts, so inject the subcommand when none is given.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(offset) = args.iter().skip(1).position(|a| !a.starts_with('-')) {
        let pos = offset + 1;
        let first = &args[pos];
        if !SUBCOMMANDS.contains(&first.as_str()) {
            let implied = if first.starts_with("::") { "convert" } else { "run" };
            args.insert(pos, implied.to_string());
        }
    }

    let cli = Cli::parse_from(&args);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run(run_args) => do_run(run_args, cli.no_color),
        Command::Convert(convert_args) => do_convert(&convert_args.expression),
        Command::Test(test_args) => {
            let exit_code = test_runner::run_tests(Path::new(&test_args.path), cli.no_color);
            process::exit(exit_code);
        }
    }
}

/// Install a stderr subscriber when `--verbose` is given or `RUST_LOG` is set.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn do_run(args: RunArgs, no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let file = loader::unquote(&args.file).to_string();
    let source = match loader::load(Path::new(&file)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(file.clone(), source.clone());
    let script = t14::Script::parse(&source, file_id);
    tracing::debug!(file = %file, lines = script.len(), "loaded script");

    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    // --list-blocks: print registered blocks with their 1-based line numbers
    if args.list_blocks {
        let registry = BlockRegistry::discover(&script);
        for block in registry.blocks() {
            println!("{} (line {})", block.name, block.line + 1);
        }
        return;
    }

    // --check: discovery only
    if args.check {
        let registry = BlockRegistry::discover(&script);
        if registry.resolve(ENTRY_BLOCK).is_some() {
            eprintln!("ok: {} has {} block(s) and an entry point", file, registry.len());
            return;
        }
        let error = DiagnosticError::from(RuntimeError::NoEntryPoint);
        emit_diagnostic_error(&writer, &config, &files, &error);
        process::exit(1);
    }

    let exec_config = ExecutionConfig {
        // Bounded by MAX_DEPTH_LIMIT, so the cast cannot truncate.
        max_depth: args.max_depth as usize,
    };
    let mut interpreter = Interpreter::new(&script).with_config(exec_config);

    let result = if args.quiet {
        let mut sink = std::io::sink();
        interpreter.run(&mut sink)
    } else {
        let mut stdout = std::io::stdout().lock();
        interpreter.run(&mut stdout)
    };

    match result {
        Ok(Completion::Finished) | Ok(Completion::Halted) => {}
        Err(error) => {
            emit_diagnostic_error(&writer, &config, &files, &error);
            process::exit(1);
        }
    }
}

/// Evaluate a single line outside of any script, with no variables defined.
fn do_convert(expression: &str) {
    let converter = StandardConverter;
    let env = Environment::new();
    let lines = match t14::parser::classify(expression) {
        Some(ScriptCommand::Conversion(template)) => {
            vec![interpreter::evaluator::render(&template, &env, &converter)]
        }
        Some(ScriptCommand::Identify(operand)) => {
            converter.identify(env.resolve_operand(&operand))
        }
        _ => {
            eprintln!("error: '{}' contains no conversion token", expression);
            process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    for line in lines {
        if writeln!(stdout, "{}", line).is_err() {
            process::exit(1);
        }
    }
}

fn emit_diagnostic_error(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    error: &DiagnosticError,
) {
    if let Some(span) = &error.span {
        let diagnostic = Diagnostic::error()
            .with_message(error.to_string())
            .with_labels(vec![Label::primary(error.source_id, span.clone())]);
        let _ = term::emit_to_write_style(&mut writer.lock(), config, files, &diagnostic);
    } else {
        eprintln!("error: {}", error);
    }
}
