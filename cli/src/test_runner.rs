use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use interpreter::{Completion, DEFAULT_MAX_DEPTH, DiagnosticError, ExecutionConfig, Interpreter};

/// Suffix of script test files.
const TEST_SUFFIX: &str = ".test.t14";

/// Line that opens and closes the TOML header of a test file.
const FENCE: &str = "---";

/// Expectations declared in a test file's TOML header.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectations {
    pub description: Option<String>,
    /// Whole output, compared after trimming both sides.
    pub expect_output: Option<String>,
    /// Substring of the error message the run must fail with.
    pub expect_error: Option<String>,
    pub max_depth: Option<usize>,
}

/// A `.test.t14` file: TOML header between `---` lines, then the script.
#[derive(Debug)]
pub struct ScriptTest {
    pub expectations: Expectations,
    pub source: String,
}

impl ScriptTest {
    pub fn parse(content: &str) -> Result<Self, String> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content.split_inclusive('\n');

        match lines.next() {
            Some(first) if first.trim_end() == FENCE => {}
            _ => return Err(format!("file must start with a '{FENCE}' line")),
        }

        let mut header = String::new();
        let mut closed = false;
        for line in lines.by_ref() {
            if line.trim_end() == FENCE {
                closed = true;
                break;
            }
            header.push_str(line);
        }
        if !closed {
            return Err(format!("header is not closed by a '{FENCE}' line"));
        }

        let expectations =
            toml::from_str(&header).map_err(|e| format!("invalid TOML header: {e}"))?;
        Ok(ScriptTest {
            expectations,
            source: lines.collect(),
        })
    }

    /// Run the script and compare the result against the header.
    pub fn check(&self) -> Result<(), String> {
        let script = t14::Script::parse(&self.source, 0);
        let config = ExecutionConfig {
            max_depth: self.expectations.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        };

        let mut output = Vec::new();
        let result = Interpreter::new(&script)
            .with_config(config)
            .run(&mut output);

        self.check_result(result)?;
        self.check_output(&String::from_utf8_lossy(&output))
    }

    fn check_result(&self, result: Result<Completion, DiagnosticError>) -> Result<(), String> {
        match (&self.expectations.expect_error, result) {
            (None, Ok(_)) => Ok(()),
            (None, Err(error)) => Err(format!("run failed: {error}")),
            (Some(wanted), Ok(_)) => Err(format!("run succeeded, wanted error \"{wanted}\"")),
            (Some(wanted), Err(error)) => {
                let message = error.to_string();
                if message.contains(wanted.as_str()) {
                    Ok(())
                } else {
                    Err(format!("wrong error\n  wanted: {wanted}\n  got:    {message}"))
                }
            }
        }
    }

    // Checked after a matching error too: it pins down what ran before the failure.
    fn check_output(&self, actual: &str) -> Result<(), String> {
        let Some(expected) = &self.expectations.expect_output else {
            return Ok(());
        };
        if actual.trim() == expected.trim() {
            return Ok(());
        }
        Err(format!(
            "output differs\n  expected:\n{}\n  actual:\n{}",
            indent(expected.trim()),
            indent(actual.trim())
        ))
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One finished test file.
struct Report {
    path: PathBuf,
    label: String,
    failure: Option<String>,
}

impl Report {
    fn run(path: &Path) -> Report {
        tracing::debug!(path = %path.display(), "running script test");

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read file: {e}"))
            .and_then(|content| ScriptTest::parse(&content));

        let (description, failure) = match loaded {
            Ok(test) => (test.expectations.description.clone(), test.check().err()),
            Err(reason) => (None, Some(reason)),
        };

        Report {
            path: path.to_path_buf(),
            label: description.unwrap_or_else(|| default_label(path)),
            failure,
        }
    }
}

fn default_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(TEST_SUFFIX).unwrap_or(&name).to_string()
}

/// `ok`/`FAILED` style labels, colored unless disabled.
struct Painted<'a> {
    text: &'a str,
    ansi: &'a str,
    color: bool,
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color {
            write!(f, "\x1b[{}m{}\x1b[0m", self.ansi, self.text)
        } else {
            f.write_str(self.text)
        }
    }
}

fn green(text: &str, color: bool) -> Painted<'_> {
    Painted {
        text,
        ansi: "32",
        color,
    }
}

fn red(text: &str, color: bool) -> Painted<'_> {
    Painted {
        text,
        ansi: "31",
        color,
    }
}

/// All `.test.t14` files below `root`, sorted by path.
fn discover(root: &Path) -> Vec<PathBuf> {
    let mut pending = vec![root.to_path_buf()];
    let mut found = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.to_string_lossy().ends_with(TEST_SUFFIX) {
                found.push(path);
            }
        }
    }
    found.sort();
    found
}

/// Run one test file, or every test file under a directory.
/// Returns the process exit code: 0 when everything passed.
pub fn run_tests(path: &Path, no_color: bool) -> i32 {
    let color = !no_color;
    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        discover(path)
    };
    if files.is_empty() {
        eprintln!("no {} files found in {}", TEST_SUFFIX, path.display());
        return 1;
    }

    let reports: Vec<Report> = files.iter().map(|file| Report::run(file)).collect();
    for report in &reports {
        let status = match report.failure {
            None => green("PASS", color),
            Some(_) => red("FAIL", color),
        };
        eprintln!("  {}  {}", status, report.label);
    }

    let failed: Vec<&Report> = reports.iter().filter(|r| r.failure.is_some()).collect();
    for report in &failed {
        eprintln!("\n  --- {} ---", report.path.display());
        for line in report.failure.iter().flat_map(|reason| reason.lines()) {
            eprintln!("  {line}");
        }
    }

    let passed = reports.len() - failed.len();
    let verdict = if failed.is_empty() {
        green("ok", color)
    } else {
        red("FAILED", color)
    };
    eprintln!(
        "\ntest result: {}. {} passed, {} failed",
        verdict,
        passed,
        failed.len()
    );

    if failed.is_empty() { 0 } else { 1 }
}
