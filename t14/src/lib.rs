pub mod block;
pub mod command;
pub mod convert;
pub mod parser;

use std::ops::Range;

use crate::command::Command;

/// One line of a loaded script.
#[derive(Debug, Clone)]
pub struct Line {
    /// Line text without its terminator.
    pub text: String,
    /// Byte span in the source (for error reporting with codespan-reporting).
    pub span: Range<usize>,
    /// The recognized command, or `None` for comment and blank lines.
    pub command: Option<Command>,
}

impl Line {
    fn new(text: &str, span: Range<usize>) -> Self {
        Line {
            text: text.to_string(),
            span,
            command: parser::classify(text),
        }
    }
}

/// A loaded T14 script: an ordered sequence of classified lines.
#[derive(Debug, Clone)]
pub struct Script {
    pub lines: Vec<Line>,
    /// The source file ID (for error reporting with codespan-reporting).
    pub source_id: usize,
}

impl Script {
    /// Split source text into lines (LF or CRLF) and classify each one.
    pub fn parse(source: &str, source_id: usize) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in source.split_inclusive('\n') {
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            let text = text.strip_suffix('\r').unwrap_or(text);
            lines.push(Line::new(text, offset..offset + text.len()));
            offset += raw.len();
        }
        Script { lines, source_id }
    }

    /// Build a script from lines that were already split by the caller.
    /// Spans are computed as if the lines were joined with `\n`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut offset = 0;
        let lines = lines
            .into_iter()
            .map(|text| {
                let text = text.as_ref();
                let line = Line::new(text, offset..offset + text.len());
                offset += text.len() + 1;
                line
            })
            .collect();
        Script {
            lines,
            source_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }
}
