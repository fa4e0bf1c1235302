/// A named jump/call target discovered from a `::start[NAME]` line.
/// A block has no recorded end: it runs until `::end` or the end of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block name, case-sensitive.
    pub name: String,
    /// Zero-based index of the `::start` line.
    pub line: usize,
}
