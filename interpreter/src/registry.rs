use std::collections::HashMap;

use t14::Script;
use t14::block::Block;
use t14::command::Command;
use tracing::debug;

/// Registry of all blocks in the script, indexed by name.
/// Built once by the discovery pass; only the first block with a given
/// name is kept.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    /// Blocks in discovery order.
    blocks: Vec<Block>,
    index: HashMap<String, usize>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        BlockRegistry::default()
    }

    /// The discovery pass: record every `::start[NAME]` line without
    /// executing anything.
    pub fn discover(script: &Script) -> Self {
        let mut registry = BlockRegistry::new();
        for (position, line) in script.lines.iter().enumerate() {
            if let Some(Command::BlockStart(name)) = &line.command {
                registry.register(name, position);
            }
        }
        debug!(blocks = registry.len(), "discovery finished");
        registry
    }

    /// Insert a block unless one with the same name exists.
    /// Returns whether the block was added.
    pub fn register(&mut self, name: &str, position: usize) -> bool {
        if let Some(&existing) = self.index.get(name) {
            debug!(
                block = name,
                line = position + 1,
                first = self.blocks[existing].line + 1,
                "duplicate block ignored"
            );
            return false;
        }
        debug!(block = name, line = position + 1, "registered block");
        self.index.insert(name.to_string(), self.blocks.len());
        self.blocks.push(Block {
            name: name.to_string(),
            line: position,
        });
        true
    }

    /// Exact, case-sensitive lookup of a block's `::start` line.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.get(name).map(|block| block.line)
    }

    fn get(&self, name: &str) -> Option<&Block> {
        self.index.get(name).map(|&i| &self.blocks[i])
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
