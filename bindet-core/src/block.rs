use serde::{Deserialize, Serialize};

/// Name the presentation software gives the practice block.
pub const TRAINING_BLOCK: &str = "Training Block";

/// Kind of block a trial was run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Training,
    /// Numbered test block, counted from 1.
    Test(usize),
}

impl BlockKind {
    /// Classifies a logged block name. Anything that is not exactly the
    /// training name is scored, whether or not it follows "Block N".
    pub fn from_name(name: &str, training_name: &str) -> Self {
        if name == training_name {
            return BlockKind::Training;
        }
        let number = name
            .strip_prefix("Block ")
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);
        BlockKind::Test(number)
    }

    pub fn is_training(&self) -> bool {
        matches!(self, BlockKind::Training)
    }

    pub fn name(&self) -> String {
        match self {
            BlockKind::Training => TRAINING_BLOCK.to_string(),
            BlockKind::Test(n) => format!("Block {}", n),
        }
    }
}
