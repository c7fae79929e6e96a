use bindet_core::BlockKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One picture scheduled for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTrial {
    /// Id to write in the trial log.
    pub stimulus_id: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPlan {
    pub kind: BlockKind,
    pub name: String,
    pub trials: Vec<PlannedTrial>,
}

/// Training block followed by the numbered test blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub blocks: Vec<BlockPlan>,
}

impl SessionPlan {
    pub fn trial_count(&self) -> usize {
        self.blocks.iter().map(|b| b.trials.len()).sum()
    }

    pub fn test_blocks(&self) -> impl Iterator<Item = &BlockPlan> {
        self.blocks.iter().filter(|b| !b.kind.is_training())
    }
}
