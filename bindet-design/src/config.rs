use bindet_core::TRAINING_BLOCK;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub stimulus_dir: PathBuf,
    /// Test blocks the shuffled stimuli are split into, giving rest pauses.
    pub test_blocks: usize,
    pub training_block: String,
    /// Fixed seed for a reproducible order. Drawn at random when unset.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stimulus_dir: PathBuf::from("Stimuli"),
            test_blocks: 3,
            training_block: TRAINING_BLOCK.to_string(),
            seed: None,
        }
    }
}
