use crate::catalog::StimulusCatalog;
use crate::config::SessionConfig;
use crate::error::DesignError;
use crate::trial::{BlockPlan, SessionPlan};
use bindet_core::BlockKind;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Shuffles a stimulus catalog into a training block and test blocks
pub struct SessionPlanner<R: Rng> {
    pub config: SessionConfig,
    pub rng: R,
}

impl<R: Rng> SessionPlanner<R> {
    pub fn new(config: SessionConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Test pictures of all classes are shuffled together, so every block
    /// mixes red, grey and no-bin trials. The last block takes the
    /// remainder when the count does not divide evenly.
    pub fn plan(&mut self, catalog: &StimulusCatalog) -> Result<SessionPlan, DesignError> {
        let mut training = catalog.training.clone();
        training.shuffle(&mut self.rng);

        let mut test = catalog.test_trials();
        test.shuffle(&mut self.rng);

        let blocks = self.config.test_blocks;
        let per_block = if blocks == 0 { 0 } else { test.len() / blocks };
        if per_block == 0 {
            return Err(DesignError::TooFewStimuli {
                stimuli: test.len(),
                blocks,
            });
        }

        let mut plan = SessionPlan {
            blocks: Vec::with_capacity(blocks + 1),
        };
        plan.blocks.push(BlockPlan {
            kind: BlockKind::Training,
            name: self.config.training_block.clone(),
            trials: training,
        });

        let mut rest = test.as_slice();
        for number in 1..=blocks {
            let take = if number == blocks { rest.len() } else { per_block };
            let (chunk, tail) = rest.split_at(take);
            rest = tail;
            let kind = BlockKind::Test(number);
            plan.blocks.push(BlockPlan {
                kind,
                name: kind.name(),
                trials: chunk.to_vec(),
            });
        }

        info!(
            blocks = plan.blocks.len(),
            trials = plan.trial_count(),
            "session planned"
        );
        Ok(plan)
    }
}
