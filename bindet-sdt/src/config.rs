use crate::error::ScoreError;
use crate::normal::RateClamp;
use bindet_core::TRAINING_BLOCK;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How rates of exactly 0 or 1 are pulled inside the unit interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// 1 / (2N), N being the number of trials behind the rate.
    HalfTrial,
    Fixed(f64),
}

impl ClampPolicy {
    pub fn validate(&self) -> Result<(), ScoreError> {
        match *self {
            ClampPolicy::Fixed(e) if !(e > 0.0 && e <= 0.5) => Err(ScoreError::InvalidEpsilon(e)),
            _ => Ok(()),
        }
    }

    pub fn bounds(&self, signal_trials: u64, noise_trials: u64) -> RateClamp {
        match *self {
            ClampPolicy::HalfTrial => RateClamp {
                hit_epsilon: half_trial(signal_trials),
                false_alarm_epsilon: half_trial(noise_trials),
            },
            ClampPolicy::Fixed(e) => RateClamp::uniform(e),
        }
    }
}

fn half_trial(n: u64) -> f64 {
    1.0 / (2.0 * n.max(1) as f64)
}

/// What to do with a picture index lacking signal or noise trials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Leave it out of the mean and list it in the report.
    Skip,
    Abort,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub data_dir: PathBuf,
    pub training_block: String,
    pub clamp: ClampPolicy,
    pub missing_data: MissingDataPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("Data_before_treatment"),
            training_block: TRAINING_BLOCK.to_string(),
            clamp: ClampPolicy::HalfTrial,
            missing_data: MissingDataPolicy::Skip,
        }
    }
}
