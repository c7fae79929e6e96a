use crate::tally::Target;
use bindet_core::InvalidIdentifier;
use bindet_log::LogError;
use std::fmt;
use thiserror::Error;

/// Denominator of a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateKind {
    Hit,
    FalseAlarm,
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateKind::Hit => f.write_str("signal-present"),
            RateKind::FalseAlarm => f.write_str("signal-absent"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Log(#[from] LogError),

    #[error("trial #{position} ({block}): {source}")]
    InvalidIdentifier {
        position: usize,
        block: String,
        source: InvalidIdentifier,
    },

    #[error("{target} stimulus {index} has no {missing} trials")]
    InsufficientData {
        target: Target,
        index: u32,
        missing: RateKind,
    },

    #[error("no {0} stimulus has both signal-present and signal-absent trials")]
    NoValidIndices(Target),

    #[error("clamp epsilon must lie in (0, 0.5], got {0}")]
    InvalidEpsilon(f64),
}
