use bindet_core::{InvalidIdentifier, StimulusClass};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    InvalidIdentifier {
        path: PathBuf,
        source: InvalidIdentifier,
    },

    #[error("{} is a {found} picture stored with the {expected} pictures", .path.display())]
    Misplaced {
        path: PathBuf,
        expected: StimulusClass,
        found: StimulusClass,
    },

    #[error("{stimuli} test stimuli cannot fill {blocks} blocks")]
    TooFewStimuli { stimuli: usize, blocks: usize },
}
