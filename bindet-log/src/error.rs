use bindet_core::{InvalidIdentifier, InvalidResponse};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("{}:{line}: malformed line: {fault}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        fault: LineFault,
    },

    #[error("{}:{line}: {source}", .path.display())]
    InvalidIdentifier {
        path: PathBuf,
        line: usize,
        source: InvalidIdentifier,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What is wrong with a single log line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineFault {
    #[error("expected 4 fields (or 5 in the legacy layout), found {0}")]
    FieldCount(usize),

    #[error(transparent)]
    Response(#[from] InvalidResponse),

    #[error("reaction time must be a non-negative integer, got {0:?}")]
    ReactionTime(String),

    #[error("empty block name")]
    EmptyBlock,

    #[error(transparent)]
    Identifier(#[from] InvalidIdentifier),
}

impl LogError {
    pub(crate) fn at(path: PathBuf, line: usize, fault: LineFault) -> Self {
        match fault {
            LineFault::Identifier(source) => LogError::InvalidIdentifier { path, line, source },
            fault => LogError::MalformedLine { path, line, fault },
        }
    }
}
