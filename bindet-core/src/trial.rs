use crate::block::BlockKind;
use crate::stimulus::{classify, InvalidIdentifier, StimulusClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Participant's answer to "did you see a bin?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Response {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("response must be Y or N, got {0:?}")]
pub struct InvalidResponse(pub String);

impl Response {
    pub fn from_code(code: &str) -> Result<Self, InvalidResponse> {
        match code {
            "Y" => Ok(Response::Yes),
            "N" => Ok(Response::No),
            other => Err(InvalidResponse(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Response::Yes => "Y",
            Response::No => "N",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Response::Yes)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One logged trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub block_name: String,
    pub stimulus_id: String,
    pub response: Response,
    pub reaction_time_ms: u64,
}

impl TrialRecord {
    pub fn new(
        block_name: impl Into<String>,
        stimulus_id: impl Into<String>,
        response: Response,
        reaction_time_ms: u64,
    ) -> Self {
        Self {
            block_name: block_name.into(),
            stimulus_id: stimulus_id.into(),
            response,
            reaction_time_ms,
        }
    }

    pub fn block_kind(&self, training_name: &str) -> BlockKind {
        BlockKind::from_name(&self.block_name, training_name)
    }

    pub fn classify(&self) -> Result<(StimulusClass, u32), InvalidIdentifier> {
        classify(&self.stimulus_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TRAINING_BLOCK;

    #[test]
    fn response_codes() {
        assert_eq!(Response::from_code("Y"), Ok(Response::Yes));
        assert_eq!(Response::from_code("N"), Ok(Response::No));
        assert!(Response::from_code("y").is_err());
        assert!(Response::from_code("").is_err());
        assert_eq!(Response::No.to_string(), "N");
    }

    #[test]
    fn record_helpers() {
        let rec = TrialRecord::new("Training Block", "G000", Response::Yes, 400);
        assert!(rec.block_kind(TRAINING_BLOCK).is_training());
        assert_eq!(rec.classify(), Ok((StimulusClass::GreyBin, 0)));
    }
}
