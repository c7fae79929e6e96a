use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Zero padding used when a stimulus id is rebuilt from its parts.
pub const INDEX_WIDTH: usize = 3;

/// Picture category, encoded by the first letter of a stimulus id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StimulusClass {
    RedBin,
    GreyBin,
    NoBin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid stimulus id {id:?}: {reason}")]
pub struct InvalidIdentifier {
    pub id: String,
    pub reason: &'static str,
}

impl StimulusClass {
    pub const ALL: [StimulusClass; 3] = [Self::RedBin, Self::GreyBin, Self::NoBin];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Self::RedBin),
            'G' => Some(Self::GreyBin),
            'N' => Some(Self::NoBin),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::RedBin => 'R',
            Self::GreyBin => 'G',
            Self::NoBin => 'N',
        }
    }

    /// Subdirectory of the stimulus folder holding this class's pictures.
    pub fn directory(&self) -> &'static str {
        match self {
            Self::RedBin => "Red",
            Self::GreyBin => "Grey",
            Self::NoBin => "Null",
        }
    }

    /// Canonical id for the picture with the given index, e.g. `R007`.
    pub fn stimulus_id(&self, index: u32) -> String {
        format!("{}{:0width$}", self.letter(), index, width = INDEX_WIDTH)
    }
}

impl fmt::Display for StimulusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RedBin => "red",
            Self::GreyBin => "grey",
            Self::NoBin => "no-bin",
        };
        f.write_str(name)
    }
}

/// Splits a stimulus id such as `R007` (or the renamed-file form `R_007`)
/// into its class and numeric index.
pub fn classify(stimulus_id: &str) -> Result<(StimulusClass, u32), InvalidIdentifier> {
    let invalid = |reason| InvalidIdentifier {
        id: stimulus_id.to_string(),
        reason,
    };

    let mut chars = stimulus_id.chars();
    let letter = chars.next().ok_or_else(|| invalid("empty identifier"))?;
    let class = StimulusClass::from_letter(letter)
        .ok_or_else(|| invalid("class letter must be one of R, G, N"))?;

    let rest = chars.as_str();
    let digits = rest.strip_prefix('_').unwrap_or(rest);
    if digits.is_empty() {
        return Err(invalid("missing numeric index"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("index must be a non-negative integer"));
    }
    let index = digits
        .parse::<u32>()
        .map_err(|_| invalid("index out of range"))?;

    Ok((class, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_plain_and_underscored() {
        assert_eq!(classify("R007"), Ok((StimulusClass::RedBin, 7)));
        assert_eq!(classify("G_012"), Ok((StimulusClass::GreyBin, 12)));
        assert_eq!(classify("N0"), Ok((StimulusClass::NoBin, 0)));
        assert_eq!(classify("R0000123"), Ok((StimulusClass::RedBin, 123)));
    }

    #[test]
    fn classify_rejects_bad_letters() {
        for id in ["X001", "r001", "", "B_000"] {
            let err = classify(id).unwrap_err();
            assert_eq!(err.id, id);
        }
    }

    #[test]
    fn classify_rejects_bad_indices() {
        for id in ["R", "R_", "R-01", "R01a", "G 01", "N99999999999"] {
            assert!(classify(id).is_err(), "{id} should not classify");
        }
    }

    #[test]
    fn stimulus_id_is_zero_padded() {
        assert_eq!(StimulusClass::RedBin.stimulus_id(7), "R007");
        assert_eq!(StimulusClass::NoBin.stimulus_id(1234), "N1234");
        for class in StimulusClass::ALL {
            assert_eq!(classify(&class.stimulus_id(42)), Ok((class, 42)));
        }
    }
}
