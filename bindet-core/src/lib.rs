pub mod block;
pub mod stimulus;
pub mod trial;

pub use block::{BlockKind, TRAINING_BLOCK};
pub use stimulus::{classify, InvalidIdentifier, StimulusClass, INDEX_WIDTH};
pub use trial::{InvalidResponse, Response, TrialRecord};
