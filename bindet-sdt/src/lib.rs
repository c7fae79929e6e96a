pub mod config;
pub mod error;
pub mod normal;
pub mod rates;
pub mod scorer;
pub mod tally;

pub use config::{AnalysisConfig, ClampPolicy, MissingDataPolicy};
pub use error::ScoreError;
pub use normal::{dprime, probit, RateClamp};
pub use rates::{mean_rates, ClassRates, SdtRates};
pub use scorer::{AnalysisReport, ClassSummary, RtSummary, Scorer};
pub use tally::{tally, ResponseTally, Tallies, Target};
