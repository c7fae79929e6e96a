use crate::config::MissingDataPolicy;
use crate::error::ScoreError;
use crate::tally::{ResponseTally, Target};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SdtRates {
    pub hit_rate: f64,
    pub false_alarm_rate: f64,
}

/// Rates of every usable index of one target, with their mean
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRates {
    pub target: Target,
    pub per_index: BTreeMap<u32, SdtRates>,
    /// Indices left out because one of their denominators was empty.
    pub skipped: Vec<u32>,
    pub mean: SdtRates,
    /// Trials behind the mean hit rate.
    pub signal_trials: u64,
    /// Trials behind the mean false-alarm rate.
    pub noise_trials: u64,
}

/// Averages hit and false-alarm rates over the indices of one target.
pub fn mean_rates(
    target: Target,
    tallies: &BTreeMap<u32, ResponseTally>,
    policy: MissingDataPolicy,
) -> Result<ClassRates, ScoreError> {
    let mut per_index = BTreeMap::new();
    let mut skipped = Vec::new();
    let mut signal_trials = 0;
    let mut noise_trials = 0;

    for (&index, tally) in tallies {
        match tally.rates() {
            Ok(rates) => {
                per_index.insert(index, rates);
                signal_trials += tally.signal_trials();
                noise_trials += tally.noise_trials();
            }
            Err(missing) => {
                let err = ScoreError::InsufficientData {
                    target,
                    index,
                    missing,
                };
                if policy == MissingDataPolicy::Abort {
                    return Err(err);
                }
                warn!(%err, "stimulus left out of the mean");
                skipped.push(index);
            }
        }
    }

    if per_index.is_empty() {
        return Err(ScoreError::NoValidIndices(target));
    }

    let n = per_index.len() as f64;
    let mean = SdtRates {
        hit_rate: per_index.values().map(|r| r.hit_rate).sum::<f64>() / n,
        false_alarm_rate: per_index.values().map(|r| r.false_alarm_rate).sum::<f64>() / n,
    };

    Ok(ClassRates {
        target,
        per_index,
        skipped,
        mean,
        signal_trials,
        noise_trials,
    })
}
