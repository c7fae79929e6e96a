use crate::config::AnalysisConfig;
use crate::error::ScoreError;
use crate::normal::{dprime, RateClamp};
use crate::rates::{mean_rates, ClassRates, SdtRates};
use crate::tally::{tally, Tallies, Target};
use bindet_core::{BlockKind, StimulusClass, TrialRecord};
use bindet_log::TrialLogReader;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Mean rates and d-prime of one target colour
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    #[serde(flatten)]
    pub rates: ClassRates,
    pub clamp: RateClamp,
    pub clamped: SdtRates,
    pub dprime: f64,
}

/// Reaction times over the scored trials of one stimulus class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RtSummary {
    pub trials: usize,
    pub mean_ms: f64,
    pub min_ms: u64,
    pub max_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub trials_scored: usize,
    pub red: ClassSummary,
    pub grey: ClassSummary,
    pub reaction_times: BTreeMap<StimulusClass, RtSummary>,
    /// Over every scored trial regardless of class.
    pub overall_reaction_time: Option<RtSummary>,
    /// d'(red) - d'(grey). Positive when red bins are easier to detect.
    pub contrast: f64,
}

pub struct Scorer {
    config: AnalysisConfig,
}

impl Scorer {
    pub fn new(config: AnalysisConfig) -> Result<Self, ScoreError> {
        config.clamp.validate()?;
        Ok(Self { config })
    }

    pub fn tally(&self, records: &[TrialRecord]) -> Result<Tallies, ScoreError> {
        tally(records, &self.config.training_block)
    }

    pub fn summarize(
        &self,
        target: Target,
        tallies: &Tallies,
    ) -> Result<ClassSummary, ScoreError> {
        let rates = mean_rates(target, tallies.get(target), self.config.missing_data)?;
        let clamp = self
            .config
            .clamp
            .bounds(rates.signal_trials, rates.noise_trials);
        let clamped = clamp.apply(rates.mean);
        let dprime = dprime(rates.mean.hit_rate, rates.mean.false_alarm_rate, clamp);

        info!(
            %target,
            hit_rate = rates.mean.hit_rate,
            false_alarm_rate = rates.mean.false_alarm_rate,
            indices = rates.per_index.len(),
            skipped = rates.skipped.len(),
            dprime,
            "class scored"
        );

        Ok(ClassSummary {
            rates,
            clamp,
            clamped,
            dprime,
        })
    }

    /// Runs the whole analysis over already-read records.
    pub fn score(&self, records: &[TrialRecord]) -> Result<AnalysisReport, ScoreError> {
        let tallies = self.tally(records)?;
        let red = self.summarize(Target::Red, &tallies)?;
        let grey = self.summarize(Target::Grey, &tallies)?;
        let contrast = red.dprime - grey.dprime;

        let training = self.config.training_block.as_str();
        let scored: Vec<&TrialRecord> = records
            .iter()
            .filter(|r| !BlockKind::from_name(&r.block_name, training).is_training())
            .collect();
        let all_times: Vec<u64> = scored.iter().map(|r| r.reaction_time_ms).collect();

        info!(contrast, trials = scored.len(), "analysis complete");

        Ok(AnalysisReport {
            trials_scored: scored.len(),
            red,
            grey,
            reaction_times: reaction_times(&scored),
            overall_reaction_time: RtSummary::from_times(&all_times),
            contrast,
        })
    }

    /// d'(red) - d'(grey) for the given records.
    pub fn contrast(&self, records: &[TrialRecord]) -> Result<f64, ScoreError> {
        Ok(self.score(records)?.contrast)
    }

    /// Reads every participant log of the configured data directory and
    /// scores them together.
    pub fn score_dir(&self) -> Result<AnalysisReport, ScoreError> {
        let reader = TrialLogReader::new(self.config.training_block.clone());
        let records = reader.read_dir(&self.config.data_dir)?;
        self.score(&records)
    }
}

impl RtSummary {
    /// `None` for an empty slice. The sum is taken in `u128` so any number
    /// of `u64` times fits.
    pub fn from_times(times: &[u64]) -> Option<Self> {
        let min_ms = *times.iter().min()?;
        let max_ms = *times.iter().max()?;
        let total: u128 = times.iter().map(|&t| u128::from(t)).sum();
        Some(RtSummary {
            trials: times.len(),
            mean_ms: total as f64 / times.len() as f64,
            min_ms,
            max_ms,
        })
    }
}

/// Records must already have valid stimulus ids.
fn reaction_times(records: &[&TrialRecord]) -> BTreeMap<StimulusClass, RtSummary> {
    let mut by_class: BTreeMap<StimulusClass, Vec<u64>> = BTreeMap::new();
    for record in records {
        if let Ok((class, _)) = record.classify() {
            by_class.entry(class).or_default().push(record.reaction_time_ms);
        }
    }

    by_class
        .into_iter()
        .filter_map(|(class, times)| Some((class, RtSummary::from_times(&times)?)))
        .collect()
}
