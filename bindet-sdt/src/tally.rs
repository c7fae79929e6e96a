use crate::error::{RateKind, ScoreError};
use crate::rates::SdtRates;
use bindet_core::{BlockKind, Response, StimulusClass, TrialRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Bin colour whose detectability is being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Red,
    Grey,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Red, Target::Grey];

    /// Stimulus class in which this target is present.
    pub fn class(&self) -> StimulusClass {
        match self {
            Target::Red => StimulusClass::RedBin,
            Target::Grey => StimulusClass::GreyBin,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Red => f.write_str("red"),
            Target::Grey => f.write_str("grey"),
        }
    }
}

/// Signal-detection outcome counts for one picture index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseTally {
    pub hits: u64,
    pub misses: u64,
    pub false_alarms: u64,
    pub correct_rejections: u64,
}

impl ResponseTally {
    pub fn record(&mut self, signal_present: bool, response: Response) {
        match (signal_present, response) {
            (true, Response::Yes) => self.hits += 1,
            (true, Response::No) => self.misses += 1,
            (false, Response::Yes) => self.false_alarms += 1,
            (false, Response::No) => self.correct_rejections += 1,
        }
    }

    pub fn signal_trials(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn noise_trials(&self) -> u64 {
        self.false_alarms + self.correct_rejections
    }

    /// Hit and false-alarm rates, or the denominator that is empty.
    pub fn rates(&self) -> Result<SdtRates, RateKind> {
        let signal = self.signal_trials();
        let noise = self.noise_trials();
        if signal == 0 {
            return Err(RateKind::Hit);
        }
        if noise == 0 {
            return Err(RateKind::FalseAlarm);
        }
        Ok(SdtRates {
            hit_rate: self.hits as f64 / signal as f64,
            false_alarm_rate: self.false_alarms as f64 / noise as f64,
        })
    }
}

/// Per-index tallies for the red and grey comparisons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tallies {
    red: BTreeMap<u32, ResponseTally>,
    grey: BTreeMap<u32, ResponseTally>,
}

impl Tallies {
    pub fn get(&self, target: Target) -> &BTreeMap<u32, ResponseTally> {
        match target {
            Target::Red => &self.red,
            Target::Grey => &self.grey,
        }
    }

    /// Adds one trial. A no-bin picture is a signal-absent trial for both
    /// comparisons.
    pub fn add(&mut self, class: StimulusClass, index: u32, response: Response) {
        match class {
            StimulusClass::RedBin => self.entry(Target::Red, index).record(true, response),
            StimulusClass::GreyBin => self.entry(Target::Grey, index).record(true, response),
            StimulusClass::NoBin => {
                self.entry(Target::Red, index).record(false, response);
                self.entry(Target::Grey, index).record(false, response);
            }
        }
    }

    fn entry(&mut self, target: Target, index: u32) -> &mut ResponseTally {
        let map = match target {
            Target::Red => &mut self.red,
            Target::Grey => &mut self.grey,
        };
        map.entry(index).or_default()
    }
}

/// Tallies every non-training record by picture index.
pub fn tally<'a, I>(records: I, training_block: &str) -> Result<Tallies, ScoreError>
where
    I: IntoIterator<Item = &'a TrialRecord>,
{
    let mut tallies = Tallies::default();
    for (position, record) in records.into_iter().enumerate() {
        if BlockKind::from_name(&record.block_name, training_block).is_training() {
            continue;
        }
        let (class, index) =
            record
                .classify()
                .map_err(|source| ScoreError::InvalidIdentifier {
                    position,
                    block: record.block_name.clone(),
                    source,
                })?;
        tallies.add(class, index, record.response);
    }
    Ok(tallies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindet_core::TRAINING_BLOCK;

    fn rec(block: &str, id: &str, response: Response) -> TrialRecord {
        TrialRecord::new(block, id, response, 500)
    }

    #[test]
    fn scenario_training_excluded() {
        let records = [
            rec("Block 1", "R000", Response::Yes),
            rec("Block 1", "N000", Response::No),
            rec("Training Block", "G000", Response::Yes),
        ];
        let t = tally(&records, TRAINING_BLOCK).unwrap();

        let red = t.get(Target::Red)[&0];
        assert_eq!(red.hits, 1);
        assert_eq!(red.signal_trials(), 1);
        assert_eq!(red.correct_rejections, 1);
        assert_eq!(red.rates().unwrap().hit_rate, 1.0);

        let grey = t.get(Target::Grey)[&0];
        assert_eq!(grey.signal_trials(), 0);
        assert_eq!(grey.noise_trials(), 1);
        assert_eq!(grey.rates(), Err(RateKind::Hit));
    }

    #[test]
    fn no_bin_increments_both_noise_counts_once() {
        let mut t = Tallies::default();
        t.add(StimulusClass::RedBin, 4, Response::No);
        t.add(StimulusClass::GreyBin, 4, Response::Yes);
        let before: Vec<u64> = Target::ALL
            .iter()
            .map(|&tg| t.get(tg)[&4].noise_trials())
            .collect();

        t.add(StimulusClass::NoBin, 4, Response::Yes);

        for (tg, was) in Target::ALL.iter().zip(before) {
            let now = t.get(*tg)[&4];
            assert_eq!(now.noise_trials(), was + 1);
            assert_eq!(now.false_alarms, 1);
        }
    }

    #[test]
    fn signal_goes_to_own_target_only() {
        let mut t = Tallies::default();
        t.add(StimulusClass::RedBin, 1, Response::Yes);
        assert!(t.get(Target::Grey).is_empty());
        t.add(StimulusClass::GreyBin, 2, Response::No);
        assert!(!t.get(Target::Red).contains_key(&2));
        assert_eq!(t.get(Target::Grey)[&2].misses, 1);
    }

    #[test]
    fn order_does_not_matter() {
        let mut records = vec![
            rec("Block 1", "R001", Response::Yes),
            rec("Block 2", "N001", Response::Yes),
            rec("Block 3", "G001", Response::No),
            rec("Block 1", "N001", Response::No),
            rec("Block 2", "R001", Response::No),
        ];
        let forward = tally(&records, TRAINING_BLOCK).unwrap();
        records.reverse();
        let backward = tally(&records, TRAINING_BLOCK).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn bad_identifier_names_the_trial() {
        let records = [
            rec("Block 1", "R001", Response::Yes),
            rec("Block 2", "Q001", Response::Yes),
        ];
        match tally(&records, TRAINING_BLOCK).unwrap_err() {
            ScoreError::InvalidIdentifier {
                position, block, ..
            } => {
                assert_eq!(position, 1);
                assert_eq!(block, "Block 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
