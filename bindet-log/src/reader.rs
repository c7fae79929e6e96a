use crate::error::{LineFault, LogError};
use bindet_core::{classify, InvalidIdentifier, Response, TrialRecord, TRAINING_BLOCK};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parses one raw log line. Blank lines yield `None`.
///
/// Accepts `block,stimulus_id,response,rt` and the older
/// `block,class,index,response,rt` layout, where the class letter and index
/// are stored in separate columns.
pub fn parse_line(line: &str) -> Result<Option<TrialRecord>, LineFault> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let (block, stimulus_id, response, rt) = match fields.as_slice() {
        [block, id, response, rt] => (*block, id.to_string(), *response, *rt),
        [block, letter, index, response, rt] => {
            (*block, legacy_stimulus_id(letter, index)?, *response, *rt)
        }
        other => return Err(LineFault::FieldCount(other.len())),
    };

    if block.is_empty() {
        return Err(LineFault::EmptyBlock);
    }
    let response = Response::from_code(response)?;
    let reaction_time_ms = rt
        .parse::<u64>()
        .map_err(|_| LineFault::ReactionTime(rt.to_string()))?;

    Ok(Some(TrialRecord::new(
        block,
        stimulus_id,
        response,
        reaction_time_ms,
    )))
}

fn legacy_stimulus_id(letter: &str, index: &str) -> Result<String, InvalidIdentifier> {
    let joined = format!("{letter}{index}");
    if letter.chars().count() != 1 {
        return Err(InvalidIdentifier {
            id: joined,
            reason: "class column must hold a single letter",
        });
    }
    let (class, index) = classify(&joined)?;
    Ok(class.stimulus_id(index))
}

/// Reads participant logs and drops the training block
#[derive(Debug, Clone)]
pub struct TrialLogReader {
    training_block: String,
}

impl Default for TrialLogReader {
    fn default() -> Self {
        Self::new(TRAINING_BLOCK)
    }
}

impl TrialLogReader {
    pub fn new(training_block: impl Into<String>) -> Self {
        Self {
            training_block: training_block.into(),
        }
    }

    /// Parses every line of one source, training trials included. Stimulus
    /// ids of scored trials must classify; training pictures may be named
    /// freely. `label` only names the source in errors.
    pub fn parse_source<R: BufRead>(
        &self,
        label: &Path,
        source: R,
    ) -> Result<Vec<TrialRecord>, LogError> {
        let mut records = Vec::new();
        for (i, line) in source.lines().enumerate() {
            let line = line.map_err(|source| LogError::Io {
                path: label.to_path_buf(),
                source,
            })?;
            match parse_line(&line) {
                Ok(Some(record)) => {
                    if record.block_name != self.training_block {
                        if let Err(e) = record.classify() {
                            return Err(LogError::at(label.to_path_buf(), i + 1, e.into()));
                        }
                    }
                    records.push(record);
                }
                Ok(None) => {}
                Err(fault) => return Err(LogError::at(label.to_path_buf(), i + 1, fault)),
            }
        }
        Ok(records)
    }

    /// Reads all sources to completion and returns their scored trials.
    pub fn read_sources<I, R>(&self, sources: I) -> Result<Vec<TrialRecord>, LogError>
    where
        I: IntoIterator<Item = (PathBuf, R)>,
        R: BufRead,
    {
        let mut records = Vec::new();
        let mut parsed = 0;
        let mut n_sources = 0;
        for (label, source) in sources {
            let batch = self.parse_source(&label, source)?;
            debug!(source = %label.display(), trials = batch.len(), "parsed log");
            parsed += batch.len();
            n_sources += 1;
            records.extend(self.scored(batch));
        }
        info!(
            sources = n_sources,
            trials = records.len(),
            training_dropped = parsed - records.len(),
            "trial logs read"
        );
        Ok(records)
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<TrialRecord>, LogError> {
        let file = open(path)?;
        self.read_sources([(path.to_path_buf(), BufReader::new(file))])
    }

    /// Reads every participant file in `dir`.
    pub fn read_dir(&self, dir: &Path) -> Result<Vec<TrialRecord>, LogError> {
        let sources = participant_files(dir)?
            .into_iter()
            .map(|path| open(&path).map(|file| (path, BufReader::new(file))))
            .collect::<Result<Vec<_>, _>>()?;
        self.read_sources(sources)
    }

    fn scored(&self, records: Vec<TrialRecord>) -> impl Iterator<Item = TrialRecord> + '_ {
        records
            .into_iter()
            .filter(move |r| r.block_name != self.training_block)
    }
}

/// Regular, non-hidden files of the data directory, sorted by path.
pub fn participant_files(dir: &Path) -> Result<Vec<PathBuf>, LogError> {
    let io_err = |source| LogError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if entry.file_type().map_err(io_err)?.is_file() && !hidden {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn open(path: &Path) -> Result<File, LogError> {
    File::open(path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
