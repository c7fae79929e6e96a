use crate::error::DesignError;
use crate::trial::PlannedTrial;
use bindet_core::{classify, StimulusClass};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding the practice pictures.
pub const TRAINING_DIR: &str = "Training";

/// Pictures available for a session, by folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimulusCatalog {
    pub red: Vec<PlannedTrial>,
    pub grey: Vec<PlannedTrial>,
    pub null: Vec<PlannedTrial>,
    pub training: Vec<PlannedTrial>,
}

impl StimulusCatalog {
    /// Lists `Red/`, `Grey/`, `Null/` and the optional `Training/` folder.
    ///
    /// Test pictures must be named after their class and index
    /// (`R_007.jpg`, `G012.png`); training pictures may be named freely.
    pub fn load(stimulus_dir: &Path) -> Result<Self, DesignError> {
        let mut catalog = StimulusCatalog::default();
        for class in StimulusClass::ALL {
            let trials = class_folder(&stimulus_dir.join(class.directory()), class)?;
            debug!(%class, pictures = trials.len(), "stimulus folder listed");
            match class {
                StimulusClass::RedBin => catalog.red = trials,
                StimulusClass::GreyBin => catalog.grey = trials,
                StimulusClass::NoBin => catalog.null = trials,
            }
        }

        let training_dir = stimulus_dir.join(TRAINING_DIR);
        if training_dir.is_dir() {
            catalog.training = list_files(&training_dir)?
                .into_iter()
                .map(|path| PlannedTrial {
                    stimulus_id: file_stem(&path),
                    path,
                })
                .collect();
        }
        Ok(catalog)
    }

    /// Red, grey and no-bin pictures, in folder order.
    pub fn test_trials(&self) -> Vec<PlannedTrial> {
        self.red
            .iter()
            .chain(&self.grey)
            .chain(&self.null)
            .cloned()
            .collect()
    }
}

fn class_folder(dir: &Path, expected: StimulusClass) -> Result<Vec<PlannedTrial>, DesignError> {
    list_files(dir)?
        .into_iter()
        .map(|path| {
            let (found, index) =
                classify(&file_stem(&path)).map_err(|source| DesignError::InvalidIdentifier {
                    path: path.clone(),
                    source,
                })?;
            if found != expected {
                return Err(DesignError::Misplaced {
                    path,
                    expected,
                    found,
                });
            }
            Ok(PlannedTrial {
                stimulus_id: found.stimulus_id(index),
                path,
            })
        })
        .collect()
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>, DesignError> {
    let io_err = |source| DesignError::Io {
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

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
