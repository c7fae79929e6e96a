use crate::cli::{Args, Command};
use anyhow::{Context, Result};
use bindet_design::{SessionConfig, SessionPlanner, StimulusCatalog};
use bindet_sdt::{AnalysisConfig, AnalysisReport, ClampPolicy, MissingDataPolicy, Scorer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Contents of the `--config` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

enum Task {
    Score {
        json: bool,
        output: Option<PathBuf>,
    },
    Plan {
        output: Option<PathBuf>,
    },
}

pub struct App {
    config: AppConfig,
    task: Task,
}

impl App {
    /// Loads the config file, then lets command-line flags override it.
    pub fn new(args: Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        let task = match args.command {
            Command::Score {
                data_dir,
                json,
                output,
                strict,
                epsilon,
                training_block,
            } => {
                let analysis = &mut config.analysis;
                if let Some(dir) = data_dir {
                    analysis.data_dir = dir;
                }
                if strict {
                    analysis.missing_data = MissingDataPolicy::Abort;
                }
                if let Some(e) = epsilon {
                    analysis.clamp = ClampPolicy::Fixed(e);
                }
                if let Some(name) = training_block {
                    analysis.training_block = name;
                }
                Task::Score { json, output }
            }
            Command::Plan {
                stimulus_dir,
                seed,
                blocks,
                output,
            } => {
                let session = &mut config.session;
                if let Some(dir) = stimulus_dir {
                    session.stimulus_dir = dir;
                }
                if seed.is_some() {
                    session.seed = seed;
                }
                if let Some(n) = blocks {
                    session.test_blocks = n;
                }
                Task::Plan { output }
            }
        };

        Ok(Self { config, task })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn run(self) -> Result<()> {
        match &self.task {
            Task::Score { json, output } => self.score(*json, output.as_deref()),
            Task::Plan { output } => self.plan(output.as_deref()),
        }
    }

    fn score(&self, json: bool, output: Option<&Path>) -> Result<()> {
        let analysis = &self.config.analysis;
        info!(data_dir = %analysis.data_dir.display(), "scoring trial logs");

        let scorer = Scorer::new(analysis.clone())?;
        let report = scorer
            .score_dir()
            .with_context(|| format!("scoring {}", analysis.data_dir.display()))?;

        if let Some(path) = output {
            write_json(path, &report)?;
            info!(path = %path.display(), "report saved");
        }

        if json {
            serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
            println!();
        } else {
            print_summary(&report);
        }
        Ok(())
    }

    fn plan(&self, output: Option<&Path>) -> Result<()> {
        let session = &self.config.session;
        let seed = session.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, stimulus_dir = %session.stimulus_dir.display(), "planning session");

        let catalog = StimulusCatalog::load(&session.stimulus_dir)
            .with_context(|| format!("loading stimuli from {}", session.stimulus_dir.display()))?;
        let mut planner = SessionPlanner::new(session.clone(), StdRng::seed_from_u64(seed));
        let plan = planner.plan(&catalog)?;
        info!(
            test_blocks = plan.test_blocks().count(),
            trials = plan.trial_count(),
            "plan ready"
        );

        match output {
            Some(path) => {
                write_json(path, &plan)?;
                println!("Session plan (seed {}) saved to {}", seed, path.display());
            }
            None => {
                serde_json::to_writer_pretty(io::stdout().lock(), &plan)?;
                println!();
            }
        }
        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {}", path.display()))
}

fn print_summary(report: &AnalysisReport) {
    println!("Experiment Results:");
    println!("Scored trials: {}", report.trials_scored);
    for summary in [&report.red, &report.grey] {
        let rates = &summary.rates;
        println!(
            "  {:<4} hit rate {:.3}, false-alarm rate {:.3}, d' {:.3} ({} pictures)",
            rates.target.to_string(),
            rates.mean.hit_rate,
            rates.mean.false_alarm_rate,
            summary.dprime,
            rates.per_index.len(),
        );
        if !rates.skipped.is_empty() {
            println!("       left out (missing trials): {:?}", rates.skipped);
        }
    }
    for (class, rt) in &report.reaction_times {
        println!(
            "  RT {:<6} mean {:.1} ms, min {} ms, max {} ms ({} trials)",
            class.to_string(),
            rt.mean_ms,
            rt.min_ms,
            rt.max_ms,
            rt.trials
        );
    }
    if let Some(rt) = &report.overall_reaction_time {
        println!(
            "  RT all    mean {:.1} ms, min {} ms, max {} ms ({} trials)",
            rt.mean_ms, rt.min_ms, rt.max_ms, rt.trials
        );
    }
    println!("\nd'(red bins) - d'(grey bins) = {:.4}", report.contrast);
}
