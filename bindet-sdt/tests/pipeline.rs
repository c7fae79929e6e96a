use bindet_core::{Response, TrialRecord};
use bindet_log::{write_log, LineFault, LogError};
use bindet_sdt::{AnalysisConfig, ScoreError, Scorer};
use std::fs::{self, File};
use std::path::Path;

fn participant(dir: &Path, name: &str, red_hits: u32, grey_hits: u32) {
    let mut records = vec![TrialRecord::new("Training Block", "R000", Response::No, 900)];
    for i in 0..4 {
        let red = if i < red_hits { Response::Yes } else { Response::No };
        let grey = if i < grey_hits { Response::Yes } else { Response::No };
        let noise = if i == 0 { Response::Yes } else { Response::No };
        records.push(TrialRecord::new("Block 1", format!("R{i:03}"), red, 480));
        records.push(TrialRecord::new("Block 2", format!("G{i:03}"), grey, 530));
        records.push(TrialRecord::new("Block 3", format!("N{i:03}"), noise, 640));
    }
    let file = File::create(dir.join(name)).unwrap();
    write_log(file, &records).unwrap();
}

fn scorer_for(dir: &Path) -> Scorer {
    Scorer::new(AnalysisConfig {
        data_dir: dir.to_path_buf(),
        ..AnalysisConfig::default()
    })
    .unwrap()
}

#[test]
fn scores_a_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    participant(dir.path(), "subject_1.csv", 4, 2);
    participant(dir.path(), "subject_2.csv", 3, 1);

    let report = scorer_for(dir.path()).score_dir().unwrap();

    assert_eq!(report.trials_scored, 24);
    assert_eq!(report.red.rates.per_index.len(), 4);
    assert_eq!(report.red.rates.mean.hit_rate, 7.0 / 8.0);
    assert_eq!(report.grey.rates.mean.hit_rate, 3.0 / 8.0);
    assert_eq!(report.red.rates.mean.false_alarm_rate, 0.25);
    assert!(report.contrast > 0.0);
    assert_eq!(report.contrast, report.red.dprime - report.grey.dprime);

    let again = scorer_for(dir.path()).score_dir().unwrap();
    assert_eq!(report.contrast, again.contrast);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["contrast"].is_number());
    assert_eq!(json["red"]["skipped"], serde_json::json!([]));
}

#[test]
fn legacy_layout_scores_like_current_layout() {
    let current = tempfile::tempdir().unwrap();
    let legacy = tempfile::tempdir().unwrap();
    fs::write(
        current.path().join("s.csv"),
        "Block 1,R001,Y,500\nBlock 1,G001,N,500\nBlock 1,N001,N,500\nBlock 2,N001,Y,500\n",
    )
    .unwrap();
    fs::write(
        legacy.path().join("s.csv"),
        "Block 1,R,1,Y,500\nBlock 1,G,1,N,500\nBlock 1,N,1,N,500\nBlock 2,N,1,Y,500\n",
    )
    .unwrap();

    let a = scorer_for(current.path()).score_dir().unwrap();
    let b = scorer_for(legacy.path()).score_dir().unwrap();
    assert_eq!(a.contrast, b.contrast);
}

#[test]
fn malformed_line_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    participant(dir.path(), "subject_1.csv", 4, 2);
    fs::write(dir.path().join("subject_2.csv"), "Block 1,R000,Y,500\nBlock 1,G000,N\n").unwrap();

    let err = scorer_for(dir.path()).score_dir().unwrap_err();
    match err {
        ScoreError::Log(LogError::MalformedLine { path, line, fault }) => {
            assert!(path.ends_with("subject_2.csv"));
            assert_eq!(line, 2);
            assert_eq!(fault, LineFault::FieldCount(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}
