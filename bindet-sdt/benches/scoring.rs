use bindet_core::{Response, TrialRecord};
use bindet_sdt::{AnalysisConfig, Scorer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_session(participants: usize, pictures: u32, seed: u64) -> Vec<TrialRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();
    for _ in 0..participants {
        for i in 0..pictures {
            for (letter, p_yes) in [('R', 0.9), ('G', 0.7), ('N', 0.15)] {
                let response = if rng.random_bool(p_yes) {
                    Response::Yes
                } else {
                    Response::No
                };
                let rt = rng.random_range(300..1200);
                records.push(TrialRecord::new(
                    format!("Block {}", 1 + i % 3),
                    format!("{letter}{i:03}"),
                    response,
                    rt,
                ));
            }
        }
    }
    records
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = Scorer::new(AnalysisConfig::default()).unwrap();
    let records = synthetic_session(40, 50, 7);

    c.bench_function("tally_6000_trials", |b| {
        b.iter(|| scorer.tally(black_box(&records)).unwrap())
    });

    c.bench_function("score_6000_trials", |b| {
        b.iter(|| scorer.score(black_box(&records)).unwrap().contrast)
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
