use criterion::{measurement::Measurement, Criterion};
use rshamir::{api::recover, document::ShareDocument, shamir::RecoveryOptions};

const TESTCASE_2: &str = include_str!("../data/testcase2.json");

/// Benchmarking api functions, i.e. document parsing, decoding and recovery
pub(crate) fn api_benchmark<M: Measurement>(c: &mut Criterion<M>) {
    let mut group = c.benchmark_group("api");

    group.bench_function("ShareDocument::from_json", |b| {
        b.iter(|| ShareDocument::from_json(TESTCASE_2))
    });

    let document = ShareDocument::from_json(TESTCASE_2).unwrap();
    group.bench_function("ShareDocument::decode_shares", |b| {
        b.iter(|| document.decode_shares())
    });

    let options = RecoveryOptions::default();
    group.bench_function("recover", |b| b.iter(|| recover(&document, &options)));

    group.finish();
}
