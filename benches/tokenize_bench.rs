use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

use compound_tokenizer::{Decomposer, Lexicon, Tokenizer, TokenizerConfig};

const COMPONENTS: &[&str] = &[
    "brand", "schutz", "konzept", "stahl", "beton", "decke", "wärme", "dämmung", "dämm",
    "verbund", "system", "haus", "tür", "fenster", "rahmen", "dach", "ziegel", "wand",
];

const TEXT: &str = "Das Brandschutzkonzept für die Stahlbetondecke sieht ein \
    Wärmedämmverbundsystem vor. Die Haustür und der Fensterrahmen werden \
    getauscht, die Dachziegel bleiben. Brandschutz, Wärmedämmung, Wandbeton.";

struct BenchEnv {
    _tmp: TempDir,
    lexicon: Arc<Lexicon>,
}

fn build_env(filler: usize) -> BenchEnv {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lexicon.txt");

    let mut contents = String::new();
    for word in COMPONENTS {
        contents.push_str(word);
        contents.push('\n');
    }
    for i in 0..filler {
        contents.push_str(&format!("filler{:06}\n", i));
    }
    std::fs::write(&path, contents).unwrap();

    let lexicon = Arc::new(Lexicon::load(&path).unwrap());
    BenchEnv { _tmp: tmp, lexicon }
}

fn bench_tokenize(c: &mut Criterion) {
    let env = build_env(10_000);
    let mut group = c.benchmark_group("tokenize");

    for cache in [true, false] {
        let config = TokenizerConfig::default().with_cache(cache);
        let tokenizer = Tokenizer::with_lexicon(env.lexicon.clone(), &config).unwrap();
        let label = if cache { "cached" } else { "uncached" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(tokenizer.tokenize(black_box(TEXT))));
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let sizes = [1_000usize, 10_000, 100_000];
    let envs: Vec<(usize, BenchEnv)> = sizes.iter().map(|&n| (n, build_env(n))).collect();

    let mut group = c.benchmark_group("split_uncached");
    for (size, env) in envs.iter() {
        let splitter = Decomposer::without_cache(env.lexicon.clone());
        group.bench_with_input(BenchmarkId::from_parameter(size), &splitter, |b, s| {
            b.iter(|| black_box(s.split(black_box("wärmedämmverbundsystem"))));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("split_cached");
    for (size, env) in envs.iter() {
        let splitter = Decomposer::new(env.lexicon.clone());
        group.bench_with_input(BenchmarkId::from_parameter(size), &splitter, |b, s| {
            b.iter(|| black_box(s.split(black_box("wärmedämmverbundsystem"))));
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let env = build_env(100_000);
    c.bench_function("contains", |b| {
        b.iter(|| {
            black_box(env.lexicon.contains(black_box("verbund")));
            black_box(env.lexicon.contains(black_box("unbekannt")));
        });
    });
}

fn bench_add_word(c: &mut Criterion) {
    let env = build_env(10_000);
    let mut next = 0u64;
    c.bench_function("add_word_rebuild", |b| {
        b.iter(|| {
            next += 1;
            black_box(env.lexicon.add_word(&format!("neu{}", next)).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_split,
    bench_contains,
    bench_add_word
);
criterion_main!(benches);
