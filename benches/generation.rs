use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordsearch::generation::utils::create_rng;
use wordsearch::{DifficultyProfile, GenerationConfig, Generator, PuzzleGenerator};

fn bench_config() -> GenerationConfig {
    let words = [
        "export", "import", "invoice", "shipment", "freight", "customs", "tariff", "cargo",
        "manifest", "pallet", "harbour", "broker",
    ];
    GenerationConfig::new(15, 15, words.iter().map(|w| w.to_string()).collect())
        .with_profile(&DifficultyProfile::Extreme)
        .with_seed(42)
}

fn bench_generation(c: &mut Criterion) {
    let config = bench_config();

    c.bench_function("random_retry_15x15", |b| {
        let generator = PuzzleGenerator::new();
        b.iter(|| {
            let mut rng = create_rng(&config);
            black_box(generator.generate(&config, &mut rng).unwrap())
        })
    });

    c.bench_function("best_fit_15x15", |b| {
        let generator = PuzzleGenerator::best_fit();
        b.iter(|| {
            let mut rng = create_rng(&config);
            black_box(generator.generate(&config, &mut rng).unwrap())
        })
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
