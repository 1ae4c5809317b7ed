use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sugerir::recommend::ContentRanker;

fn generate_tag_corpus(n: usize) -> Vec<(String, String)> {
    let genres = [
        "action", "comedy", "drama", "thriller", "horror", "romance", "scifi", "fantasy",
        "mystery", "adventure",
    ];
    let settings = [
        "space", "desert", "city", "ocean", "jungle", "arctic", "underground", "island",
        "mountain", "orbit",
    ];
    let themes = [
        "survival", "revenge", "heist", "discovery", "betrayal", "escape", "rivalry",
        "redemption", "conspiracy", "exile",
    ];

    (0..n)
        .map(|i| {
            let genre = genres[i % genres.len()];
            let setting = settings[(i / 10) % settings.len()];
            let theme = themes[(i / 100) % themes.len()];
            let title = format!("movie_{i}");
            let tags = format!("{genre} {setting} {theme}");
            (title, tags)
        })
        .collect()
}

fn build_ranker(n: usize) -> ContentRanker {
    let mut ranker = ContentRanker::new();
    for (title, tags) in generate_tag_corpus(n) {
        ranker.add_item(title, tags);
    }
    ranker
}

fn bench_fit_and_first_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_cold");

    for size in [100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut ranker = build_ranker(size);
                let ranked = ranker
                    .rank(black_box("movie_0"), 5)
                    .expect("title exists");
                black_box(ranked)
            });
        });
    }

    group.finish();
}

fn bench_warm_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_warm");

    for size in [100, 1_000].iter() {
        let mut ranker = build_ranker(*size);
        // Populate the vector cache outside the measured loop
        ranker.rank("movie_0", 5).expect("title exists");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let ranked = ranker
                    .rank(black_box("movie_1"), 5)
                    .expect("title exists");
                black_box(ranked)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit_and_first_query, bench_warm_query);
criterion_main!(benches);
