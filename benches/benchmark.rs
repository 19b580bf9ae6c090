// Performance benchmarks for loading, recommendation and trending
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use showgraph::prelude::*;

const GENRES: [&str; 8] = [
    "Action", "Adventure", "Animation", "Comedy", "Drama", "Family", "Horror", "Sport",
];
const TAGS: [&str; 6] = ["G", "PG", "PG-13", "R", "TV-PG", "TV-14"];

fn generate_random_record(rng: &mut StdRng, id: usize) -> ItemRecord {
    let count = rng.random_range(1..=3);
    let genres = GENRES
        .choose_multiple(rng, count)
        .map(|g| g.to_string())
        .collect();
    ItemRecord {
        id: format!("tt{:07}", id),
        kind: if rng.random_bool(0.7) { ItemKind::Movie } else { ItemKind::Series },
        title: format!("Title {}", id),
        rating: (rng.random_range(10..=100) as f64) / 10.0,
        release_year: rng.random_range(1950..=2024),
        content_rating: TAGS[rng.random_range(0..TAGS.len())].to_string(),
        genres,
        duration: rng.random_range(80..=180).to_string(),
    }
}

fn generate_catalogue(size: usize) -> Vec<ItemRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|id| generate_random_record(&mut rng, id)).collect()
}

fn populated_graph(items: usize, viewers: usize) -> Graph {
    let records = generate_catalogue(items);
    let item_ids: Vec<VertexId> = records.iter().map(|r| r.id.clone()).collect();
    let viewer_ids: Vec<VertexId> = (0..viewers).map(|i| format!("u{}", i)).collect();
    let edges = SyntheticWatchHistory::with_seed(7)
        .generate(&viewer_ids, &item_ids)
        .unwrap();
    let loader = GraphLoader::new(LoaderConfig::default()).unwrap();
    loader.load(records, viewer_ids, &edges).unwrap().0
}

fn benchmark_threshold_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.sample_size(10);

    for size in [100, 500, 1000].iter() {
        let records = generate_catalogue(*size);
        let loader = GraphLoader::new(LoaderConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("threshold_edges", size), size, |b, _| {
            b.iter(|| {
                let loaded = loader.load(records.clone(), Vec::new(), &[]).unwrap();
                black_box(loaded);
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let graph = populated_graph(2000, 0);
    let recommender = Recommender::new(&graph);
    let anchor = Anchor::Id("tt0000000".to_string());

    for kind in [ScoreKind::Genre, ScoreKind::Composite] {
        group.bench_with_input(BenchmarkId::new("anchor", kind), &kind, |b, &kind| {
            b.iter(|| {
                let results = recommender.recommend(black_box(&anchor), 10, kind).unwrap();
                black_box(results);
            });
        });
    }

    let band = RatingBand::new(7, 10).unwrap();
    let query = ProfileQuery::new(ItemKind::Movie, ["Comedy", "Family"], band);
    group.bench_function("profile", |b| {
        b.iter(|| black_box(recommender.recommend_by_profile(black_box(&query), 10)));
    });

    group.finish();
}

fn benchmark_trending(c: &mut Criterion) {
    let mut group = c.benchmark_group("trending");
    group.sample_size(20);

    for viewers in [100, 1000].iter() {
        let graph = populated_graph(500, *viewers);
        group.bench_with_input(BenchmarkId::new("viewers", viewers), viewers, |b, _| {
            b.iter(|| black_box(TrendingAnalyzer::new(&graph).trending()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_threshold_load, benchmark_recommend, benchmark_trending);
criterion_main!(benches);
