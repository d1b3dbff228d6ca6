// Criterion benchmarks for ServiceLink Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use servicelink_match::core::fuzzy_contains;
use servicelink_match::{InterestMatcher, Profile};

const CATEGORIES: &[&str] = &["سباكة", "كهرباء", "تصوير", "قانون", "تنظيف"];
const CITIES: &[&str] = &["Riyadh", "جدة", "الدمام", "كل المدن"];

fn create_profile(id: usize) -> Profile {
    Profile {
        id: format!("U{id}"),
        role: None,
        interested_categories: if id % 7 == 0 {
            vec![]
        } else {
            vec![
                CATEGORIES[id % CATEGORIES.len()].to_string(),
                CATEGORIES[(id / 2) % CATEGORIES.len()].to_string(),
            ]
        },
        interested_cities: vec![CITIES[id % CITIES.len()].to_string()],
    }
}

fn bench_fuzzy_contains(c: &mut Criterion) {
    c.bench_function("fuzzy_contains", |b| {
        b.iter(|| fuzzy_contains(black_box("قانوني"), black_box("قانون")));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = InterestMatcher::new();
    let request_categories = vec!["سباكة".to_string()];

    let mut group = c.benchmark_group("matching");

    for profile_count in [10, 100, 1000, 10_000].iter() {
        let profiles: Vec<Profile> = (0..*profile_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("match_profiles", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| {
                    matcher.match_profiles(
                        black_box(&profiles),
                        black_box(&request_categories),
                        black_box(Some("Riyadh")),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_categoryless_request(c: &mut Criterion) {
    let matcher = InterestMatcher::new();
    let profiles: Vec<Profile> = (0..1000).map(create_profile).collect();

    c.bench_function("match_profiles_no_categories_1000", |b| {
        b.iter(|| matcher.match_profiles(black_box(&profiles), black_box(&[]), black_box(None)));
    });
}

criterion_group!(
    benches,
    bench_fuzzy_contains,
    bench_matching,
    bench_categoryless_request
);

criterion_main!(benches);
