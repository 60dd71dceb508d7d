// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use movie_sampler::specs::title;

const URL: &str = "https://www.imdb.com/title/tt2278388/";

fn bench_extract(c: &mut Criterion) {
    let linked = include_str!("../tests/fixtures/title_jsonld.html");
    let fallback = include_str!("../tests/fixtures/title_fallback.html");

    c.bench_function("title_linked_data", |b| {
        b.iter(|| {
            let fields = title::extract(URL, black_box(linked));
            black_box(fields.runtime)
        })
    });

    c.bench_function("title_techspec_fallback", |b| {
        b.iter(|| {
            let fields = title::extract(URL, black_box(fallback));
            black_box(fields.runtime)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
