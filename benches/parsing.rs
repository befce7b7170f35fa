//! Benchmarks for linkpack link parsing and normalization.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse_link`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use linkpack::error::FetchError;
use linkpack::link::{ChatTarget, parse_link, split_links};
use linkpack::post::{EntityKind, MediaKind, RawPost, Reaction};
use linkpack::record::normalize;
use linkpack::retrieve::{Fetcher, retrieve_batch};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_links(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!("https://t.me/channel_{}/{}", i % 50, i + 1),
            1 => format!("t.me/c/{}/{}", 1_500_000_000 + i as i64, i + 1),
            _ => format!("t.me/other_{}/{}", i % 20, i + 1),
        })
        .collect()
}

fn generate_post(id: i64) -> RawPost {
    RawPost::new(id)
        .with_text("A channel post with some body text for benchmarking")
        .with_media(MediaKind::Photo)
        .with_views(12345)
        .with_forwards(67)
        .with_reaction(Reaction::new("👍", 100))
        .with_reaction(Reaction::new("❤", 42))
        .with_reaction(Reaction::new("🔥", 7))
        .with_entity(EntityKind::Bold)
        .with_entity(EntityKind::Url)
        .with_entity(EntityKind::Mention)
}

struct BenchFetcher;

impl Fetcher for BenchFetcher {
    fn fetch(
        &mut self,
        _target: &ChatTarget,
        message_id: i64,
    ) -> Result<Option<RawPost>, FetchError> {
        Ok(Some(generate_post(message_id)))
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_link");

    group.bench_function("username", |b| {
        b.iter(|| parse_link(black_box("https://t.me/somechannel/2394725")));
    });
    group.bench_function("chat_id", |b| {
        b.iter(|| parse_link(black_box("t.me/c/1567469683/2394725")));
    });
    group.bench_function("unrecognised", |b| {
        b.iter(|| parse_link(black_box("https://example.com/not/a/post")));
    });

    group.finish();
}

fn bench_split_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_links");

    for count in [10, 100, 1000] {
        let input = generate_links(count).join(", ");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| split_links(black_box(input)));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let bare = RawPost::new(1);
    group.bench_function("bare", |b| {
        b.iter(|| normalize(black_box("somechannel"), black_box(&bare)));
    });

    let rich = generate_post(1);
    group.bench_function("rich", |b| {
        b.iter(|| normalize(black_box("somechannel"), black_box(&rich)));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieve_batch");

    for count in [10, 100, 1000] {
        let links = generate_links(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &links, |b, links| {
            b.iter(|| retrieve_batch(black_box(links), &mut BenchFetcher));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_link,
    bench_split_links,
    bench_normalize,
    bench_batch
);
criterion_main!(benches);
