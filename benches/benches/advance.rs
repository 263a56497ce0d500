//! Benchmark suite for sheet decoding and frame playback
//!
//! Measures how fast exported sheet descriptions decode and how much a call to
//! `Playback::advance` costs at typical and extreme frame deltas.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sheetplay_benches::{generate_export_json, generate_sheet, sizes};
use sheetplay_types::{
	playback::Playback,
	sheet::{DecodeConfig, Sheet},
};
use std::hint::black_box;

/// Benchmark decoding of generated export descriptions
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_decode");

	for (name, (frames, tag_len)) in
		[("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)]
	{
		let json = generate_export_json(frames, tag_len);
		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_json_str", name), &json, |b, json| {
			b.iter(|| {
				let result = Sheet::from_json_str(black_box(json), &DecodeConfig::default());
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark one second of playback at 60 updates per second
fn bench_advance_per_frame(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_advance");
	let (frames, tag_len) = sizes::MEDIUM;
	let sheet = generate_sheet(frames, tag_len);

	group.throughput(Throughput::Elements(60));

	group.bench_function("simple_60hz", |b| {
		b.iter(|| {
			let mut playback = Playback::simple(&sheet);
			for _ in 0..60 {
				black_box(playback.advance(black_box(1.0 / 60.0)));
			}
		});
	});

	group.bench_function("tag_chain_60hz", |b| {
		b.iter(|| {
			let mut playback = Playback::for_tag_id(&sheet, 0).unwrap();
			for _ in 0..60 {
				black_box(playback.advance(black_box(1.0 / 60.0)));
			}
		});
	});

	group.bench_function("tag_chain_reversed_60hz", |b| {
		b.iter(|| {
			let mut playback = Playback::for_tag_id(&sheet, 0).unwrap();
			playback.set_speed(-1.5);
			for _ in 0..60 {
				black_box(playback.advance(black_box(1.0 / 60.0)));
			}
		});
	});

	group.finish();
}

/// Benchmark large deltas that cross many frames in one call
fn bench_advance_large_delta(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_large_delta");
	let (frames, tag_len) = sizes::LARGE;
	let sheet = generate_sheet(frames, tag_len);

	for seconds in [1.0_f32, 10.0, 60.0] {
		group.bench_with_input(BenchmarkId::new("advance", seconds), &seconds, |b, &seconds| {
			b.iter(|| {
				let mut playback = Playback::for_tag_id(&sheet, 0).unwrap();
				black_box(playback.advance(black_box(seconds)))
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_decode, bench_advance_per_frame, bench_advance_large_delta);
criterion_main!(benches);
