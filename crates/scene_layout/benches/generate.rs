mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_layout::layout::generator::generate;
use scene_layout::layout::rule::PlacementRule;
use scene_layout::layout::Kind;
use scene_layout::random::ScriptedSource;

const GRID_SIDES: [i32; 4] = [6, 32, 128, 512];

fn generate_seeded_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/seeded");

    for &side in &GRID_SIDES {
        let rule = PlacementRule::grid(Kind::Tree, side, side)
            .with_origin(-25.0, 50.0)
            .with_spacing(10.0, 10.0)
            .with_scale_range(0.9, 1.2);
        group.throughput(common::placements(rule.cell_count()));

        let mut rng = StdRng::seed_from_u64(0xA11CE_u64 ^ side as u64);
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let out = generate(&rule, &mut rng).expect("valid rule");
                black_box(out.len());
            });
        });
    }

    group.finish();
}

fn generate_scripted_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/scripted");

    for &side in &GRID_SIDES {
        let rule = PlacementRule::grid(Kind::Tree, side, side).with_scale_range(0.9, 1.2);
        group.throughput(common::placements(rule.cell_count()));

        let mut source = ScriptedSource::new([0.1, 0.5, 0.9]);
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let out = generate(&rule, &mut source).expect("valid rule");
                black_box(out.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::layout_criterion();
    targets = generate_seeded_benches, generate_scripted_benches
}
criterion_main!(benches);
