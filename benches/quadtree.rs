use chizu::mesh::{voronoi_cell_polygons, SiteGrid};
use chizu::{World, WorldConfig, WorldSource};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use egui::{vec2, Pos2};

const SPACING: u32 = 10;

fn generated_source(side: u32) -> (WorldConfig, WorldSource, Vec<Pos2>) {
    let grid = SiteGrid::new(side, side, SPACING, 7);
    let sites = grid.all_sites();
    let interior = grid.interior_count();

    let corners = voronoi_cell_polygons(&sites, interior);
    let heights = vec![0.5; interior];
    let biomes = vec![0.0; interior];

    let config = WorldConfig {
        size: vec2(side as f32, side as f32),
        scale: vec2(1.0, 1.0),
        leaf_size: SPACING as f32,
    };
    let source = WorldSource {
        corners,
        heights,
        biomes,
        ..Default::default()
    };
    (config, source, sites)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("World Build");

    for &side in &[320, 1000] {
        let (config, source, _) = generated_source(side);
        let cells = source.corners.len();
        group.bench_function(format!("build_{}", cells), |b| {
            b.iter(|| {
                black_box(World::build(config, source.clone()).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_at_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("Point Location");

    for &side in &[320, 1000] {
        let (config, source, sites) = generated_source(side);
        let cells = source.corners.len();
        let world = World::build(config, source).unwrap();
        let store = world.cells();

        let mut cursor = 0;
        group.bench_function(format!("at_point_{}", cells), |b| {
            b.iter(|| {
                cursor = (cursor + 1) % cells;
                black_box(store.at_point(sites[cursor]));
            });
        });
    }

    group.finish();
}

fn bench_find_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("Neighbor Query");

    for &side in &[320, 1000] {
        let (config, source, _) = generated_source(side);
        let cells = source.corners.len();
        let world = World::build(config, source).unwrap();
        let store = world.cells();

        let mut cursor = 0;
        group.bench_function(format!("find_neighbors_{}", cells), |b| {
            b.iter(|| {
                cursor = (cursor + 1) % cells;
                black_box(store.find_neighbors(store.cell(cursor as u32)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_at_point, bench_find_neighbors);
criterion_main!(benches);
