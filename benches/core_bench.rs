use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hn_substrate_designer::core::dense_candidates;
use hn_substrate_designer::{write_substrate_json, GridPoint, Layer, NodeKind, Substrate};
use std::hint::black_box;

/// Quadratische Auswahl `side × side` um den Ursprung.
fn build_square_selection(side: i32) -> Vec<GridPoint> {
    let half = side / 2;
    (-half..=half)
        .flat_map(|y| (-half..=half).map(move |x| GridPoint::new(x, y)))
        .collect()
}

fn build_synthetic_substrate(side: i32) -> Substrate {
    let mut substrate = Substrate::new();
    let half = side / 2;

    for x in -half..=half {
        substrate.toggle_node(NodeKind::Input, GridPoint::new(x, -half));
        substrate.toggle_node(NodeKind::Output, GridPoint::new(x, half));
    }

    let selection = build_square_selection(side);
    substrate.add_dense_connections(&selection);
    if let Ok(layer) = Layer::from_selection(&selection) {
        substrate.push_layer(layer);
    }

    substrate
}

fn bench_dense_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_generation");

    for &side in &[5i32, 11, 25] {
        let selection = build_square_selection(side);
        group.bench_with_input(
            BenchmarkId::new("candidates", selection.len()),
            &selection,
            |b, selection| b.iter(|| black_box(dense_candidates(black_box(selection)).len())),
        );
        group.bench_with_input(
            BenchmarkId::new("add_to_empty_substrate", selection.len()),
            &selection,
            |b, selection| {
                b.iter(|| {
                    let mut substrate = Substrate::new();
                    black_box(substrate.add_dense_connections(black_box(selection)))
                })
            },
        );
    }

    group.finish();
}

fn bench_hidden_nodes(c: &mut Criterion) {
    let substrate = build_synthetic_substrate(11);

    c.bench_function("hidden_nodes_11x11_dense", |b| {
        b.iter(|| black_box(substrate.hidden_nodes().len()))
    });
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_json");

    for &side in &[5i32, 11] {
        let substrate = build_synthetic_substrate(side);
        group.bench_with_input(
            BenchmarkId::from_parameter(substrate.connection_count()),
            &substrate,
            |b, substrate| {
                b.iter(|| {
                    let json = write_substrate_json(black_box(substrate)).expect("Export failed");
                    black_box(json.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_dense_generation, bench_hidden_nodes, bench_export);
criterion_main!(core_benches);
