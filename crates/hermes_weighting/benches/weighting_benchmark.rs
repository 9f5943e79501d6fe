use std::{hint::black_box, sync::Arc};

use criterion::{Criterion, criterion_group, criterion_main};
use hermes_weighting::{
    base_edge::BaseEdge,
    ch::{ch_edge::CHGraphEdge, routing_ch_edge::RoutingCHEdge, shortcut::Shortcut},
    edge_direction::EdgeDirection,
    encoding_manager::EncodingManager,
    kmh::Kmh,
    meters::Meters,
    properties::{property::Property, property_map::EdgePropertyMap},
    turn_cost::{
        default_turn_cost_provider::DefaultTurnCostProvider, turn_cost_table::TurnCostTable,
    },
    vehicle_profile::VehicleProfile,
    weighting::{Weighting, fastest_weighting::FastestWeighting, query_weighting::QueryWeighting},
};

fn create_edges(count: usize) -> Vec<BaseEdge> {
    (0..count)
        .map(|id| {
            let speed = 30.0 + (id % 10) as f64 * 10.0;
            let mut properties = EdgePropertyMap::new();
            for direction in [EdgeDirection::Forward, EdgeDirection::Backward] {
                properties.insert_bool(
                    Property::VehicleAccess("car".to_string()),
                    direction,
                    true,
                );
                properties.insert_f64(Property::VehicleSpeed("car".to_string()), direction, speed);
            }
            BaseEdge::new(id, id, id + 1, Meters::new(100.0 + id as f64), properties)
        })
        .collect()
}

fn create_turn_cost_table(count: usize) -> Arc<TurnCostTable> {
    let mut table = TurnCostTable::new();
    for id in (0..count).step_by(3) {
        table.add_turn_cost(id, id + 1, id + 1, 5.0).unwrap();
    }
    Arc::new(table)
}

fn weighting_benchmark(c: &mut Criterion) {
    let manager = EncodingManager::new(vec![VehicleProfile::new("car", Kmh::new(140.0))]).unwrap();
    let car = manager.vehicle("car").unwrap();
    let edges = create_edges(10_000);
    let table = create_turn_cost_table(edges.len());

    let weighting = FastestWeighting::with_turn_costs(
        car,
        DefaultTurnCostProvider::new(table.clone(), Some(40.0)).unwrap(),
    )
    .unwrap();

    c.bench_function("calc_weight_with_turn_costs", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for window in edges.windows(2) {
                total += weighting.calc_weight(
                    &window[1].forward(),
                    EdgeDirection::Forward,
                    window[0].id(),
                );
            }
            black_box(total)
        })
    });

    c.bench_function("calc_ms", |b| {
        b.iter(|| {
            let mut total = 0;
            for edge in edges.iter() {
                total += weighting
                    .calc_edge_ms(&edge.forward(), EdgeDirection::Forward)
                    .unwrap();
            }
            black_box(total)
        })
    });

    let query_weighting =
        QueryWeighting::new(&weighting, DefaultTurnCostProvider::new(table, None).unwrap());
    c.bench_function("query_weighting_calc_weight", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for window in edges.windows(2) {
                total += query_weighting.calc_weight(
                    &window[1].forward(),
                    EdgeDirection::Forward,
                    window[0].id(),
                );
            }
            black_box(total)
        })
    });

    let shortcuts: Vec<Shortcut> = (0..edges.len() - 1)
        .map(|id| Shortcut {
            id: edges.len() + id,
            start: id,
            end: id + 2,
            incoming_edge: id,
            outgoing_edge: id + 1,
            orig_edge_first: id,
            orig_edge_last: id + 1,
            distance: Meters::new(200.0),
            weight: 20.0,
        })
        .collect();

    c.bench_function("routing_ch_edge_weight", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for (edge, shortcut) in edges.iter().zip(shortcuts.iter()) {
                total += RoutingCHEdge::new(CHGraphEdge::Edge(edge.forward()), &weighting)
                    .weight(EdgeDirection::Forward);
                total += RoutingCHEdge::new(CHGraphEdge::Shortcut(shortcut), &weighting)
                    .weight(EdgeDirection::Forward);
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, weighting_benchmark);
criterion_main!(benches);
