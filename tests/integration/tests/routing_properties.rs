//! Integration test: route-level properties across finder variants.

use lnsim_core::{NodeId, Policy};
use lnsim_integration_tests::{build_graph, init_tracing};
use lnsim_routing::{naive, RouteFinder, RouteFinderConfig};

fn node(id: &str) -> NodeId {
    NodeId::from(id)
}

#[test]
fn test_disconnected_pair_yields_no_route() {
    init_tracing();
    let mut graph = build_graph(&[(
        "chan-1",
        "a",
        "b",
        500,
        500,
        Policy::free(),
        Policy::free(),
    )]);
    graph.add_node(node("island")).unwrap();

    let finder = RouteFinder::with_defaults();
    assert!(finder
        .find_route(&graph, &node("a"), &node("island"), 100)
        .unwrap()
        .is_none());
    assert!(naive::find_route(&graph, &node("a"), &node("island"), 100, 0.0)
        .unwrap()
        .is_none());
}

#[test]
fn test_hop_budget_boundary() {
    init_tracing();
    // The only a→c path has two hops.
    let graph = build_graph(&[
        ("chan-1", "a", "b", 500, 500, Policy::free(), Policy::free()),
        ("chan-2", "b", "c", 500, 500, Policy::free(), Policy::free()),
    ]);

    let one_hop = RouteFinder::new(RouteFinderConfig {
        max_hops: 1,
        ..RouteFinderConfig::default()
    });
    assert!(one_hop
        .find_route(&graph, &node("a"), &node("c"), 100)
        .unwrap()
        .is_none());

    let two_hops = RouteFinder::new(RouteFinderConfig {
        max_hops: 2,
        ..RouteFinderConfig::default()
    });
    let route = two_hops
        .find_route(&graph, &node("a"), &node("c"), 100)
        .unwrap()
        .expect("fits the budget exactly");
    assert_eq!(route.hop_count(), 2);
}

#[test]
fn test_routes_never_repeat_nodes() {
    init_tracing();
    // A ring with a chord, plenty of cycles to get wrong.
    let graph = build_graph(&[
        ("chan-1", "a", "b", 5_000, 5_000, Policy::new(1, 0.0, 10), Policy::free()),
        ("chan-2", "b", "c", 5_000, 5_000, Policy::new(2, 0.0, 20), Policy::free()),
        ("chan-3", "c", "d", 5_000, 5_000, Policy::new(3, 0.0, 30), Policy::free()),
        ("chan-4", "d", "a", 5_000, 5_000, Policy::new(4, 0.0, 40), Policy::free()),
        ("chan-5", "a", "c", 5_000, 5_000, Policy::new(9, 0.0, 90), Policy::free()),
    ]);

    let finder = RouteFinder::with_defaults();
    for source in ["a", "b", "c", "d"] {
        for target in ["a", "b", "c", "d"] {
            if source == target {
                continue;
            }
            let route = finder
                .find_route(&graph, &node(source), &node(target), 100)
                .unwrap()
                .expect("ring is fully connected");
            let mut nodes = route.node_ids();
            let before = nodes.len();
            nodes.sort();
            nodes.dedup();
            assert_eq!(nodes.len(), before, "{source}→{target} repeated a node");
        }
    }
}

#[test]
fn test_dijkstra_never_costlier_than_naive() {
    init_tracing();
    // Naive takes the fewest hops; the weighted finder may take more
    // hops but must never pay more.
    let graph = build_graph(&[
        (
            "chan-1",
            "a",
            "c",
            50_000,
            50_000,
            Policy::new(1_000, 0.01, 100),
            Policy::free(),
        ),
        ("chan-2", "a", "b", 50_000, 50_000, Policy::free(), Policy::free()),
        ("chan-3", "b", "c", 50_000, 50_000, Policy::new(1, 0.0, 1), Policy::free()),
    ]);

    let finder = RouteFinder::with_defaults();
    let dijkstra = finder
        .find_route(&graph, &node("a"), &node("c"), 1_000)
        .unwrap()
        .unwrap();
    let naive = naive::find_route(
        &graph,
        &node("a"),
        &node("c"),
        1_000,
        finder.config().risk_factor,
    )
    .unwrap()
    .unwrap();

    assert_eq!(naive.hop_count(), 1);
    assert_eq!(dijkstra.hop_count(), 2);
    assert!(dijkstra.amount_to_send <= naive.amount_to_send);
    assert!(dijkstra.weight <= naive.weight);
}

#[test]
fn test_route_table_matches_individual_queries() {
    init_tracing();
    let graph = build_graph(&[
        ("chan-1", "a", "b", 5_000, 5_000, Policy::new(2, 0.0, 0), Policy::free()),
        ("chan-2", "b", "c", 5_000, 5_000, Policy::new(7, 0.0, 0), Policy::free()),
        ("chan-3", "c", "d", 5_000, 5_000, Policy::free(), Policy::free()),
    ]);

    let finder = RouteFinder::with_defaults();
    let table = finder.routes_to_target(&graph, &node("d"), 100).unwrap();
    assert_eq!(table.len(), 3);

    for source in ["a", "b", "c"] {
        let single = finder
            .find_route(&graph, &node(source), &node("d"), 100)
            .unwrap()
            .expect("reachable");
        let from_table = &table[&node(source)];
        assert_eq!(single.amount_to_send, from_table.amount_to_send);
        assert_eq!(single.hop_count(), from_table.hop_count());
    }
}
