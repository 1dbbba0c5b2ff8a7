//! Integration test: route discovery followed by settlement, end to end.

use lnsim_core::{NodeId, Policy};
use lnsim_integration_tests::{assert_conservation, build_graph, init_tracing};
use lnsim_routing::RouteFinder;
use lnsim_settlement::{settle, SettlementOutcome};

fn node(id: &str) -> NodeId {
    NodeId::from(id)
}

#[test]
fn test_single_channel_payment_and_depletion() {
    init_tracing();
    // Capacity 1000, all on a's side, zero fees.
    let mut graph = build_graph(&[(
        "chan-1",
        "a",
        "b",
        1_000,
        0,
        Policy::free(),
        Policy::free(),
    )]);
    let finder = RouteFinder::with_defaults();

    let route = finder
        .find_route(&graph, &node("a"), &node("b"), 100)
        .unwrap()
        .expect("single-hop route");
    assert_eq!(route.hop_count(), 1);

    let outcome = settle(&mut graph, 100, &route).unwrap();
    assert!(outcome.is_settled());
    let channel = graph
        .channel(&lnsim_core::ChannelId::from("chan-1"))
        .unwrap();
    assert_eq!((channel.balance_a(), channel.balance_b()), (900, 100));

    // b now holds only 100; routing finds the reverse route, but pushing
    // more than b's balance through it must fail without mutating state.
    let back = finder
        .find_route(&graph, &node("b"), &node("a"), 101)
        .unwrap()
        .expect("reverse route exists");
    let outcome = settle(&mut graph, 101, &back).unwrap();
    assert!(matches!(
        outcome,
        SettlementOutcome::InsufficientFunds { hop_index: 0 }
    ));
    let channel = graph
        .channel(&lnsim_core::ChannelId::from("chan-1"))
        .unwrap();
    assert_eq!((channel.balance_a(), channel.balance_b()), (900, 100));
    assert_conservation(&graph);
}

#[test]
fn test_three_node_chain_with_forwarding_fee() {
    init_tracing();
    // a - b - c, each channel 500/500; b charges 5 base fee toward c.
    let mut graph = build_graph(&[
        ("chan-1", "a", "b", 500, 500, Policy::free(), Policy::free()),
        (
            "chan-2",
            "b",
            "c",
            500,
            500,
            Policy::new(5, 0.0, 0),
            Policy::free(),
        ),
    ]);
    let finder = RouteFinder::with_defaults();

    let route = finder
        .find_route(&graph, &node("a"), &node("c"), 100)
        .unwrap()
        .expect("chain route");
    assert_eq!(route.amount_to_send, 105, "a must cover b's forwarding fee");

    let outcome = settle(&mut graph, 100, &route).unwrap();
    let receipt = outcome.receipt().expect("should settle");
    assert_eq!(receipt.amount_sent, 105);
    assert_eq!(receipt.amount_delivered, 100);
    assert_eq!(receipt.total_fees, 5);

    // b gains 105 on the a-side channel, forwards 100 on the c-side one.
    assert_eq!(graph.node_balance(&node("b")).unwrap(), 1_005);
    assert_eq!(graph.node_balance(&node("a")).unwrap(), 395);
    assert_eq!(graph.node_balance(&node("c")).unwrap(), 600);
    assert_conservation(&graph);
}

#[test]
fn test_found_route_settles_when_liquidity_suffices() {
    init_tracing();
    // Generous balances everywhere: whatever route is found must settle.
    let mut graph = build_graph(&[
        (
            "chan-1",
            "a",
            "b",
            50_000,
            50_000,
            Policy::new(10, 0.001, 40),
            Policy::new(20, 0.002, 80),
        ),
        (
            "chan-2",
            "b",
            "c",
            50_000,
            50_000,
            Policy::new(5, 0.0005, 20),
            Policy::free(),
        ),
        (
            "chan-3",
            "a",
            "c",
            50_000,
            50_000,
            Policy::new(500, 0.01, 140),
            Policy::default(),
        ),
    ]);
    let finder = RouteFinder::with_defaults();

    let route = finder
        .find_route(&graph, &node("a"), &node("c"), 1_000)
        .unwrap()
        .expect("route should exist");
    let outcome = settle(&mut graph, 1_000, &route).unwrap();
    assert!(outcome.is_settled());
    assert_conservation(&graph);
}

#[test]
fn test_fee_monotonicity() {
    init_tracing();
    let graph = build_graph(&[
        ("chan-1", "a", "b", 50_000, 50_000, Policy::free(), Policy::free()),
        (
            "chan-2",
            "b",
            "c",
            50_000,
            50_000,
            Policy::new(3, 0.0, 0),
            Policy::free(),
        ),
    ]);
    let finder = RouteFinder::with_defaults();

    // Zero-fee route: source sends exactly what the target receives.
    let free = finder
        .find_route(&graph, &node("a"), &node("b"), 500)
        .unwrap()
        .unwrap();
    assert_eq!(free.amount_to_send, free.amount);

    // A route crossing a charging hop: strictly more.
    let charged = finder
        .find_route(&graph, &node("a"), &node("c"), 500)
        .unwrap()
        .unwrap();
    assert!(charged.amount_to_send > charged.amount);
}

#[test]
fn test_settling_same_route_twice_is_two_payments() {
    init_tracing();
    let mut graph = build_graph(&[(
        "chan-1",
        "a",
        "b",
        250,
        0,
        Policy::free(),
        Policy::free(),
    )]);
    let finder = RouteFinder::with_defaults();
    let route = finder
        .find_route(&graph, &node("a"), &node("b"), 100)
        .unwrap()
        .unwrap();

    assert!(settle(&mut graph, 100, &route).unwrap().is_settled());
    // Re-applying the route is an independent second payment.
    assert!(settle(&mut graph, 100, &route).unwrap().is_settled());
    // The third exceeds a's remaining 50.
    assert!(matches!(
        settle(&mut graph, 100, &route).unwrap(),
        SettlementOutcome::InsufficientFunds { hop_index: 0 }
    ));
    assert_eq!(graph.node_balance(&node("a")).unwrap(), 50);
    assert_eq!(graph.node_balance(&node("b")).unwrap(), 200);
}
