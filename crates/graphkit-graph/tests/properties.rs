//! Property tests against `petgraph` as a reference implementation.

use std::collections::{HashMap, HashSet};

use petgraph::algo;
use petgraph::data::Element;
use petgraph::graph::NodeIndex;
use proptest::prelude::*;

use graphkit_graph::{
    bfs, component_count, connected_components, dfs, dijkstra, kruskal, kruskal_adjacency, prim,
    shortest_paths,
};

#[path = "generators.rs"]
mod generators;
use generators::*;

fn reference_reachable(g: &RandomGraph, start: usize) -> HashSet<usize> {
    let pg = g.petgraph();
    algo::dijkstra(&pg, NodeIndex::new(start), None, |_| 1usize)
        .into_keys()
        .map(NodeIndex::index)
        .collect()
}

fn reference_hops(g: &RandomGraph, start: usize) -> HashMap<usize, usize> {
    let pg = g.petgraph();
    algo::dijkstra(&pg, NodeIndex::new(start), None, |_| 1usize)
        .into_iter()
        .map(|(k, d)| (k.index(), d))
        .collect()
}

fn reference_mst_weight(g: &RandomGraph) -> f64 {
    let pg = g.petgraph();
    algo::min_spanning_tree(&pg)
        .filter_map(|el| match el {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Traversal

    #[test]
    fn bfs_visits_exactly_the_reachable_set((g, start) in arb_graph_and_start(14)) {
        let order = bfs(&g.adjacency(), &start).unwrap();
        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len(), "duplicate in {:?}", order);
        prop_assert_eq!(unique, reference_reachable(&g, start));
        prop_assert_eq!(order[0], start);
    }

    #[test]
    fn bfs_order_is_nondecreasing_in_hops((g, start) in arb_graph_and_start(14)) {
        let hops = reference_hops(&g, start);
        let order = bfs(&g.adjacency(), &start).unwrap();
        for pair in order.windows(2) {
            prop_assert!(hops[&pair[0]] <= hops[&pair[1]], "{:?} in {:?}", pair, order);
        }
    }

    #[test]
    fn dfs_visits_exactly_the_reachable_set((g, start) in arb_graph_and_start(14)) {
        let order = dfs(&g.adjacency(), &start).unwrap();
        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(unique, reference_reachable(&g, start));
        prop_assert_eq!(order[0], start);
    }

    #[test]
    fn dfs_each_vertex_hangs_off_an_earlier_one((g, start) in arb_graph_and_start(14)) {
        let adjacency = g.adjacency();
        let order = dfs(&adjacency, &start).unwrap();
        for (k, v) in order.iter().enumerate().skip(1) {
            let attached = order[..k].iter().any(|u| adjacency.weight(u, v).is_some());
            prop_assert!(attached, "{} has no visited parent in {:?}", v, order);
        }
    }

    #[test]
    fn traversal_is_idempotent((g, start) in arb_graph_and_start(10)) {
        let adjacency = g.adjacency();
        prop_assert_eq!(bfs(&adjacency, &start).unwrap(), bfs(&adjacency, &start).unwrap());
        prop_assert_eq!(dfs(&adjacency, &start).unwrap(), dfs(&adjacency, &start).unwrap());
    }

    // Shortest paths

    #[test]
    fn dijkstra_matches_reference((g, start) in arb_graph_and_start(14)) {
        let ours = dijkstra(&g.adjacency(), &start).unwrap();
        let pg = g.petgraph();
        let reference = algo::dijkstra(&pg, NodeIndex::new(start), None, |e| *e.weight());

        prop_assert_eq!(ours.len(), g.n);
        for (v, d) in &ours {
            match reference.get(&NodeIndex::new(*v)) {
                Some(expected) => prop_assert_eq!(*d, *expected, "vertex {}", v),
                None => prop_assert!(d.is_infinite(), "vertex {} should be unreachable", v),
            }
        }
    }

    #[test]
    fn path_weights_sum_to_distance((g, start) in arb_graph_and_start(14)) {
        let adjacency = g.adjacency();
        let sp = shortest_paths(&adjacency, &start).unwrap();
        for target in 0..g.n {
            let Some(path) = sp.path_to(&target) else {
                prop_assert!(!sp.is_reachable(&target));
                continue;
            };
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&target));
            let mut sum = 0.0;
            for hop in path.windows(2) {
                let w = adjacency.weight(&hop[0], &hop[1]);
                prop_assert!(w.is_some(), "no edge {:?}", hop);
                sum += w.unwrap_or_default();
            }
            prop_assert_eq!(Some(sum), sp.distance(&target));
        }
    }

    #[test]
    fn shortest_paths_are_idempotent((g, start) in arb_graph_and_start(12)) {
        let adjacency = g.adjacency();
        prop_assert_eq!(dijkstra(&adjacency, &start).unwrap(), dijkstra(&adjacency, &start).unwrap());
        prop_assert_eq!(
            shortest_paths(&adjacency, &start).unwrap(),
            shortest_paths(&adjacency, &start).unwrap()
        );
    }

    // Spanning trees

    #[test]
    fn spanning_trees_are_idempotent((g, start) in arb_graph_and_start(12)) {
        let adjacency = g.adjacency();
        let edges = adjacency.to_undirected_edge_list();
        prop_assert_eq!(kruskal(&edges).unwrap(), kruskal(&edges).unwrap());
        prop_assert_eq!(prim(&adjacency, &start).unwrap(), prim(&adjacency, &start).unwrap());
    }

    #[test]
    fn kruskal_weight_matches_reference(g in arb_graph(14)) {
        let forest = kruskal_adjacency(&g.adjacency()).unwrap();
        prop_assert_eq!(forest.total_weight(), reference_mst_weight(&g));
    }

    #[test]
    fn kruskal_result_is_a_spanning_forest(g in arb_graph(14)) {
        let adjacency = g.adjacency();
        let forest = kruskal_adjacency(&adjacency).unwrap();
        let pg = g.petgraph();

        prop_assert_eq!(forest.components, algo::connected_components(&pg));
        prop_assert_eq!(forest.len(), g.n - forest.components);
        prop_assert_eq!(forest.components, component_count(&adjacency));
    }

    #[test]
    fn prim_agrees_with_kruskal_on_connected_graphs(
        (g, start) in arb_connected_graph(14).prop_flat_map(|g| { let n = g.n; (Just(g), 0..n) })
    ) {
        let adjacency = g.adjacency();
        let tree = prim(&adjacency, &start).unwrap();
        let forest = kruskal_adjacency(&adjacency).unwrap();

        prop_assert!(tree.is_spanning());
        prop_assert_eq!(tree.len(), g.n - 1);
        prop_assert_eq!(tree.total_weight(), forest.total_weight());
    }

    #[test]
    fn prim_covers_exactly_the_start_component((g, start) in arb_graph_and_start(14)) {
        let tree = prim(&g.adjacency(), &start).unwrap();
        let reachable = reference_reachable(&g, start);
        prop_assert_eq!(tree.len() + 1, reachable.len());
        prop_assert_eq!(tree.unreached.len(), g.n - reachable.len());
        for v in &tree.unreached {
            prop_assert!(!reachable.contains(v));
        }
    }

    // Components

    #[test]
    fn components_partition_the_vertices(g in arb_graph(14)) {
        let comps = connected_components(&g.adjacency());
        let mut seen: Vec<usize> = comps.iter().flatten().copied().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..g.n).collect::<Vec<_>>());
        for comp in &comps {
            let members: HashSet<usize> = comp.iter().copied().collect();
            prop_assert_eq!(reference_reachable(&g, comp[0]), members);
        }
    }
}
