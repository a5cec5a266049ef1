/// Generates randomized invariant tests for a graph representation.
/// Every graph should implement `GraphNodeOrder`, `GraphEdgeOrder` and `AdjacencyTest`.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, Edge, GraphError};
            use fxhash::FxHashSet;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            fn name(u: u32) -> String {
                u.to_string()
            }

            /// Creates a list of `m` random node pairs for nodes `0..n`, including loops and repetitions
            fn random_pairs<R: Rng>(rng: &mut R, n: u32, m: u32) -> Vec<(String, String)> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    (name(u), name(v))
                }).collect_vec()
            }

            /// Logical identity of an edge in the model
            fn key(u: &str, v: &str) -> (String, String) {
                if $undirected && u > v {
                    (v.to_string(), u.to_string())
                } else {
                    (u.to_string(), v.to_string())
                }
            }

            fn graph_with_nodes(n: u32) -> $graph {
                let mut graph = <$graph>::new();
                graph.add_nodes((0..n).map(name)).unwrap();
                graph
            }

            /// Inserts all pairs and returns the model of all edges, including those present before
            fn populate(graph: &mut $graph, pairs: &[(String, String)]) -> FxHashSet<(String, String)> {
                let mut model: FxHashSet<_> = graph.edges(false).map(|Edge(u, v)| key(&u, &v)).collect();
                for (u, v) in pairs {
                    match graph.add_edge(u, v) {
                        Ok(()) => assert!(model.insert(key(u, v))),
                        Err(GraphError::SelfLoopRejected { node }) => {
                            assert_eq!(u, v);
                            assert_eq!(node, u.as_str());
                        }
                        Err(GraphError::DuplicateEdge { .. }) => assert!(model.contains(&key(u, v))),
                        Err(GraphError::CycleRejected { .. }) => assert!(!$undirected),
                        Err(err) => panic!("unexpected error {err}"),
                    }
                }
                model
            }

            /// Snapshot of all adjacency lists in node order
            fn adjacency(graph: &$graph) -> Vec<(String, Vec<String>)> {
                graph
                    .vertices()
                    .map(|u| {
                        (
                            u.to_string(),
                            graph.neighbors_of(u).iter().map(|v| v.to_string()).collect_vec(),
                        )
                    })
                    .collect_vec()
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNodeEditing) => {
        #[test]
        fn test_graph_node_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for _ in 0..10 {
                    let mut graph = graph_with_nodes(n);
                    populate(&mut graph, &random_pairs(rng, n, n * 3));

                    let mut present: FxHashSet<String> = (0..n).map(name).collect();
                    for _ in 0..n * 2 {
                        let u = name(rng.random_range(0..n + 5));
                        if rng.random_bool(0.5) {
                            assert_eq!(graph.add_node(u.as_str()).unwrap(), present.insert(u.clone()));
                        } else {
                            let m = graph.number_of_edges();
                            let incident = graph.degree_of(&u) + if $undirected { 0 } else { graph.node(&u).map_or(0, |r| r.in_edges().len()) };

                            assert_eq!(graph.delete_node(&u), present.remove(&u));
                            assert_eq!(graph.number_of_edges(), m - incident);
                            assert!(graph.vertices().all(|v| !graph.neighbors_of(v).iter().any(|w| *w == u.as_str())));
                        }

                        assert_eq!(graph.number_of_nodes(), present.len());
                        assert_eq!(graph.is_empty(), present.is_empty());
                        graph.base().check_consistency($undirected).unwrap();
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..10 {
                        let mut graph = graph_with_nodes(n);
                        let mut model = populate(&mut graph, &random_pairs(rng, n, m_ub));

                        assert_eq!(graph.number_of_edges(), model.len());
                        graph.base().check_consistency($undirected).unwrap();
                        for (u, v) in random_pairs(rng, n, m_ub) {
                            assert_eq!(graph.has_edge(&u, &v), model.contains(&key(&u, &v)));
                            if $undirected {
                                assert_eq!(graph.has_edge(&u, &v), graph.has_edge(&v, &u));
                            }
                        }

                        // add followed by delete restores the adjacency exactly
                        for (u, v) in random_pairs(rng, n, n) {
                            let before = adjacency(&graph);
                            let had_edge = graph.has_edge(&u, &v);
                            if graph.add_edge(&u, &v).is_ok() {
                                assert!(graph.delete_edge(&u, &v));
                            }
                            assert_eq!(graph.has_edge(&u, &v), had_edge);
                            assert_eq!(adjacency(&graph), before);
                        }

                        let mut m = graph.number_of_edges();
                        for (u, v) in random_pairs(rng, n, m_ub / 2) {
                            let existed = model.remove(&key(&u, &v));
                            assert_eq!(graph.delete_edge(&u, &v), existed);
                            if existed {
                                m -= 1;
                            }

                            assert_eq!(m, graph.number_of_edges());
                            assert!(!graph.has_edge(&u, &v));
                        }
                        graph.base().check_consistency($undirected).unwrap();

                        for Edge(u, v) in graph.edges(false).collect_vec() {
                            graph.delete_edge(&u, &v);
                        }
                        assert!(graph.is_singleton_graph());
                        assert_eq!(graph.number_of_nodes(), n as usize);
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: Clone) => {
        #[test]
        fn test_clone_does_not_alias() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10u32, 20, 50] {
                for _ in 0..10 {
                    let mut original = graph_with_nodes(n);
                    populate(&mut original, &random_pairs(rng, n, n * 3));

                    let nodes = original.number_of_nodes();
                    let edges = original.number_of_edges();
                    let before = adjacency(&original);

                    let mut copy = original.clone();
                    assert_eq!(copy, original);

                    let mut model = populate(&mut copy, &random_pairs(rng, n, n * 2));
                    assert!(model.len() >= edges);
                    assert_eq!(copy.number_of_edges(), model.len());
                    for (u, v) in random_pairs(rng, n, n) {
                        assert_eq!(copy.delete_edge(&u, &v), model.remove(&key(&u, &v)));
                    }
                    assert_eq!(copy.number_of_edges(), model.len());
                    copy.attributes_mut("0").unwrap().x = 1.0;
                    copy.delete_node(&name(rng.random_range(0..n)));
                    copy.add_node("fresh").unwrap();

                    assert_eq!(original.number_of_nodes(), nodes);
                    assert_eq!(original.number_of_edges(), edges);
                    assert_eq!(adjacency(&original), before);
                    assert_eq!(original.node("0").unwrap().attributes().x, 0.0);
                    assert!(!original.has_node("fresh"));
                    original.base().check_consistency($undirected).unwrap();
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: Acyclic) => {
        #[test]
        fn test_acyclic_under_random_insertions() {
            use crate::{algo::*, NodeId};

            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [10u32, 20, 50] {
                for _ in 0..10 {
                    let mut graph = graph_with_nodes(n);

                    for (u, v) in random_pairs(rng, n, n * 4) {
                        let closes_cycle = u != v && graph.is_reachable(&v, &u);
                        match graph.add_edge(&u, &v) {
                            Ok(()) => {
                                assert!(!closes_cycle);
                                assert!(!graph.is_reachable(&v, &u));
                            }
                            Err(GraphError::CycleRejected { .. }) => assert!(closes_cycle),
                            Err(_) => assert!(!closes_cycle),
                        }
                    }
                    assert!(graph.is_acyclic());

                    let order = graph.topological_sort().unwrap();
                    assert_eq!(order.len(), graph.number_of_nodes());
                    assert!(order.iter().all_unique());
                    let rank = |u: &NodeId| order.iter().position(|v| v == u).unwrap();
                    for Edge(u, v) in graph.edges(false) {
                        assert!(rank(&u) < rank(&v));
                    }

                    let path = graph.longest_path().unwrap();
                    if graph.number_of_edges() > 0 {
                        assert!(path.len() >= 2);
                        assert!(path.windows(2).all(|w| graph.has_edge(&w[0], &w[1])));
                    } else {
                        assert!(path.is_empty());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
