/// Generates the storage tests every vertex type has to pass.
/// `$vertex` is the vertex type and `$make` maps an index `u32` to a vertex.
macro_rules! test_graph_ops {
    ($env:ident, $vertex:ty, $make:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::assert_symmetric};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn vertex(i: u32) -> $vertex {
                let make: fn(u32) -> $vertex = $make;
                make(i)
            }

            /// Creates a list of at most `m_ub` random normalized edges without loops for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Vec<Edge<$vertex>> {
                let mut edges = (0..m_ub)
                    .filter_map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        (u != v).then(|| Edge(vertex(u), vertex(v)).normalized())
                    })
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges
            }

            #[test]
            fn graph_new() {
                let graph = Graph::<$vertex>::new();
                assert!(graph.is_empty());
                assert!(graph.is_edgeless());

                for n in 1..20 {
                    let graph = Graph::<$vertex>::from_vertices((0..n).map(vertex));
                    assert_eq!(graph.number_of_vertices(), n as usize);
                    assert_eq!(graph.number_of_edges(), 0);

                    let mut expected = (0..n).map(vertex).collect_vec();
                    expected.sort_unstable();
                    assert_eq!(graph.ordered_vertices(), expected);
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10u32, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        let edges = random_edges(rng, n, m_ub as usize);

                        // insert every edge in both orientations; duplicates must be absorbed
                        let graph = Graph::<$vertex>::from_edges(
                            (0..n).map(vertex),
                            edges.iter().cloned().chain(edges.iter().map(|e| e.reverse())),
                        )
                        .unwrap();

                        assert_eq!(graph.number_of_vertices(), n as usize);
                        assert_eq!(graph.number_of_edges(), edges.len());
                        assert_eq!(graph.ordered_edges(), edges);
                        assert_symmetric(&graph);

                        for u in 0..n {
                            let u = vertex(u);
                            let expected = edges.iter().filter(|e| e.other(&u).is_some()).count();
                            assert_eq!(graph.degree_of(&u).unwrap(), expected);
                        }

                        assert_eq!(
                            graph.degree_distribution().iter().sum::<usize>(),
                            n as usize
                        );
                    }
                }
            }

            #[test]
            fn graph_edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10u32, 20, 50] {
                    let edges = random_edges(rng, n, (n * 5) as usize);
                    let mut graph = Graph::<$vertex>::from_vertices((0..n).map(vertex));

                    for Edge(u, v) in edges.iter().cloned() {
                        assert!(!graph.try_add_edge(u.clone(), v.clone()).unwrap());
                        assert!(graph.has_edge(&u, &v).unwrap());
                        assert!(graph.has_edge(&v, &u).unwrap());
                    }
                    assert_eq!(graph.number_of_edges(), edges.len());

                    let mut m = graph.number_of_edges();
                    for _ in 0..(m / 2) {
                        let u = vertex(rng.random_range(0..n));
                        let v = vertex(rng.random_range(0..n));
                        let existed = u != v && graph.has_edge(&u, &v).unwrap();

                        assert_eq!(graph.remove_edge(&u, &v), existed);
                        if existed {
                            m -= 1;
                            assert!(!graph.has_edge(&v, &u).unwrap());
                        }
                        assert_eq!(graph.number_of_edges(), m);
                        assert_symmetric(&graph);
                    }

                    graph.remove_all_edges();
                    assert!(graph.is_edgeless());
                    assert_eq!(graph.number_of_vertices(), n as usize);

                    assert!(graph.add_edge(vertex(0), vertex(0)).is_err());
                    assert!(graph.is_edgeless());
                }
            }
        }
    };
}

test_graph_ops!(graph_u32, u32, |i| i);
test_graph_ops!(graph_string, String, |i| format!("v{i:03}"));
test_graph_ops!(graph_pair, (u8, u16), |i| ((i % 3) as u8, i as u16));

/// Asserts that the adjacency of `graph` is symmetric and loop-free
#[cfg(test)]
pub(crate) fn assert_symmetric<G>(graph: &G)
where
    G: crate::ops::AdjacencyList + crate::ops::AdjacencyTest,
{
    for u in graph.vertices() {
        for v in graph.neighbors_of(u).unwrap() {
            assert_ne!(u, v, "self-loop at {u:?}");
            assert!(graph.has_edge(v, u).unwrap(), "{v:?} -> {u:?} is missing");
        }
    }
}
