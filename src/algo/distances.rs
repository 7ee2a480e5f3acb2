/*!
All-pairs hop distances and the average shortest path length.

Both are computed by running one breadth-first search per vertex, ie. in time `O(|V| * (|V| + |E|))`.
*/

use tracing::{debug, instrument};

use super::*;

/// Aggregate over the hop distances of all ordered vertex pairs `(s, t)` with `s != t`.
///
/// Unreachable pairs do not contribute to the total length but are counted separately, so a caller
/// can decide whether an average over a disconnected graph is meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathLengthSummary {
    /// Number of ordered pairs `(s, t)` where `t` is reachable from `s`
    pub reachable_pairs: usize,
    /// Number of ordered pairs `(s, t)` where `t` is not reachable from `s`
    pub unreachable_pairs: usize,
    /// Sum of the hop distances over all reachable pairs
    pub total_length: usize,
}

impl PathLengthSummary {
    /// Returns the average hop distance over all reachable pairs or `None` if there are none
    pub fn average(&self) -> Option<f64> {
        (self.reachable_pairs > 0).then(|| self.total_length as f64 / self.reachable_pairs as f64)
    }

    /// Returns *true* if no pair was unreachable
    pub fn is_connected(&self) -> bool {
        self.unreachable_pairs == 0
    }
}

/// Distance statistics computed from one BFS per vertex.
pub trait Distances: Traversal {
    /// Returns the hop distances between all pairs of mutually reachable vertices.
    /// `result[s][t]` is defined exactly if `t` is reachable from `s`; `result[s][s] = 0`.
    fn all_pairs_shortest_paths(&self) -> FxHashMap<Self::Vertex, FxHashMap<Self::Vertex, usize>>;

    /// Sums the hop distances over all ordered pairs of distinct vertices, excluding unreachable pairs.
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, algo::*};
    ///
    /// let g: Graph = Graph::from_edges(0..4, [(0, 1), (1, 2)]).unwrap();
    /// let summary = g.average_shortest_path_length();
    ///
    /// // 0-1, 1-2 at distance 1 and 0-2 at distance 2, each in both directions
    /// assert_eq!(summary.reachable_pairs, 6);
    /// assert_eq!(summary.unreachable_pairs, 6);
    /// assert_eq!(summary.average(), Some(8.0 / 6.0));
    /// ```
    fn average_shortest_path_length(&self) -> PathLengthSummary;

    /// Returns the average hop distance over all ordered pairs of distinct vertices.
    ///
    /// Fails with `Disconnected` if some pair is unreachable and with `InvalidParameter`
    /// if the graph has less than two vertices (there are no pairs to average over).
    fn average_shortest_path_length_connected(&self) -> Result<f64>;
}

impl<G> Distances for G
where
    G: Traversal,
{
    fn all_pairs_shortest_paths(&self) -> FxHashMap<Self::Vertex, FxHashMap<Self::Vertex, usize>> {
        self.vertices()
            .filter_map(|s| Some((s.clone(), self.bfs_distances(s).ok()?)))
            .collect()
    }

    #[instrument(level = "debug", skip_all, fields(n = self.number_of_vertices()))]
    fn average_shortest_path_length(&self) -> PathLengthSummary {
        let n = self.number_of_vertices();
        let mut summary = PathLengthSummary::default();

        for s in self.vertices() {
            let Ok(bfs) = self.bfs(s) else {
                continue;
            };

            let mut reached = 0;
            for (_, dist) in bfs.skip(1) {
                reached += 1;
                summary.total_length += dist;
            }

            summary.reachable_pairs += reached;
            summary.unreachable_pairs += n - 1 - reached;
        }

        debug!(
            reachable = summary.reachable_pairs,
            unreachable = summary.unreachable_pairs,
            "computed path lengths"
        );
        summary
    }

    fn average_shortest_path_length_connected(&self) -> Result<f64> {
        let summary = self.average_shortest_path_length();
        if !summary.is_connected() {
            return Err(GraphError::Disconnected {
                unreachable_pairs: summary.unreachable_pairs,
            });
        }

        summary.average().ok_or_else(|| {
            GraphError::invalid_parameter(
                "graph",
                "the average path length requires at least two vertices",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::gens::*;

    use super::*;

    #[test]
    fn all_pairs() {
        let g: Graph = Graph::from_edges(0..5, [(0, 1), (1, 2), (1, 3), (3, 4)]).unwrap();
        let apsp = g.all_pairs_shortest_paths();

        assert_eq!(apsp.len(), 5);
        for s in 0..5 {
            assert_eq!(apsp[&s][&s], 0);
            for t in 0..5 {
                assert_eq!(apsp[&s][&t], apsp[&t][&s]);
            }
        }
        assert_eq!(apsp[&0][&4], 3);
        assert_eq!(apsp[&2][&4], 3);
        assert_eq!(apsp[&2][&3], 2);
    }

    #[test]
    fn all_pairs_disconnected() {
        let g: Graph = Graph::from_edges(0..4, [(0, 1), (2, 3)]).unwrap();
        let apsp = g.all_pairs_shortest_paths();

        assert_eq!(apsp[&0].len(), 2);
        assert!(!apsp[&0].contains_key(&2));
    }

    #[test]
    fn average_of_complete_graph() {
        let mut g: Graph = Graph::from_vertices(0..7);
        g.make_complete();

        let summary = g.average_shortest_path_length();
        assert_eq!(summary.reachable_pairs, 42);
        assert_eq!(summary.total_length, 42);
        assert_eq!(summary.average(), Some(1.0));
        assert_eq!(g.average_shortest_path_length_connected().unwrap(), 1.0);
    }

    #[test]
    fn average_of_path() {
        let mut g: Graph = Graph::new();
        g.connect_path(0..4).unwrap();

        // ordered distances: 3x1, 2x2, 1x3 in each direction
        let summary = g.average_shortest_path_length();
        assert_eq!(summary.reachable_pairs, 12);
        assert_eq!(summary.total_length, 20);
        assert!(summary.is_connected());
    }

    #[test]
    fn average_disconnected() {
        let g: Graph = Graph::from_edges(0..5, [(0, 1), (2, 3)]).unwrap();

        let summary = g.average_shortest_path_length();
        assert_eq!(summary.reachable_pairs, 4);
        assert_eq!(summary.unreachable_pairs, 16);
        assert_eq!(summary.average(), Some(1.0));

        let err = g.average_shortest_path_length_connected().unwrap_err();
        assert_eq!(err, GraphError::Disconnected { unreachable_pairs: 16 });
    }

    #[test]
    fn average_without_pairs() {
        for n in 0..2u32 {
            let g: Graph = Graph::from_vertices(0..n);
            assert_eq!(g.average_shortest_path_length(), PathLengthSummary::default());
            assert_eq!(g.average_shortest_path_length().average(), None);

            let err = g.average_shortest_path_length_connected().unwrap_err();
            assert_eq!(err.code(), GraphErrorCode::InvalidParameter);
        }
    }
}
