use tracing::{debug, instrument};

use super::*;

/// Deterministic generators that (re-)wire the edges of an existing vertex set.
pub trait Lattice: GraphVertexOrder {
    /// Connects every unordered pair of distinct vertices.
    /// Existing edges are kept; returns the number of newly inserted edges.
    ///
    /// # Example
    /// ```rust
    /// use graphstats::{prelude::*, gens::*};
    ///
    /// let mut g: Graph = Graph::from_vertices(0..5);
    /// assert_eq!(g.make_complete(), 10);
    /// assert_eq!(g.number_of_edges(), 10);
    /// ```
    fn make_complete(&mut self) -> NumEdges;

    /// Replaces all edges by a ring lattice: the vertices are placed on a cycle in ascending order
    /// and every vertex is connected to the next `k - 1` vertices along the ring.
    /// Every vertex thus ends up with degree `min(2(k - 1), n - 1)`.
    ///
    /// Fails with `InvalidParameter` (leaving the graph untouched) unless `1 <= k < n`.
    ///
    /// # Example
    /// ```rust
    /// use graphstats::{prelude::*, gens::*};
    ///
    /// let mut g: Graph = Graph::from_vertices(0..6);
    /// g.make_regular(3).unwrap();
    /// assert!(g.degrees().all(|d| d == 4));
    ///
    /// assert!(g.make_regular(6).is_err());
    /// ```
    fn make_regular(&mut self, k: NumVertices) -> Result<()>;
}

impl<G> Lattice for G
where
    G: GraphEdgeEditing + GraphEdgeOrder,
{
    #[instrument(level = "debug", skip_all, fields(n = self.number_of_vertices()))]
    fn make_complete(&mut self) -> NumEdges {
        let vertices = self.ordered_vertices();
        let added = self.connect_clique(&vertices);
        debug!(added, m = self.number_of_edges(), "completed graph");
        added
    }

    #[instrument(level = "debug", skip(self), fields(n = self.number_of_vertices()))]
    fn make_regular(&mut self, k: NumVertices) -> Result<()> {
        let n = self.number_of_vertices();
        if k < 1 || k >= n {
            return Err(GraphError::invalid_parameter(
                "k",
                format!("a ring lattice on {n} vertices requires 1 <= k < {n}, got {k}"),
            ));
        }

        self.remove_all_edges();
        let vertices = self.ordered_vertices();
        let added = self.connect_ring_lattice(&vertices, k - 1)?;

        debug!(added, "built ring lattice");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::assert_symmetric;

    use super::*;

    #[test]
    fn complete_graph() {
        for n in 0..15u32 {
            let mut g: Graph = Graph::from_vertices(0..n);
            g.make_complete();

            let n = n as usize;
            assert_eq!(g.number_of_edges(), n * n.saturating_sub(1) / 2);
            for u in g.vertices() {
                for v in g.vertices() {
                    assert_eq!(g.has_edge(u, v).unwrap(), u != v);
                }
            }
        }
    }

    #[test]
    fn complete_keeps_existing_edges() {
        let mut g: Graph = Graph::from_edges(0..4, [(0, 1), (2, 3)]).unwrap();
        assert_eq!(g.make_complete(), 4);
        assert_eq!(g.number_of_edges(), 6);
    }

    #[test]
    fn regular_degrees() {
        for n in 2..20u32 {
            for k in 1..(n as usize) {
                let mut g: Graph = Graph::from_vertices(0..n);
                g.make_regular(k).unwrap();

                let expected = (2 * (k - 1)).min(n as usize - 1);
                assert!(g.degrees().all(|d| d == expected), "n={n}, k={k}");
                assert_symmetric(&g);
            }
        }
    }

    #[test]
    fn regular_six_three() {
        let mut g: Graph = Graph::from_vertices(0..6);
        g.make_regular(3).unwrap();

        assert_eq!(g.number_of_edges(), 12);
        assert_eq!(g.degree_distribution(), vec![0, 0, 0, 0, 6, 0]);
        assert!(g.has_edge(&5, &0).unwrap());
        assert!(g.has_edge(&5, &1).unwrap());
        assert!(!g.has_edge(&0, &3).unwrap());
    }

    #[test]
    fn regular_replaces_edges() {
        let mut g: Graph = Graph::from_edges(0..5, [(0, 2), (1, 3)]).unwrap();
        g.make_regular(2).unwrap();

        assert_eq!(
            g.ordered_edges(),
            vec![Edge(0, 1), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(3, 4)]
        );
    }

    #[test]
    fn regular_arbitrary_vertices() {
        let mut g: Graph<&str> = Graph::from_vertices(["d", "a", "c", "b"]);
        g.make_regular(2).unwrap();

        assert_eq!(
            g.ordered_edges(),
            vec![Edge("a", "b"), Edge("a", "d"), Edge("b", "c"), Edge("c", "d")]
        );
    }

    #[test]
    fn regular_rejects_invalid_k() {
        let mut g: Graph = Graph::from_edges(0..4, [(0, 1)]).unwrap();

        for k in [0, 4, 5, 100] {
            let err = g.make_regular(k).unwrap_err();
            assert_eq!(err.code(), GraphErrorCode::InvalidParameter);
        }
        assert_eq!(g.ordered_edges(), vec![Edge(0, 1)]);

        let mut empty: Graph = Graph::new();
        assert!(empty.make_regular(1).is_err());
    }
}
