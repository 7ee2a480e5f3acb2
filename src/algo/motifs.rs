/*!
Counting of small **motifs**: triangles, stars, 4-cliques and diamonds.

All enumerations run over the vertices in ascending order and only consider sorted tuples,
so every motif is counted exactly once. No attempt is made to speed up the counting beyond
pruning non-adjacent prefixes: triangle counting takes `O(|V|^3)` in the worst case.
*/

use itertools::Itertools;
use super::*;
use crate::utils::binomial_coefficient;

/// Motif counts available on every graph with adjacency queries.
pub trait Motifs: AdjacencyList + AdjacencyTest {
    /// Returns the number of unordered triples `{a, b, c}` of pairwise adjacent vertices.
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, gens::*, algo::*};
    ///
    /// let mut g: Graph = Graph::from_vertices(0..4);
    /// g.make_complete();
    /// assert_eq!(g.triangle_count(), 4);
    ///
    /// g.make_regular(2).unwrap();
    /// assert_eq!(g.triangle_count(), 0);
    /// ```
    fn triangle_count(&self) -> usize;

    /// Returns the number of vertices with degree at least `k` (the centers of `k`-stars).
    fn k_star_count(&self, k: NumVertices) -> usize;

    /// Returns the number of `k`-star subgraphs, ie. `sum_v C(deg(v), k)`.
    /// Every vertex of degree `d` is the center of `C(d, k)` distinct stars with `k` leaves.
    ///
    /// The count grows too fast for any integer type and is therefore a float; it is exact below `2^53`.
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, gens::*, algo::*};
    ///
    /// let mut g: Graph = Graph::from_vertices(0..4);
    /// g.make_complete();
    /// assert_eq!(g.k_star_subgraph_count(2), 12.0);
    /// assert_eq!(g.k_star_count(2), 4);
    /// ```
    fn k_star_subgraph_count(&self, k: NumVertices) -> f64;

    /// Returns the number of 4-vertex sets that are pairwise adjacent.
    fn four_clique_count(&self) -> usize;

    /// Returns the number of diamonds (near-4-cliques), ie. 4-vertex sets inducing exactly 5 edges.
    ///
    /// Every diamond has a unique diagonal `{b, c}` whose endpoints share the two remaining vertices
    /// `a, d` as non-adjacent common neighbors. We count, for every edge, the non-adjacent pairs among
    /// the common neighbors of its endpoints.
    fn diamond_count(&self) -> usize;
}

/// Returns *true* if `{u, v}` is an edge; unknown vertices are never adjacent
fn adjacent<G: AdjacencyTest>(graph: &G, u: &G::Vertex, v: &G::Vertex) -> bool {
    matches!(graph.has_edge(u, v), Ok(true))
}

impl<G> Motifs for G
where
    G: AdjacencyList + AdjacencyTest,
{
    fn triangle_count(&self) -> usize {
        let vertices = self.ordered_vertices();
        let mut count = 0;

        for (i, a) in vertices.iter().enumerate() {
            for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                if !adjacent(self, a, b) {
                    continue;
                }
                count += vertices[j + 1..]
                    .iter()
                    .filter(|c| adjacent(self, a, c) && adjacent(self, b, c))
                    .count();
            }
        }
        count
    }

    fn k_star_count(&self, k: NumVertices) -> usize {
        self.degrees().filter(|&d| d >= k).count()
    }

    fn k_star_subgraph_count(&self, k: NumVertices) -> f64 {
        self.degrees().map(|d| binomial_coefficient(d, k)).sum()
    }

    fn four_clique_count(&self) -> usize {
        let vertices = self.ordered_vertices();
        let mut count = 0;

        for (i, a) in vertices.iter().enumerate() {
            let higher = vertices[i + 1..]
                .iter()
                .filter(|b| adjacent(self, a, b))
                .collect_vec();

            // every 4-clique containing `a` as its smallest vertex is a triangle in `higher`
            for (b, c, d) in higher.iter().tuple_combinations() {
                if adjacent(self, b, c) && adjacent(self, b, d) && adjacent(self, c, d) {
                    count += 1;
                }
            }
        }
        count
    }

    fn diamond_count(&self) -> usize {
        let mut count = 0;

        for Edge(b, c) in self.ordered_edges() {
            let (Ok(nb), Ok(nc)) = (self.neighbors_of(&b), self.neighbors_of(&c)) else {
                continue;
            };
            let nc: FxHashSet<&G::Vertex> = nc.collect();
            let common = nb.filter(|w| nc.contains(w)).collect_vec();

            count += common
                .iter()
                .tuple_combinations()
                .filter(|&(a, d)| !adjacent(self, a, d))
                .count();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use crate::gens::*;

    use super::*;

    fn complete(n: u32) -> Graph {
        let mut g = Graph::from_vertices(0..n);
        g.make_complete();
        g
    }

    #[test]
    fn triangles() {
        assert_eq!(complete(4).triangle_count(), 4);
        assert_eq!(complete(7).triangle_count(), 35);

        let mut cycle: Graph = Graph::new();
        cycle.connect_cycle(0..4).unwrap();
        assert_eq!(cycle.triangle_count(), 0);

        let mut g: Graph = Graph::from_edges([], [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        assert_eq!(g.triangle_count(), 1);
        g.add_edge(3, 0).unwrap();
        assert_eq!(g.triangle_count(), 2);

        assert_eq!(Graph::<u32>::new().triangle_count(), 0);
    }

    #[test]
    fn triangles_with_string_vertices() {
        let g: Graph<&str> =
            Graph::from_edges([], [("x", "y"), ("y", "z"), ("z", "x"), ("z", "w")]).unwrap();
        assert_eq!(g.triangle_count(), 1);
    }

    #[test]
    fn k_stars() {
        let g = complete(4);
        assert_eq!(g.k_star_count(3), 4);
        assert_eq!(g.k_star_count(4), 0);
        assert_eq!(g.k_star_count(0), 4);

        assert_eq!(g.k_star_subgraph_count(1), 12.0);
        assert_eq!(g.k_star_subgraph_count(2), 12.0);
        assert_eq!(g.k_star_subgraph_count(3), 4.0);
        assert_eq!(g.k_star_subgraph_count(4), 0.0);

        // star with center 0 and 5 leaves
        let star: Graph = Graph::from_edges([], (1..6).map(|v| (0, v))).unwrap();
        assert_eq!(star.k_star_count(2), 1);
        assert_eq!(star.k_star_subgraph_count(2), 10.0);
        assert_eq!(star.k_star_subgraph_count(5), 1.0);
    }

    #[test]
    fn k_stars_of_high_degree() {
        // C(200, 50) is roughly 4.5e47 and does not fit into a u128
        let star: Graph = Graph::from_edges([], (1..201).map(|v| (0, v))).unwrap();
        let stars = star.k_star_subgraph_count(50);

        assert!(stars.is_finite());
        assert!(stars > 1e47 && stars < 1e48, "stars = {stars}");
        assert_eq!(star.k_star_subgraph_count(200), 1.0);
        assert_eq!(star.k_star_subgraph_count(201), 0.0);
    }

    #[test]
    fn degree_distribution_of_complete_graph() {
        assert_eq!(complete(4).degree_distribution(), vec![0, 0, 0, 4]);
    }

    #[test]
    fn four_cliques() {
        assert_eq!(complete(3).four_clique_count(), 0);
        assert_eq!(complete(4).four_clique_count(), 1);
        assert_eq!(complete(6).four_clique_count(), 15);

        let mut g = complete(4);
        g.remove_edge(&0, &3);
        assert_eq!(g.four_clique_count(), 0);
    }

    #[test]
    fn diamonds() {
        assert_eq!(complete(4).diamond_count(), 0);

        let mut g = complete(4);
        g.remove_edge(&1, &2);
        assert_eq!(g.diamond_count(), 1);

        // each 4-subset of K5 minus one edge: the 3 subsets containing both endpoints of the
        // missing edge are diamonds
        let mut g = complete(5);
        g.remove_edge(&0, &4);
        assert_eq!(g.diamond_count(), 3);
        assert_eq!(g.four_clique_count(), 2);

        let mut cycle: Graph = Graph::new();
        cycle.connect_cycle(0..4).unwrap();
        assert_eq!(cycle.diamond_count(), 0);
    }
}
