use fxhash::FxHashSet;
use itertools::Itertools;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, trace};

use super::*;

/// Configuration of a small-world (Watts–Strogatz) rewiring pass.
///
/// Every edge `{u, v}` with `u < v` that exists when the pass starts is rewired independently with
/// probability `prob`: the edge is removed and `u` is connected to a uniformly random vertex instead.
/// Self-loops are never created. Whether the new endpoint may already be a neighbor of `u` is
/// controlled by [`Rewiring::allow_duplicate`]:
/// - `true` (default): the new endpoint is drawn from `V \ {u, v}`; if it is already adjacent to `u`,
///   the insertion is a no-op and the graph loses an edge.
/// - `false`: the new endpoint is drawn from the non-neighbors of `u`, so the number of edges is
///   preserved. An edge whose endpoint `u` is adjacent to every other vertex is left in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rewiring {
    prob: f64,
    allow_duplicate: bool,
}

impl Default for Rewiring {
    fn default() -> Self {
        Self {
            prob: 0.0,
            allow_duplicate: true,
        }
    }
}

/// Summary of a rewiring pass
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RewireOutcome {
    /// Number of edges that were removed and reconnected
    pub rewired: NumEdges,
    /// Number of rewired edges whose new endpoint was already a neighbor (only if duplicates are allowed)
    pub collapsed: NumEdges,
    /// Number of edges selected for rewiring that had no admissible new endpoint
    pub skipped: NumEdges,
}

impl Rewiring {
    /// Creates a new rewiring pass with probability `0` that allows duplicate targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the rewiring probability
    pub fn prob(mut self, prob: f64) -> Self {
        self.prob = prob;
        self
    }

    /// Updates whether a rewired edge may land on an already existing neighbor
    pub fn allow_duplicate(mut self, allow_duplicate: bool) -> Self {
        self.allow_duplicate = allow_duplicate;
        self
    }

    /// Rewires the edges of `graph`.
    /// Fails with `InvalidParameter` if the probability is not in `[0, 1]`.
    #[instrument(level = "debug", skip_all, fields(p = self.prob, allow_duplicate = self.allow_duplicate))]
    pub fn apply<G, R>(&self, graph: &mut G, rng: &mut R) -> Result<RewireOutcome>
    where
        G: GraphEdgeEditing + AdjacencyList,
        R: Rng,
    {
        check_probability("p", self.prob)?;

        // both snapshots are taken before the first mutation
        let vertices = graph.ordered_vertices();
        let edges = graph.ordered_edges();

        let mut outcome = RewireOutcome::default();
        for Edge(u, v) in edges {
            if !rng.random_bool(self.prob) {
                continue;
            }

            let target = if self.allow_duplicate {
                Self::any_other_vertex(rng, &vertices, &u, &v)
            } else {
                Self::non_neighbor(rng, graph, &vertices, &u)
            };

            let Some(target) = target else {
                outcome.skipped += 1;
                continue;
            };

            trace!(?u, ?v, ?target, "rewire edge");
            graph.remove_edge(&u, &v);
            if graph.try_add_edge(u, target)? {
                outcome.collapsed += 1;
            }
            outcome.rewired += 1;
        }

        debug!(
            rewired = outcome.rewired,
            collapsed = outcome.collapsed,
            skipped = outcome.skipped,
            "rewiring finished"
        );
        Ok(outcome)
    }

    /// Uniform vertex from `vertices \ {u, v}` (rejection sampling; `u` and `v` are distinct members)
    fn any_other_vertex<V: Vertex, R: Rng>(rng: &mut R, vertices: &[V], u: &V, v: &V) -> Option<V> {
        if vertices.len() < 3 {
            return None;
        }

        loop {
            let target = vertices.choose(rng)?;
            if target != u && target != v {
                return Some(target.clone());
            }
        }
    }

    /// Uniform vertex from `vertices \ ({u} ∪ N(u))`
    fn non_neighbor<G, R>(rng: &mut R, graph: &G, vertices: &[G::Vertex], u: &G::Vertex) -> Option<G::Vertex>
    where
        G: AdjacencyList,
        R: Rng,
    {
        let neighbors: FxHashSet<&G::Vertex> = graph.try_neighbors_of(u)?.collect();
        let candidates = vertices
            .iter()
            .filter(|&w| w != u && !neighbors.contains(w))
            .collect_vec();

        candidates.choose(rng).map(|&w| w.clone())
    }
}

/// Small-world rewiring of the edges of a graph.
pub trait SmallWorld: GraphVertexOrder {
    /// Rewires every edge independently with probability `p`, allowing rewired edges to land on
    /// existing neighbors (see [`Rewiring`]).
    ///
    /// # Example
    /// ```rust
    /// use graphstats::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
    /// let mut g: Graph = Graph::from_vertices(0..30);
    /// g.make_regular(3).unwrap();
    ///
    /// let outcome = g.rewire(rng, 1.0).unwrap();
    /// assert_eq!(outcome.rewired, 60);
    /// assert_eq!(g.number_of_edges(), 60 - outcome.collapsed);
    /// ```
    fn rewire<R: Rng>(&mut self, rng: &mut R, p: f64) -> Result<RewireOutcome>;

    /// Rewires the edges according to the given configuration.
    fn rewire_with<R: Rng>(&mut self, rng: &mut R, rewiring: &Rewiring) -> Result<RewireOutcome>;
}

impl<G> SmallWorld for G
where
    G: GraphEdgeEditing + AdjacencyList,
{
    fn rewire<R: Rng>(&mut self, rng: &mut R, p: f64) -> Result<RewireOutcome> {
        Rewiring::new().prob(p).apply(self, rng)
    }

    fn rewire_with<R: Rng>(&mut self, rng: &mut R, rewiring: &Rewiring) -> Result<RewireOutcome> {
        rewiring.apply(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::testing::assert_symmetric;

    use super::*;

    fn ring(n: u32, k: NumVertices) -> Graph {
        let mut g = Graph::from_vertices(0..n);
        g.make_regular(k).unwrap();
        g
    }

    #[test]
    fn zero_probability_is_identity() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g = ring(20, 3);
        let before = g.clone();

        let outcome = g.rewire(rng, 0.0).unwrap();
        assert_eq!(outcome, RewireOutcome::default());
        assert_eq!(g, before);
    }

    #[test]
    fn invalid_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g = ring(10, 2);
        let before = g.clone();

        for p in [-0.5, 1.5, f64::NAN] {
            let err = g.rewire(rng, p).unwrap_err();
            assert_eq!(err.code(), GraphErrorCode::InvalidParameter);
        }
        assert_eq!(g, before);
    }

    #[test]
    fn duplicates_allowed() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for p in [0.1, 0.5, 1.0] {
            let mut g = ring(40, 4);
            let m = g.number_of_edges();

            let outcome = g.rewire(rng, p).unwrap();
            assert_symmetric(&g);
            assert_eq!(g.number_of_vertices(), 40);
            assert_eq!(g.number_of_edges(), m - outcome.collapsed);
            assert_eq!(outcome.skipped, 0);
            if p == 1.0 {
                assert_eq!(outcome.rewired, m);
            }
        }
    }

    #[test]
    fn duplicates_rejected_preserve_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let rewiring = Rewiring::new().prob(0.7).allow_duplicate(false);

        for _ in 0..10 {
            let mut g = ring(30, 3);
            let m = g.number_of_edges();

            let outcome = g.rewire_with(rng, &rewiring).unwrap();
            assert_symmetric(&g);
            assert_eq!(g.number_of_edges(), m);
            assert_eq!(outcome.collapsed, 0);
        }
    }

    #[test]
    fn complete_graph_cannot_be_rewired_without_duplicates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut g: Graph = Graph::from_vertices(0..6);
        g.make_complete();
        let before = g.clone();

        let outcome = g
            .rewire_with(rng, &Rewiring::new().prob(1.0).allow_duplicate(false))
            .unwrap();
        assert_eq!(outcome.skipped, 15);
        assert_eq!(outcome.rewired, 0);
        assert_eq!(g, before);
    }

    #[test]
    fn two_vertices_have_no_target() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut g: Graph = Graph::from_edges([], [(0, 1)]).unwrap();

        let outcome = g.rewire(rng, 1.0).unwrap();
        assert_eq!(outcome.skipped, 1);
        assert!(g.has_edge(&0, &1).unwrap());
    }

    #[test]
    fn reproducible_with_seed() {
        let run = |seed| {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            let mut g = ring(50, 3);
            g.rewire(rng, 0.3).unwrap();
            g.ordered_edges()
        };

        assert_eq!(run(11), run(11));
    }
}
