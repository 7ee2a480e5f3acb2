use itertools::Itertools;
use tracing::{debug, instrument};

use super::*;

/// The Erdős–Rényi thinning can be defined by the probability of removing an edge, the probability
/// of keeping it, or the expected average degree which is more common in practice
#[derive(Debug, Copy, Clone, Default, PartialEq)]
enum EdgeProbability {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Probability of removing an edge
    Removal(f64),
    /// Probability of keeping an edge
    Keep(f64),
    /// Expected average degree of a vertex
    AvgDeg(f64),
}

/// Erdős–Rényi generator: completes the graph on its current vertex set and then removes every
/// edge independently with a fixed probability. The result is a `G(n, p)` graph with edge
/// probability `1 - removal_prob`.
///
/// The edges are collected before the first removal, so every edge of the complete graph is
/// considered exactly once.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ErdosRenyi {
    p: EdgeProbability,
}

impl ErdosRenyi {
    /// Creates a new generator without a probability
    pub fn new() -> Self {
        Self::default()
    }

    /// Every edge of the complete graph is removed with probability `prob`
    pub fn removal_prob(mut self, prob: f64) -> Self {
        self.p = EdgeProbability::Removal(prob);
        self
    }

    /// Every edge of the complete graph is kept with probability `prob`
    pub fn keep_prob(mut self, prob: f64) -> Self {
        self.p = EdgeProbability::Keep(prob);
        self
    }

    /// Chooses the keep probability such that the expected degree is `deg`, ie. `p = deg / (n - 1)`.
    /// Note that this conversion will only be done when calling `apply`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = EdgeProbability::AvgDeg(deg);
        self
    }

    /// Returns the removal probability for a graph with `n` vertices
    fn removal_prob_for(&self, n: NumVertices) -> Result<f64> {
        let removal = match self.p {
            EdgeProbability::NotSet => {
                return Err(GraphError::invalid_parameter(
                    "p",
                    "probability of the Erdős–Rényi generator was not set",
                ));
            }
            EdgeProbability::Removal(p) => p,
            EdgeProbability::Keep(p) => {
                check_probability("p", p)?;
                1.0 - p
            }
            EdgeProbability::AvgDeg(deg) => {
                let keep = if n > 1 { deg / (n - 1) as f64 } else { 0.0 };
                if !keep.is_valid_probability() {
                    return Err(GraphError::invalid_parameter(
                        "avg_deg",
                        format!("average degree {deg} is not achievable with {n} vertices"),
                    ));
                }
                1.0 - keep
            }
        };

        check_probability("p", removal)?;
        Ok(removal)
    }

    /// Turns `graph` into a random Erdős–Rényi graph on its vertex set.
    /// Returns the number of edges removed from the complete graph.
    ///
    /// Fails with `InvalidParameter` (leaving the graph untouched) if no valid probability was set.
    #[instrument(level = "debug", skip_all, fields(n = graph.number_of_vertices()))]
    pub fn apply<G, R>(&self, graph: &mut G, rng: &mut R) -> Result<NumEdges>
    where
        G: GraphEdgeEditing + AdjacencyList + GraphEdgeOrder,
        R: Rng,
    {
        let removal = self.removal_prob_for(graph.number_of_vertices())?;

        graph.make_complete();
        let to_remove = graph
            .ordered_edges()
            .into_iter()
            .filter(|_| rng.random_bool(removal))
            .collect_vec();

        let removed = graph.remove_edges(to_remove);
        debug!(removal, removed, m = graph.number_of_edges(), "thinned complete graph");
        Ok(removed)
    }
}

/// Erdős–Rényi generation on the current vertex set of a graph.
pub trait ErdosRenyiModel: GraphVertexOrder {
    /// Builds the complete graph and removes every edge independently with probability `p`.
    /// Returns the number of removed edges.
    ///
    /// # Example
    /// ```rust
    /// use graphstats::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
    /// let mut g: Graph = Graph::from_vertices(0..10);
    ///
    /// g.erdos_renyi(rng, 1.0).unwrap();
    /// assert!(g.is_edgeless());
    ///
    /// g.erdos_renyi(rng, 0.0).unwrap();
    /// assert_eq!(g.number_of_edges(), 45);
    /// ```
    fn erdos_renyi<R: Rng>(&mut self, rng: &mut R, p: f64) -> Result<NumEdges>;

    /// Runs the given Erdős–Rényi configuration on the graph.
    fn erdos_renyi_with<R: Rng>(&mut self, rng: &mut R, generator: &ErdosRenyi) -> Result<NumEdges>;
}

impl<G> ErdosRenyiModel for G
where
    G: GraphEdgeEditing + AdjacencyList + GraphEdgeOrder,
{
    fn erdos_renyi<R: Rng>(&mut self, rng: &mut R, p: f64) -> Result<NumEdges> {
        ErdosRenyi::new().removal_prob(p).apply(self, rng)
    }

    fn erdos_renyi_with<R: Rng>(&mut self, rng: &mut R, generator: &ErdosRenyi) -> Result<NumEdges> {
        generator.apply(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::testing::assert_symmetric;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [0u32, 1, 2, 7, 20] {
            let mut g: Graph = Graph::from_edges(0..n, (1..n).map(|v| (0, v))).unwrap();
            let complete = (n * n.saturating_sub(1) / 2) as usize;

            assert_eq!(g.erdos_renyi(rng, 1.0).unwrap(), complete);
            assert!(g.is_edgeless());
            assert_eq!(g.number_of_vertices(), n as usize);

            assert_eq!(g.erdos_renyi(rng, 0.0).unwrap(), 0);
            assert_eq!(g.number_of_edges(), complete);
        }
    }

    #[test]
    fn keep_and_removal_agree() {
        let run = |generator: ErdosRenyi| {
            let rng = &mut Pcg64Mcg::seed_from_u64(9);
            let mut g: Graph = Graph::from_vertices(0..30);
            g.erdos_renyi_with(rng, &generator).unwrap();
            g.ordered_edges()
        };

        assert_eq!(
            run(ErdosRenyi::new().removal_prob(0.25)),
            run(ErdosRenyi::new().keep_prob(0.75))
        );
    }

    #[test]
    fn edge_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g: Graph = Graph::from_vertices(0..200);

        g.erdos_renyi(rng, 0.9).unwrap();
        assert_symmetric(&g);

        // 19900 possible edges, expected 1990 kept
        let m = g.number_of_edges();
        assert!((1700..2300).contains(&m), "m = {m}");
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g: Graph = Graph::from_vertices(0..101);

        g.erdos_renyi_with(rng, &ErdosRenyi::new().avg_deg(10.0))
            .unwrap();

        // expected 505 edges
        let m = g.number_of_edges();
        assert!((400..610).contains(&m), "m = {m}");

        assert!(
            g.erdos_renyi_with(rng, &ErdosRenyi::new().avg_deg(200.0))
                .is_err()
        );
    }

    #[test]
    fn invalid_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut g: Graph = Graph::from_edges([], [(0, 1)]).unwrap();

        for generator in [
            ErdosRenyi::new(),
            ErdosRenyi::new().removal_prob(1.1),
            ErdosRenyi::new().keep_prob(-0.1),
        ] {
            let err = g.erdos_renyi_with(rng, &generator).unwrap_err();
            assert_eq!(err.code(), GraphErrorCode::InvalidParameter);
        }
        assert_eq!(g.ordered_edges(), vec![Edge(0, 1)]);
    }
}
