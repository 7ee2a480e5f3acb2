/*!
# Graph Generators

This module provides generators that (re-)wire the edges of an existing graph.
In contrast to building a graph edge by edge, generators operate on the current **vertex set**:

- [`Lattice::make_complete`]: connects every pair of distinct vertices,
- [`Lattice::make_regular`]: replaces all edges by a ring lattice,
- [`SmallWorld::rewire`]: Watts–Strogatz rewiring of the existing edges,
- [`ErdosRenyiModel::erdos_renyi`]: complete graph followed by independent random edge removal.

Generators that need further configuration are available as structs using the builder pattern
(e.g. `Rewiring::new().prob(0.1).allow_duplicate(false)`), applied via `*_with` methods.

Randomized generators never consult global state: the random number generator is an explicit argument,
so seeding it makes every result reproducible.

In addition, the [`RandomGraph`] trait bundles the generators into constructors for graphs over the
vertices `0..n`.
*/

use rand::Rng;

use crate::{
    prelude::*,
    utils::{Probability, check_probability},
};

mod erdos_renyi;
mod lattice;
mod rewire;
mod substructures;

pub use erdos_renyi::*;
pub use lattice::*;
pub use rewire::*;
pub use substructures::*;

/// Trait for building full graph instances over the vertices `0..n` from the generators above.
pub trait RandomGraph: Sized {
    /// Creates the complete graph `K_n`.
    fn complete(n: Node) -> Self;

    /// Creates a ring lattice where every vertex is connected to the next `k - 1` vertices.
    /// Fails with `InvalidParameter` unless `1 <= k < n`.
    fn ring_lattice(n: Node, k: NumVertices) -> Result<Self>;

    /// Creates a Watts–Strogatz small-world graph: a ring lattice with parameter `k`
    /// whose edges are rewired with probability `p`.
    ///
    /// # Example
    /// ```rust
    /// use graphstats::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(3);
    /// let g: Graph = Graph::watts_strogatz(rng, 100, 5, 0.05).unwrap();
    ///
    /// assert_eq!(g.number_of_vertices(), 100);
    /// assert!(g.number_of_edges() <= 400);
    /// ```
    fn watts_strogatz<R>(rng: &mut R, n: Node, k: NumVertices, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates the complete graph `K_n` and removes every edge independently with probability `p`.
    fn erdos_renyi_graph<R>(rng: &mut R, n: Node, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph in which every edge is present independently with
    /// probability `p` (ie. removed from the complete graph with probability `1 - p`).
    fn gnp<R>(rng: &mut R, n: Node, p: f64) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing<Vertex = Node> + AdjacencyList + GraphEdgeOrder,
{
    fn complete(n: Node) -> Self {
        let mut graph = Self::from_vertices(0..n);
        graph.make_complete();
        graph
    }

    fn ring_lattice(n: Node, k: NumVertices) -> Result<Self> {
        let mut graph = Self::from_vertices(0..n);
        graph.make_regular(k)?;
        Ok(graph)
    }

    fn watts_strogatz<R>(rng: &mut R, n: Node, k: NumVertices, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        let mut graph = Self::ring_lattice(n, k)?;
        graph.rewire(rng, p)?;
        Ok(graph)
    }

    fn erdos_renyi_graph<R>(rng: &mut R, n: Node, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        let mut graph = Self::from_vertices(0..n);
        graph.erdos_renyi(rng, p)?;
        Ok(graph)
    }

    fn gnp<R>(rng: &mut R, n: Node, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        let mut graph = Self::from_vertices(0..n);
        graph.erdos_renyi_with(rng, &ErdosRenyi::new().keep_prob(p))?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn constructors() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let g = Graph::<Node>::complete(6);
        assert_eq!(g.number_of_edges(), 15);

        let g = Graph::<Node>::ring_lattice(10, 3).unwrap();
        assert!(g.degrees().all(|d| d == 4));
        assert!(Graph::<Node>::ring_lattice(3, 3).is_err());

        let g = Graph::<Node>::watts_strogatz(rng, 50, 3, 0.0).unwrap();
        assert_eq!(g, Graph::<Node>::ring_lattice(50, 3).unwrap());

        let g = Graph::<Node>::gnp(rng, 12, 1.0).unwrap();
        assert_eq!(g, Graph::<Node>::complete(12));

        let g = Graph::<Node>::gnp(rng, 12, 0.0).unwrap();
        assert!(g.is_edgeless());
        assert!(Graph::<Node>::gnp(rng, 12, 2.0).is_err());

        let g = Graph::<Node>::erdos_renyi_graph(rng, 12, 1.0).unwrap();
        assert_eq!(g.number_of_vertices(), 12);
        assert!(g.is_edgeless());
        assert!(Graph::<Node>::erdos_renyi_graph(rng, 12, -1.0).is_err());
    }
}
