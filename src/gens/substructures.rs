/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**
- **Ring lattices**

These are the building blocks of the lattice generators and are useful on their own when
enriching a graph with specific structures for testing algorithms.

# Example

```rust
use graphstats::{prelude::*, gens::*};

let mut g: Graph = Graph::new();
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();
g.connect_clique(&[0, 2, 4]);

assert_eq!(
    g.ordered_edges(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques, ring lattices)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing. Missing vertices are created.
pub trait GeneratorSubstructures: GraphVertexOrder {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single edge.
    /// Fails with `InvalidEdge` if two consecutive vertices are equal.
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Self::Vertex>;

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first.
    ///
    /// A single vertex does not form a cycle (self-loops are not allowed) and is only added as vertex.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Self::Vertex>;

    /// Connects all given vertices into a **clique** (complete subgraph).
    /// Repeated vertices are ignored. Returns the number of newly inserted edges.
    fn connect_clique(&mut self, vertices: &[Self::Vertex]) -> NumEdges;

    /// Places the vertices on a ring in the given order and connects every vertex to the next
    /// `reach` vertices along the ring (wrapping around at the end).
    /// Returns the number of newly inserted edges.
    ///
    /// Fails with `InvalidParameter` if `reach >= vertices.len()` as this would wrap around
    /// onto the vertex itself.
    ///
    /// # Example
    /// ```rust
    /// use graphstats::{prelude::*, gens::*};
    ///
    /// let mut g: Graph = Graph::new();
    /// g.connect_ring_lattice(&[0, 1, 2, 3, 4], 2).unwrap();
    ///
    /// assert_eq!(g.number_of_edges(), 10);
    /// assert!(g.degrees().all(|d| d == 4));
    /// ```
    fn connect_ring_lattice(
        &mut self,
        vertices: &[Self::Vertex],
        reach: NumVertices,
    ) -> Result<NumEdges>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Self::Vertex>,
    {
        let mut iter = vertices_on_path.into_iter().peekable();
        if let Some(first) = iter.peek() {
            self.add_vertex(first.clone());
        }

        for (u, v) in iter.tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Self::Vertex>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            self.add_vertex(first.clone());

            let mut prev = first.clone();
            for cur in iter {
                self.add_edge(prev, cur.clone())?;
                prev = cur;
            }

            if prev != first {
                self.add_edge(prev, first)?;
            }
        }
        Ok(())
    }

    fn connect_clique(&mut self, vertices: &[Self::Vertex]) -> NumEdges {
        self.add_vertices(vertices.iter().cloned());

        vertices
            .iter()
            .tuple_combinations()
            .filter(|(u, v)| u != v)
            .filter(|&(u, v)| matches!(self.try_add_edge(u.clone(), v.clone()), Ok(false)))
            .count()
    }

    fn connect_ring_lattice(
        &mut self,
        vertices: &[Self::Vertex],
        reach: NumVertices,
    ) -> Result<NumEdges> {
        let n = vertices.len();
        if reach > 0 && reach >= n {
            return Err(GraphError::invalid_parameter(
                "reach",
                format!("a ring of {n} vertices allows a reach of at most {}", n.saturating_sub(1)),
            ));
        }

        self.add_vertices(vertices.iter().cloned());

        let mut added = 0;
        for (i, u) in vertices.iter().enumerate() {
            for j in 1..=reach {
                let v = &vertices[(i + j) % n];
                if !self.try_add_edge(u.clone(), v.clone())? {
                    added += 1;
                }
            }
        }
        Ok(added)
    }
}
