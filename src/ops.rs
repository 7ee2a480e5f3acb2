use itertools::Itertools;

use crate::{edge::*, error::*, vertex::*};

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphVertexOrder {
    /// Identifier type of the vertices
    type Vertex: Vertex;

    /// Iterator over all vertices, in no particular order
    type VertexIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns an iterator over V in no particular order.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns *true* if `v` is a vertex of the graph
    fn has_vertex(&self, v: &Self::Vertex) -> bool;

    /// Returns all vertices in ascending order.
    ///
    /// This is the fixed enumeration order used by every algorithm that needs positions
    /// (ring lattices, random vertex choices, ordered triples).
    fn ordered_vertices(&self) -> Vec<Self::Vertex> {
        let mut vertices = self.vertices().cloned().collect_vec();
        vertices.sort_unstable();
        vertices
    }

    /// Returns `Err(UnknownVertex)` if `v` is not a vertex of the graph
    fn check_vertex(&self, v: &Self::Vertex) -> Result<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(v))
        }
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (unordered) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphVertexOrder + Sized {
    /// Iterator over the neighbors of a single vertex
    type NeighborIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over the neighborhood of `u` or `None` if `u` is not a vertex
    fn try_neighbors_of(&self, u: &Self::Vertex) -> Option<Self::NeighborIter<'_>>;

    /// Returns the number of neighbors of `u` or `None` if `u` is not a vertex
    fn try_degree_of(&self, u: &Self::Vertex) -> Option<NumVertices>;

    /// Returns an iterator over the neighborhood of a given vertex.
    ///
    /// Reading the neighborhood of an unknown vertex is an error and does **not** create it.
    ///
    /// # Examples
    /// ```
    /// use graphstats::prelude::*;
    ///
    /// let g: Graph = Graph::from_edges([], [(0, 1), (0, 2)]).unwrap();
    ///
    /// let mut nbs: Vec<_> = g.neighbors_of(&0).unwrap().copied().collect();
    /// nbs.sort();
    /// assert_eq!(nbs, vec![1, 2]);
    /// assert!(g.neighbors_of(&5).is_err());
    /// ```
    fn neighbors_of(&self, u: &Self::Vertex) -> Result<Self::NeighborIter<'_>> {
        self.try_neighbors_of(u)
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: &Self::Vertex) -> Result<NumVertices> {
        self.try_degree_of(u)
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }

    /// Returns the degrees of all vertices in the order of [`GraphVertexOrder::vertices`]
    fn degrees(&self) -> impl Iterator<Item = NumVertices> + '_ {
        self.vertices().filter_map(|u| self.try_degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the degree distribution: entry `d` is the number of vertices with exactly `d` neighbors.
    ///
    /// In a simple graph every degree is less than `n`, so the result has length `n`
    /// (it is only extended if a larger degree is observed). The empty graph yields an empty vector.
    ///
    /// # Examples
    /// ```
    /// use graphstats::prelude::*;
    ///
    /// let g: Graph = Graph::from_edges([0, 1, 2, 3], [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(g.degree_distribution(), vec![1, 2, 1, 0]);
    /// ```
    fn degree_distribution(&self) -> Vec<NumVertices> {
        let n = self.number_of_vertices();
        if n == 0 {
            return Vec::new();
        }

        let mut distr = vec![0; n.max(self.max_degree() + 1)];
        for (d, count) in self.degrees().counts() {
            distr[d] = count;
        }
        distr
    }

    /// Returns an iterator over all edges in the graph in no particular order.
    /// Every unordered edge is returned exactly once and normalized.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_ {
        self.vertices().flat_map(move |u| {
            self.try_neighbors_of(u)
                .into_iter()
                .flatten()
                .filter(move |&v| u < v)
                .map(move |v| Edge(u.clone(), v.clone()))
        })
    }

    /// Returns all edges of the graph, normalized and in sorted order.
    fn ordered_edges(&self) -> Vec<Edge<Self::Vertex>> {
        let mut edges = self.edges().collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphVertexOrder {
    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// Fails with `UnknownVertex` if either endpoint is not a vertex.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<bool>;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph without vertices
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEdgeEditing: GraphNew + GraphVertexOrder {
    /// Adds a vertex to the graph.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Adds all vertices in the collection
    fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Adds the edge `{u, v}` to the graph, creating missing endpoints.
    /// Returns *true* exactly if the edge was present previously.
    /// Fails with `InvalidEdge` (without modifying the graph) if `u == v`.
    fn try_add_edge(&mut self, u: Self::Vertex, v: Self::Vertex) -> Result<bool>;

    /// Adds the edge `{u, v}` to the graph. Adding an existing edge is a no-op.
    /// Fails with `InvalidEdge` (without modifying the graph) if `u == v`.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex) -> Result<()> {
        self.try_add_edge(u, v).map(|_| ())
    }

    /// Adds all edges in the collection, stopping at the first invalid one
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Vertex>>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `{u, v}` from the graph.
    /// Returns *true* if the edge was removed and *false* if it did not exist.
    /// Unknown vertices are not created.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Removes all edges in the collection and returns the number of removed edges
    fn remove_edges<I, E>(&mut self, edges: I) -> NumEdges
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Vertex>>,
    {
        edges
            .into_iter()
            .map(|e| e.into())
            .filter(|Edge(u, v)| self.remove_edge(u, v))
            .count()
    }

    /// Removes every edge of the graph. The vertex set is unchanged.
    fn remove_all_edges(&mut self);
}

/// A super trait for creating a graph from scratch from a set of vertices and edges
pub trait GraphFromScratch: GraphEdgeEditing + Sized {
    /// Creates an edgeless graph on the given vertices
    fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices);
        graph
    }

    /// Creates a graph from an (optional) initial vertex list and an edge list.
    /// Endpoints of edges are added as vertices if they are not listed.
    fn from_edges<I, J, E>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Self::Vertex>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<Self::Vertex>>,
    {
        let mut graph = Self::from_vertices(vertices);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {}
