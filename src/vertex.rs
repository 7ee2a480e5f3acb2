/*!
# Vertex Representation

Vertices are opaque identifiers: any type that can be cloned, hashed, compared and printed for diagnostics.
The total order is only used to fix an enumeration order, e.g. to lay the vertices on a ring or to
normalize edges, so that results do not depend on hash-map iteration order.

We default to `Node = u32` as almost all use-cases involve less than `2^32` vertices.
*/

use std::{fmt::Debug, hash::Hash};

/// Bound for vertex identifiers
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Default vertex identifier
pub type Node = u32;

/// Number of vertices in a graph (or degree of a vertex)
pub type NumVertices = usize;
