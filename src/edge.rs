use std::fmt::{Debug, Display};

use crate::vertex::{Node, Vertex};

/// An undirected edge is defined by two endpoints.
/// `Edge(u, v)` and `Edge(v, u)` denote the same edge; use [`Edge::normalized`] to compare them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V = Node>(pub V, pub V);

/// Number of edges in a graph
pub type NumEdges = usize;

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Vertex> Edge<V> {
    /// Normalizes the edge such that the smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }

    /// Returns the endpoint opposite to `u` or `None` if `u` is not an endpoint
    pub fn other(&self, u: &V) -> Option<&V> {
        if self.0 == *u {
            Some(&self.1)
        } else if self.1 == *u {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        value.clone()
    }
}

impl<V> From<Edge<V>> for (V, V) {
    fn from(value: Edge<V>) -> Self {
        (value.0, value.1)
    }
}
