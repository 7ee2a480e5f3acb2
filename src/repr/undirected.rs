use std::collections::{hash_map::Keys, hash_set::Iter};

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// An undirected, unweighted graph with set-based adjacency
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<V: Vertex = Node> {
    nbs: FxHashMap<V, FxHashSet<V>>,
    num_edges: NumEdges,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self {
            nbs: FxHashMap::default(),
            num_edges: 0,
        }
    }
}

impl<V: Vertex> GraphNew for Graph<V> {
    fn new() -> Self {
        Self::default()
    }
}

impl<V: Vertex> GraphVertexOrder for Graph<V> {
    type Vertex = V;

    type VertexIter<'a>
        = Keys<'a, V, FxHashSet<V>>
    where
        Self: 'a;

    fn number_of_vertices(&self) -> NumVertices {
        self.nbs.len()
    }

    fn vertices(&self) -> Self::VertexIter<'_> {
        self.nbs.keys()
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.nbs.contains_key(v)
    }
}

impl<V: Vertex> GraphEdgeOrder for Graph<V> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V: Vertex> AdjacencyList for Graph<V> {
    type NeighborIter<'a>
        = Iter<'a, V>
    where
        Self: 'a;

    fn try_neighbors_of(&self, u: &V) -> Option<Self::NeighborIter<'_>> {
        self.nbs.get(u).map(|nbs| nbs.iter())
    }

    fn try_degree_of(&self, u: &V) -> Option<NumVertices> {
        self.nbs.get(u).map(|nbs| nbs.len())
    }
}

impl<V: Vertex> AdjacencyTest for Graph<V> {
    fn has_edge(&self, u: &V, v: &V) -> Result<bool> {
        self.check_vertex(v)?;
        self.nbs
            .get(u)
            .map(|nbs| nbs.contains(v))
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }
}

impl<V: Vertex> GraphEdgeEditing for Graph<V> {
    fn add_vertex(&mut self, v: V) -> bool {
        if self.nbs.contains_key(&v) {
            false
        } else {
            self.nbs.insert(v, FxHashSet::default());
            true
        }
    }

    fn try_add_edge(&mut self, u: V, v: V) -> Result<bool> {
        if u == v {
            return Err(GraphError::self_loop(&u));
        }

        let is_new = self.nbs.entry(u.clone()).or_default().insert(v.clone());
        let is_new_reverse = self.nbs.entry(v).or_default().insert(u);
        debug_assert_eq!(is_new, is_new_reverse);

        if is_new {
            self.num_edges += 1;
        }
        Ok(!is_new)
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let removed = self.nbs.get_mut(u).is_some_and(|nbs| nbs.remove(v));
        if removed {
            let removed_reverse = self.nbs.get_mut(v).is_some_and(|nbs| nbs.remove(u));
            debug_assert!(removed_reverse);
            self.num_edges -= 1;
        }
        removed
    }

    fn remove_all_edges(&mut self) {
        for nbs in self.nbs.values_mut() {
            nbs.clear();
        }
        self.num_edges = 0;
    }
}
