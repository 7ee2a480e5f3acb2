/*!
Breadth-first traversal and the shortest-path queries derived from it.

This module provides:
- [`Bfs`], a lazy breadth-first iterator yielding every reachable vertex together with its hop distance.
- The [`Traversal`] trait that exposes traversal-based queries (distances, shortest paths, connectivity)
  directly as methods on graph data structures.

Visited-states and predecessors are stored in a map keyed by vertex, so the search works for arbitrary
vertex identifiers and never assumes contiguous integer labels.
*/

use std::collections::VecDeque;

use super::*;

/// Breadth-first search iterator starting at a fixed vertex.
///
/// Yields `(vertex, distance)` pairs in non-decreasing order of distance.
/// Each reachable vertex is yielded exactly once; the start vertex comes first with distance `0`.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    predecessors: FxHashMap<G::Vertex, Option<G::Vertex>>,
    queue: VecDeque<(G::Vertex, usize)>,
    stop_at: Option<G::Vertex>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting at `start`.
    /// Fails with `UnknownVertex` if `start` is not a vertex of `graph`.
    pub fn new(graph: &'a G, start: G::Vertex) -> Result<Self> {
        graph.check_vertex(&start)?;

        let mut predecessors = FxHashMap::default();
        predecessors.insert(start.clone(), None);

        Ok(Self {
            graph,
            predecessors,
            queue: VecDeque::from(vec![(start, 0)]),
            stop_at: None,
        })
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: G::Vertex) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Returns *true* if `u` was discovered by the search so far (it may not have been yielded yet).
    pub fn did_visit(&self, u: &G::Vertex) -> bool {
        self.predecessors.contains_key(u)
    }

    /// Returns the vertex from which `u` was discovered.
    /// The start vertex and undiscovered vertices have no predecessor.
    pub fn predecessor_of(&self, u: &G::Vertex) -> Option<&G::Vertex> {
        self.predecessors.get(u)?.as_ref()
    }

    /// Returns the path from the start vertex to `target` along the BFS tree,
    /// or `None` if `target` has not been discovered yet.
    ///
    /// As the tree is a BFS tree, the path is a shortest path.
    pub fn path_to(&self, target: &G::Vertex) -> Option<Vec<G::Vertex>> {
        let mut path = vec![target.clone()];
        let mut current = self.predecessors.get(target)?;

        while let Some(pred) = current {
            path.push(pred.clone());
            current = self.predecessors.get(pred)?;
        }

        path.reverse();
        Some(path)
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = (G::Vertex, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (u, dist) = self.queue.pop_front()?;

        if self.stop_at.as_ref() == Some(&u) {
            self.queue.clear(); // drop all
        } else {
            let graph = self.graph;
            for v in graph.try_neighbors_of(&u).into_iter().flatten() {
                if !self.predecessors.contains_key(v) {
                    self.predecessors.insert(v.clone(), Some(u.clone()));
                    self.queue.push_back((v.clone(), dist + 1));
                }
            }
        }

        Some((u, dist))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let undiscovered = self.graph.number_of_vertices() - self.predecessors.len();
        (self.queue.len(), Some(self.queue.len() + undiscovered))
    }
}

/// Traversal-based queries available on every adjacency list.
pub trait Traversal: AdjacencyList {
    /// Returns a breadth-first search iterator starting at `start`.
    /// Fails with `UnknownVertex` if `start` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, algo::*};
    ///
    /// let g: Graph = Graph::from_edges([], [(0, 1), (1, 2), (5, 6)]).unwrap();
    ///
    /// let mut order: Vec<_> = g.bfs(&1).unwrap().collect();
    /// order.sort();
    /// assert_eq!(order, vec![(0, 1), (1, 0), (2, 1)]);
    /// ```
    fn bfs(&self, start: &Self::Vertex) -> Result<Bfs<'_, Self>> {
        Bfs::new(self, start.clone())
    }

    /// Returns the hop distance from `start` to every vertex reachable from it (including `start` itself).
    fn bfs_distances(&self, start: &Self::Vertex) -> Result<FxHashMap<Self::Vertex, usize>> {
        Ok(self.bfs(start)?.collect())
    }

    /// Returns the hop distance between `s` and `t`, or `None` if `t` is not reachable from `s`.
    /// The distance of a vertex to itself is `0`.
    /// Fails with `UnknownVertex` if `s` or `t` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, algo::*};
    ///
    /// let g: Graph = Graph::from_edges(0..6, [(0, 1), (1, 2), (1, 3), (3, 4)]).unwrap();
    ///
    /// assert_eq!(g.shortest_path_length(&0, &4).unwrap(), Some(3));
    /// assert_eq!(g.shortest_path_length(&0, &5).unwrap(), None);
    /// assert!(g.shortest_path_length(&0, &9).is_err());
    /// ```
    fn shortest_path_length(&self, s: &Self::Vertex, t: &Self::Vertex) -> Result<Option<usize>> {
        self.check_vertex(t)?;
        Ok(self
            .bfs(s)?
            .stop_at(t.clone())
            .find_map(|(v, dist)| (&v == t).then_some(dist)))
    }

    /// Returns one shortest path from `s` to `t` (both included), or `None` if `t` is not reachable from `s`.
    /// Fails with `UnknownVertex` if `s` or `t` is not a vertex.
    fn shortest_path(&self, s: &Self::Vertex, t: &Self::Vertex) -> Result<Option<Vec<Self::Vertex>>> {
        self.check_vertex(t)?;

        let mut bfs = self.bfs(s)?.stop_at(t.clone());
        if bfs.by_ref().any(|(v, _)| &v == t) {
            Ok(bfs.path_to(t))
        } else {
            Ok(None)
        }
    }

    /// Returns *true* if every vertex is reachable from every other vertex.
    /// Graphs with less than two vertices are connected.
    fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return true;
        };

        Bfs::new(self, start.clone())
            .map(|bfs| bfs.count() == self.number_of_vertices())
            .unwrap_or(false)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}
