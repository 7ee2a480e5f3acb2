/*!
`graphstats` is a small graph data structure & statistics library for graphs that are
- **undirected** : `Edge(u, v)` and `Edge(v, u)` denote the same edge
- **unweighted** : Neither vertices nor edges have a weight attached to them
- **simple** : There are no self-loops and no multi-edges

# Representation

A [`Graph`](crate::repr::Graph) stores one adjacency set per vertex in a `FxHashMap<V, FxHashSet<V>>`.
Vertices can be any type implementing [`Vertex`](crate::vertex::Vertex) (i.e. `Clone + Eq + Hash + Ord + Debug`);
the default identifier is `Node = u32`.
Edges are not stored explicitly: an edge `{u, v}` exists exactly if `v` is in the adjacency set of `u`
(and thus, by symmetry, `u` in the one of `v`).
Whenever edges are listed, every unordered pair is reported exactly once in normalized form `Edge(u, v)` with `u < v`.

# Design

Basic graph operations are split into the traits of [`ops`].
Generators and algorithms are implemented on top of these traits and are thus available as methods on the graph itself.
Where a generator needs further configuration, a struct with setters is provided (e.g. [`Rewiring`](crate::gens::Rewiring)).

All randomized generators take the random number generator as an explicit argument, so seeding a
`rand_pcg::Pcg64Mcg` makes every result reproducible.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations and the graph representation,
- [`gens`] includes generators that (re-)wire the edges of a graph: complete graphs, ring lattices, small-world rewiring and Erdős–Rényi thinning,
- [`algo`] includes analysis traits such as BFS distances, average path lengths, triangle/k-star counts and differentially private k-star estimates,
- [`io`] includes a CSV edge-list reader/writer and the text representation of a graph.

In most use-cases, `use graphstats::{prelude::*, gens::*, algo::*};` suffices for your needs.

```
use graphstats::{prelude::*, gens::*, algo::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(7);

let mut graph: Graph = Graph::from_vertices(0..20);
graph.make_regular(3).unwrap();
graph.rewire(rng, 0.1).unwrap();

assert!(graph.number_of_edges() <= 40);
assert_eq!(graph.shortest_path_length(&0, &0).unwrap(), Some(0));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

/// `graphstats::prelude` includes definitions for vertices, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
