/*!
# Graph Representation

We use a single representation: every vertex owns an adjacency set (`FxHashSet<V>`) stored in a
`FxHashMap<V, _>` keyed by the vertex itself. Compared to arrays indexed by `0..n`, this allows
arbitrary vertex identifiers without renumbering, and the set semantics absorb duplicate insertions.

The representation maintains the following invariants after every mutation:
- every vertex has a (possibly empty) adjacency set,
- adjacency is symmetric: `v ∈ N(u) ⟺ u ∈ N(v)`,
- there are no self-loops,
- the cached edge count equals the number of unordered pairs.
*/

use crate::prelude::*;

mod undirected;

pub use undirected::*;
