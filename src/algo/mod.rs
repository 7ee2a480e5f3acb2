/*!
# Graph Algorithms

This module provides the **analysis routines** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graphstats::algo::*;
```
and gain access to breadth-first traversal, shortest-path statistics, motif counts and
differentially private k-star estimates.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

All state is keyed by vertex, so any [`Vertex`](crate::vertex::Vertex) type works without
renumbering the vertices first.
*/

mod distances;
mod motifs;
mod privacy;
mod traversal;

use fxhash::{FxHashMap, FxHashSet};

use crate::prelude::*;

pub use distances::*;
pub use motifs::*;
pub use privacy::*;
pub use traversal::*;
