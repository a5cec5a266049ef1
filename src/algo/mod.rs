/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use algographs::algo::*;
```
and gain access to traversal, topological ordering, connectivity, cycle checks and path queries.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

Every algorithm is exposed as a trait with a blanket implementation, restricted via
[`GraphType`] or [`DirectedAdjacencyList`] to the graph variants where it is meaningful.
*/

mod connectivity;
mod cycles;
mod paths;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use cycles::*;
pub use paths::*;
pub use traversal::*;
