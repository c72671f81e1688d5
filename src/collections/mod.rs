//! Supporting collections for the graph engine.
//!
//! - `arena`: generational storage with insertion-ordered iteration
//! - `partition`: union-find forest
//! - `priority_queue`: binary heap with locators (decrease-key, arbitrary removal)

pub mod arena;
pub mod partition;
pub mod priority_queue;

pub use arena::{Arena, ArenaKey};
pub use partition::{ClusterKey, Partition};
pub use priority_queue::{
    AdaptablePriorityQueue, CompareFn, KeyOrder, Locator, NaturalOrder, ReverseOrder,
};
