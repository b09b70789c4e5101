//! An ordered map backed by an index-linked AVL tree.
//!
//! [`AvlMap`] maps unique, totally-ordered keys to values, keeping entries
//! in ascending key order and the underlying tree within the AVL balance
//! bound - lookups, insertions and removals are O(log n) regardless of the
//! order in which entries are inserted or removed.
//!
//! Nodes are stored in an index-addressed arena and linked by stable
//! handles (parent, left, right) rather than owning pointers, so the
//! rebalancing fixups can walk from a mutation point towards the root and
//! rewire subtrees in constant time.
//!
//! # Example
//!
//! ```
//! use avlmap::AvlMap;
//!
//! let mut map = AvlMap::default();
//!
//! map.insert("bananas", 42);
//! map.insert("platanos", 24);
//!
//! assert_eq!(map.get(&"bananas"), Some(&42));
//!
//! // Entries iterate in ascending key order.
//! let keys = map.iter().map(|(k, _v)| *k).collect::<Vec<_>>();
//! assert_eq!(keys, ["bananas", "platanos"]);
//! ```

mod arena;
mod balance;
mod entry;
mod iter;
mod node;
mod tree;


pub use entry::*;
pub use iter::*;
pub use tree::*;
