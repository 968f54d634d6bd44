//! Two self-balancing binary search trees with ordered-key insertion: an AVL tree that keeps a
//! height on every node and rotates on the balance factor, and a red-black tree that keeps a
//! color on every node and rebalances with a recolor-and-rotate fixup loop.
//!
//! Both trees insert one key at a time and render a human-readable dump of their current
//! structure. Keys that compare equal to an existing key are routed into the right subtree, so
//! duplicates are kept rather than rejected or replaced.

#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
pub mod red_black_tree;
