//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions.

mod node;
mod tree;

pub use self::node::Color;
pub use self::tree::RedBlackTree;
