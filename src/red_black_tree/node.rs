use std::fmt;

/// An enum representing the color of a node in a red black tree.
///
/// Renders as `0` for black and `1` for red in tree dumps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "0"),
            Color::Red => write!(f, "1"),
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// Nodes live in the tree's arena; `parent`, `left`, and `right` are indices into it. The parent
/// index is a back-reference for walking toward the root and carries no ownership.
#[derive(Serialize, Deserialize)]
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Option<usize>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}
