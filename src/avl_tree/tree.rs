use crate::avl_tree::node::Node;
use std::fmt;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() < -1 {
        if let Some(child) = node.left.take() {
            if child.balance() > 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() > 1 {
        if let Some(child) = node.right.take() {
            if child.balance() < 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

fn insert<T>(tree: &mut Tree<T>, key: T)
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            if key < node.key {
                insert(&mut node.left, key);
            } else {
                insert(&mut node.right, key);
            }
        }
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return;
        }
    }

    balance(tree);
}

fn write_node<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    level: usize,
    mark: &str,
) -> fmt::Result
where
    T: fmt::Display,
{
    writeln!(f, "{} {} {} {}", "-".repeat(level), mark, node.key, node.height)?;
    if let Some(ref child) = node.left {
        write_node(f, child, level + 1, "L")?;
    }
    if let Some(ref child) = node.right {
        write_node(f, child, level + 1, "R")?;
    }
    Ok(())
}

/// An ordered tree of keys implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Keys that compare equal
/// to an existing key are inserted into the right subtree, so duplicates are kept.
///
/// # Examples
/// ```
/// use balanced_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(
///     tree.to_string(),
///     "- root 2 2\n\
///      -- L 1 1\n\
///      -- R 3 1\n\n",
/// );
/// ```
#[derive(Serialize, Deserialize)]
pub struct AvlTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree, rebalancing on the way back up so that every node's balance
    /// factor stays in `[-1, 1]`. A key equal to an existing key is inserted into the right
    /// subtree of its closest equal ancestor.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        insert(&mut self.root, key);
        self.len += 1;
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> AvlTree<T>
where
    T: Ord + fmt::Display,
{
    /// Writes the tree dump to standard output: one line per node in depth-first, left-before-
    /// right order, followed by a blank line. Each line carries the node's depth as a run of
    /// dashes, its slot (`root`, `L`, or `R`), its key, and its height. An empty tree prints the
    /// single line `empty`.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl<T> fmt::Display for AvlTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => writeln!(f, "empty")?,
            Some(ref node) => write_node(f, node, 1, "root")?,
        }
        writeln!(f)
    }
}
