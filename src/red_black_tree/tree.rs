use crate::red_black_tree::node::{Color, Node};
use std::fmt;

/// An ordered tree of keys implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// and maintains three invariants: the root is black, a red node never has a red child, and
/// every path from a node down to an absent child passes through the same number of black
/// nodes. Keys that compare equal to an existing key are inserted into the right subtree, so
/// duplicates are kept.
///
/// Nodes are stored in a push-only arena owned by the tree; parent links are plain indices into
/// it rather than owning handles.
///
/// # Examples
/// ```
/// use balanced_trees::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(
///     tree.to_string(),
///     "- 2 (root 0)\n\
///      -- 1 (L 1)\n\
///      -- 3 (R 1)\n\n",
/// );
/// ```
#[derive(Serialize, Deserialize)]
pub struct RedBlackTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<usize>,
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Inserts a key into the tree. The new node starts red; the fixup loop then recolors and
    /// rotates from the attachment point toward the root until no red node has a red parent,
    /// and the root is forced back to black. A key equal to an existing key is inserted into the
    /// right subtree of its closest equal ancestor.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        let parent = self.find_parent(&key);
        let index = self.nodes.len();
        self.nodes.push(Node::new(key, parent));

        let parent = match parent {
            Some(parent) => parent,
            None => {
                self.nodes[index].color = Color::Black;
                self.root = Some(index);
                return;
            }
        };

        if self.nodes[index].key < self.nodes[parent].key {
            self.nodes[parent].left = Some(index);
        } else {
            self.nodes[parent].right = Some(index);
        }

        // A red child of a black root violates nothing.
        if self.nodes[parent].parent.is_none() {
            return;
        }

        self.fix(index);
        let root = self.root.expect("Expected a non-empty tree.");
        self.nodes[root].color = Color::Black;
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn find_parent(&self, key: &T) -> Option<usize> {
        let mut curr = self.root;
        let mut parent = None;
        while let Some(index) = curr {
            parent = Some(index);
            if *key < self.nodes[index].key {
                curr = self.nodes[index].left;
            } else {
                curr = self.nodes[index].right;
            }
        }
        parent
    }

    fn is_red(&self, index: Option<usize>) -> bool {
        match index {
            None => false,
            Some(index) => self.nodes[index].color == Color::Red,
        }
    }

    fn fix(&mut self, mut index: usize) {
        while let Some(parent) = self.nodes[index].parent {
            if self.nodes[parent].color != Color::Red {
                break;
            }
            let grandparent = match self.nodes[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            if Some(parent) == self.nodes[grandparent].right {
                let uncle = self.nodes[grandparent].left;
                if self.is_red(uncle) {
                    let uncle = uncle.expect("Expected a red uncle node.");
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    index = grandparent;
                } else {
                    if Some(index) == self.nodes[parent].left {
                        index = parent;
                        self.rotate_right(index);
                    }
                    let parent = self.nodes[index].parent.expect("Expected a parent node.");
                    let grandparent = self.nodes[parent]
                        .parent
                        .expect("Expected a grandparent node.");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            } else {
                let uncle = self.nodes[grandparent].right;
                if self.is_red(uncle) {
                    let uncle = uncle.expect("Expected a red uncle node.");
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    index = grandparent;
                } else {
                    if Some(index) == self.nodes[parent].right {
                        index = parent;
                        self.rotate_left(index);
                    }
                    let parent = self.nodes[index].parent.expect("Expected a parent node.");
                    let grandparent = self.nodes[parent]
                        .parent
                        .expect("Expected a grandparent node.");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            }
        }
    }

    fn rotate_left(&mut self, index: usize) {
        let child = self.nodes[index]
            .right
            .expect("Expected right child node to be `Some`.");
        self.nodes[index].right = self.nodes[child].left;
        if let Some(grandchild) = self.nodes[child].left {
            self.nodes[grandchild].parent = Some(index);
        }

        let parent = self.nodes[index].parent;
        self.nodes[child].parent = parent;
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                if Some(index) == self.nodes[parent].left {
                    self.nodes[parent].left = Some(child);
                } else {
                    self.nodes[parent].right = Some(child);
                }
            }
        }

        self.nodes[child].left = Some(index);
        self.nodes[index].parent = Some(child);
    }

    fn rotate_right(&mut self, index: usize) {
        let child = self.nodes[index]
            .left
            .expect("Expected left child node to be `Some`.");
        self.nodes[index].left = self.nodes[child].right;
        if let Some(grandchild) = self.nodes[child].right {
            self.nodes[grandchild].parent = Some(index);
        }

        let parent = self.nodes[index].parent;
        self.nodes[child].parent = parent;
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                if Some(index) == self.nodes[parent].right {
                    self.nodes[parent].right = Some(child);
                } else {
                    self.nodes[parent].left = Some(child);
                }
            }
        }

        self.nodes[child].right = Some(index);
        self.nodes[index].parent = Some(child);
    }
}

impl<T> RedBlackTree<T>
where
    T: Ord + fmt::Display,
{
    /// Writes the tree dump to standard output: one line per node in depth-first, left-before-
    /// right order, followed by a blank line. Each line carries the node's depth as a run of
    /// dashes, its key, its slot (`root`, `L`, or `R`), and its color digit. An empty tree
    /// prints the single line `empty`.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl<T> RedBlackTree<T>
where
    T: fmt::Display,
{
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        level: usize,
        mark: &str,
    ) -> fmt::Result {
        let node = &self.nodes[index];
        writeln!(f, "{} {} ({} {})", "-".repeat(level), node.key, mark, node.color)?;
        if let Some(child) = node.left {
            self.write_node(f, child, level + 1, "L")?;
        }
        if let Some(child) = node.right {
            self.write_node(f, child, level + 1, "R")?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for RedBlackTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => writeln!(f, "empty")?,
            Some(root) => self.write_node(f, root, 1, "root")?,
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, RedBlackTree};

    // Checks the red and parent-link invariants on the way down and returns the black-height,
    // counting absent children as black nil leaves.
    fn check_black_heights(tree: &RedBlackTree<u32>, index: Option<usize>) -> usize {
        let index = match index {
            None => return 1,
            Some(index) => index,
        };
        let node = &tree.nodes[index];

        if node.color == Color::Red {
            assert!(!tree.is_red(node.left));
            assert!(!tree.is_red(node.right));
        }
        if let Some(child) = node.left {
            assert_eq!(tree.nodes[child].parent, Some(index));
        }
        if let Some(child) = node.right {
            assert_eq!(tree.nodes[child].parent, Some(index));
        }

        let left_height = check_black_heights(tree, node.left);
        let right_height = check_black_heights(tree, node.right);
        assert_eq!(left_height, right_height);

        match node.color {
            Color::Black => left_height + 1,
            Color::Red => left_height,
        }
    }

    fn collect_in_order(tree: &RedBlackTree<u32>, index: Option<usize>, keys: &mut Vec<u32>) {
        if let Some(index) = index {
            collect_in_order(tree, tree.nodes[index].left, keys);
            keys.push(tree.nodes[index].key);
            collect_in_order(tree, tree.nodes[index].right, keys);
        }
    }

    fn assert_invariants(tree: &RedBlackTree<u32>) {
        if let Some(root) = tree.root {
            assert_eq!(tree.nodes[root].color, Color::Black);
            assert_eq!(tree.nodes[root].parent, None);
        }
        check_black_heights(tree, tree.root);
        let mut keys = Vec::new();
        collect_in_order(tree, tree.root, &mut keys);
        assert_eq!(keys.len(), tree.len());
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_first_insert_is_black_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);

        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 1);
        assert_eq!(tree.nodes[root].color, Color::Black);
        assert_invariants(&tree);
    }

    #[test]
    fn test_rotation_after_ascending_inserts() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);

        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 2);
        assert_eq!(tree.nodes[root].color, Color::Black);

        let left = tree.nodes[root].left.unwrap();
        assert_eq!(tree.nodes[left].key, 1);
        assert_eq!(tree.nodes[left].color, Color::Red);

        let right = tree.nodes[root].right.unwrap();
        assert_eq!(tree.nodes[right].key, 3);
        assert_eq!(tree.nodes[right].color, Color::Red);
        assert_invariants(&tree);
    }

    #[test]
    fn test_duplicate_goes_right() {
        let mut tree = RedBlackTree::new();
        tree.insert(5);
        tree.insert(5);

        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].left, None);
        let right = tree.nodes[root].right.unwrap();
        assert_eq!(tree.nodes[right].key, 5);
        assert_invariants(&tree);
    }

    #[test]
    fn test_invariants_after_every_insert() {
        let keys = [13, 8, 21, 1, 1, 34, 2, 55, 3, 5, 5, 0, 89, 8, 8];
        let mut tree = RedBlackTree::new();
        for &key in &keys {
            tree.insert(key);
            assert_invariants(&tree);
        }
        assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn test_descending_inserts_stay_balanced() {
        let mut tree = RedBlackTree::new();
        for key in (0..1024_u32).rev() {
            tree.insert(key);
        }
        assert_invariants(&tree);
    }
}
