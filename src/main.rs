extern crate balanced_trees;

use balanced_trees::avl_tree::AvlTree;
use balanced_trees::red_black_tree::RedBlackTree;

fn main() {
    let mut tree = AvlTree::new();
    for &key in &[4, 1, 2, 3, 4, 5, 6, 7, 8] {
        tree.insert(key);
    }
    tree.print();

    let mut tree = RedBlackTree::new();
    for &key in &[4, 1, 2, 3, 4, 5, 6, 7, 8] {
        tree.insert(key);
    }
    tree.print();
}
