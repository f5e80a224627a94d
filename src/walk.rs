use crate::label::NodeRole;
use crate::traverse::TraversalOrder;
use crate::tree::ValueTree;

/// Walk the tree in the given order and concatenate the label of every visited node.
///
/// The trailing space of each label acts as the separator, so the result is a single
/// space separated line like the original demo printed.
///
/// # Example
///
/// ```
/// # use tree_walk_labels::{labelled_walk, TraversalOrder, ValueTree};
/// let tree = ValueTree::from_values(&[1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(
///     labelled_walk(&tree, TraversalOrder::Preorder),
///     "Root(1) Middle(2) Leaf(4) Leaf(5) Middle(3) Leaf(6) Leaf(7) ",
/// );
/// ```
#[must_use]
pub fn labelled_walk(tree: &ValueTree, order: TraversalOrder) -> String {
    order
        .indices(tree)
        .into_iter()
        .filter_map(|index| tree.label(index))
        .collect()
}

/// A complete binary tree that exists only through its node identifiers.
///
/// The children of the node with id `n` are `2n` and `2n + 1` and the recursion stops
/// after `levels` levels. With the root id 1 this numbers the nodes 1 to 2^levels - 1,
/// the scheme the original demo used to hand ids across its tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitTree {
    root: i64,
    levels: usize,
}

impl ImplicitTree {
    #[must_use]
    pub const fn new(root: i64, levels: usize) -> Self {
        Self { root, levels }
    }

    /// The preorder label line of the whole tree.
    ///
    /// # Example
    ///
    /// ```
    /// # use tree_walk_labels::ImplicitTree;
    /// assert_eq!(
    ///     ImplicitTree::new(1, 3).labels(),
    ///     "Root(1) Middle(2) Leaf(4) Leaf(5) Middle(3) Leaf(6) Leaf(7) ",
    /// );
    /// ```
    #[must_use]
    pub fn labels(&self) -> String {
        let mut out = String::new();
        if self.levels > 0 {
            self.descend(self.root, 0, &mut out);
        }
        out
    }

    fn descend(&self, node: i64, level: usize, out: &mut String) {
        let role = if level == 0 {
            NodeRole::Root
        } else if level + 1 == self.levels {
            NodeRole::Leaf
        } else {
            NodeRole::Middle
        };
        out.push_str(&role.format(node));

        if level + 1 < self.levels {
            let left = node.saturating_mul(2);
            self.descend(left, level + 1, out);
            self.descend(left.saturating_add(1), level + 1, out);
        }
    }
}

#[test]
fn labelled_walk_inorder_works() {
    let tree = ValueTree::example();
    assert_eq!(
        labelled_walk(&tree, TraversalOrder::Inorder),
        "Leaf(4) Middle(2) Leaf(5) Root(1) Leaf(6) Middle(3) Leaf(7) "
    );
}

#[test]
fn labelled_walk_postorder_works() {
    let tree = ValueTree::example();
    assert_eq!(
        labelled_walk(&tree, TraversalOrder::Postorder),
        "Leaf(4) Leaf(5) Middle(2) Leaf(6) Leaf(7) Middle(3) Root(1) "
    );
}

#[test]
fn labelled_walk_empty_tree_is_empty() {
    let tree = ValueTree::from_values(&[]);
    assert_eq!(labelled_walk(&tree, TraversalOrder::Preorder), "");
}

#[test]
fn implicit_matches_value_tree_preorder() {
    let tree = ValueTree::example();
    assert_eq!(
        ImplicitTree::new(1, 3).labels(),
        labelled_walk(&tree, TraversalOrder::Preorder)
    );
}

#[test]
fn implicit_small_trees() {
    assert_eq!(ImplicitTree::new(1, 0).labels(), "");
    assert_eq!(ImplicitTree::new(1, 1).labels(), "Root(1) ");
    assert_eq!(ImplicitTree::new(1, 2).labels(), "Root(1) Leaf(2) Leaf(3) ");
}

#[test]
fn implicit_other_root_doubles_ids() {
    assert_eq!(
        ImplicitTree::new(3, 2).labels(),
        "Root(3) Leaf(6) Leaf(7) "
    );
}
