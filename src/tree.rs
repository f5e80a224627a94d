use crate::NodeRole;

/// A complete binary tree stored as its values in level order.
///
/// The children of the node at index `i` are at `2i + 1` and `2i + 2`, as long as those indices exist.
/// This is the usual heap layout: no child pointers are stored and there are no gaps.
///
/// # Example
///
/// ```
/// # use tree_walk_labels::{NodeRole, ValueTree};
/// let tree = ValueTree::from_values(&[1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.role(0), Some(NodeRole::Root));
/// assert_eq!(tree.role(4), Some(NodeRole::Leaf));
/// assert_eq!(tree.label(4), Some("Leaf(5) ".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTree {
    values: Vec<i64>,
}

impl ValueTree {
    #[must_use]
    pub const fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn from_values(values: &[i64]) -> Self {
        Self::new(values.to_vec())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value stored at the given index.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Index of the left child of the node at the given index, when it exists.
    #[must_use]
    pub fn left(&self, index: usize) -> Option<usize> {
        self.child(index, 1)
    }

    /// Index of the right child of the node at the given index, when it exists.
    #[must_use]
    pub fn right(&self, index: usize) -> Option<usize> {
        self.child(index, 2)
    }

    fn child(&self, index: usize, offset: usize) -> Option<usize> {
        let child = index.checked_mul(2)?.checked_add(offset)?;
        (child < self.values.len()).then_some(child)
    }

    /// Zero based level of the index in the heap layout. The root index 0 is on level 0.
    #[must_use]
    pub fn level(index: usize) -> usize {
        // index + 1 is the one based heap position, its log2 is the level
        (index + 1).ilog2() as usize
    }

    /// Amount of levels in the tree. An empty tree has height 0, a lone root height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.values.is_empty() {
            0
        } else {
            self.values.len().ilog2() as usize + 1
        }
    }

    /// Role of the node at the given index: level 0 is the root, the deepest level are leaves, everything in between is a middle.
    ///
    /// The only node of a single level tree counts as the root.
    #[must_use]
    pub fn role(&self, index: usize) -> Option<NodeRole> {
        if index >= self.values.len() {
            return None;
        }
        let level = Self::level(index);
        let role = if level == 0 {
            NodeRole::Root
        } else if level == self.height() - 1 {
            NodeRole::Leaf
        } else {
            NodeRole::Middle
        };
        Some(role)
    }

    /// The formatted label of the node at the given index, like `Leaf(5) `.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<String> {
        let role = self.role(index)?;
        let value = self.value(index)?;
        Some(role.format(value))
    }
}

#[cfg(test)]
impl ValueTree {
    /// The seven node example of the original visualizer: three full levels.
    pub(crate) fn example() -> Self {
        Self::from_values(&[1, 2, 3, 4, 5, 6, 7])
    }
}

#[test]
fn level_works() {
    assert_eq!(ValueTree::level(0), 0);
    assert_eq!(ValueTree::level(1), 1);
    assert_eq!(ValueTree::level(2), 1);
    assert_eq!(ValueTree::level(3), 2);
    assert_eq!(ValueTree::level(6), 2);
    assert_eq!(ValueTree::level(7), 3);
}

#[test]
fn height_works() {
    assert_eq!(ValueTree::from_values(&[]).height(), 0);
    assert_eq!(ValueTree::from_values(&[1]).height(), 1);
    assert_eq!(ValueTree::from_values(&[1, 2]).height(), 2);
    assert_eq!(ValueTree::example().height(), 3);
    assert_eq!(ValueTree::from_values(&[1, 2, 3, 4, 5, 6, 7, 8]).height(), 4);
}

#[test]
fn children_stay_in_bounds() {
    let tree = ValueTree::from_values(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(tree.left(0), Some(1));
    assert_eq!(tree.right(0), Some(2));
    assert_eq!(tree.left(2), Some(5));
    assert_eq!(tree.right(2), None);
    assert_eq!(tree.left(3), None);
}

#[test]
fn roles_follow_levels() {
    let tree = ValueTree::example();
    assert_eq!(tree.role(0), Some(NodeRole::Root));
    assert_eq!(tree.role(1), Some(NodeRole::Middle));
    assert_eq!(tree.role(2), Some(NodeRole::Middle));
    for index in 3..7 {
        assert_eq!(tree.role(index), Some(NodeRole::Leaf));
    }
    assert_eq!(tree.role(7), None);
}

#[test]
fn lone_root_is_root_not_leaf() {
    let tree = ValueTree::from_values(&[9]);
    assert_eq!(tree.role(0), Some(NodeRole::Root));
}

#[test]
fn label_uses_value_not_index() {
    let tree = ValueTree::from_values(&[10, 20, 30]);
    assert_eq!(tree.label(0), Some("Root(10) ".to_owned()));
    assert_eq!(tree.label(2), Some("Leaf(30) ".to_owned()));
    assert_eq!(tree.label(3), None);
}
