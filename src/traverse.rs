use std::str::FromStr;

use crate::parse::ParseError;
use crate::tree::ValueTree;

/// Order in which a [`ValueTree`] is visited.
///
/// # Example
///
/// ```
/// # use tree_walk_labels::{TraversalOrder, ValueTree};
/// let tree = ValueTree::from_values(&[1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(
///     TraversalOrder::Inorder.values(&tree),
///     [4, 2, 5, 1, 6, 3, 7],
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TraversalOrder {
    Preorder,
    #[default]
    Inorder,
    Postorder,
}

impl TraversalOrder {
    /// Visit sequence as indices into the tree.
    #[must_use]
    pub fn indices(self, tree: &ValueTree) -> Vec<usize> {
        let mut result = Vec::with_capacity(tree.len());
        if !tree.is_empty() {
            self.collect(tree, 0, &mut result);
        }
        result
    }

    fn collect(self, tree: &ValueTree, index: usize, result: &mut Vec<usize>) {
        if self == Self::Preorder {
            result.push(index);
        }
        if let Some(left) = tree.left(index) {
            self.collect(tree, left, result);
        }
        if self == Self::Inorder {
            result.push(index);
        }
        if let Some(right) = tree.right(index) {
            self.collect(tree, right, result);
        }
        if self == Self::Postorder {
            result.push(index);
        }
    }

    /// Visit sequence as the stored node values.
    ///
    /// This is the step sequence the original visualizer animates.
    #[must_use]
    pub fn values(self, tree: &ValueTree) -> Vec<i64> {
        self.indices(tree)
            .into_iter()
            .filter_map(|index| tree.value(index))
            .collect()
    }
}

impl FromStr for TraversalOrder {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "preorder" => Ok(Self::Preorder),
            "inorder" => Ok(Self::Inorder),
            "postorder" => Ok(Self::Postorder),
            _ => Err(ParseError::UnknownOrder(input.to_owned())),
        }
    }
}

#[cfg(test)]
fn order_works(order: TraversalOrder, expected: &[i64]) {
    let tree = ValueTree::example();
    assert_eq!(order.values(&tree), expected);
}

#[test]
fn preorder_works() {
    order_works(TraversalOrder::Preorder, &[1, 2, 4, 5, 3, 6, 7]);
}

#[test]
fn inorder_works() {
    order_works(TraversalOrder::Inorder, &[4, 2, 5, 1, 6, 3, 7]);
}

#[test]
fn postorder_works() {
    order_works(TraversalOrder::Postorder, &[4, 5, 2, 6, 7, 3, 1]);
}

#[test]
fn incomplete_last_level_works() {
    let tree = ValueTree::from_values(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(TraversalOrder::Inorder.values(&tree), [4, 2, 5, 1, 6, 3]);
}

#[test]
fn empty_tree_has_no_steps() {
    let tree = ValueTree::from_values(&[]);
    assert!(TraversalOrder::Preorder.indices(&tree).is_empty());
    assert!(TraversalOrder::Preorder.values(&tree).is_empty());
}

#[test]
fn visits_every_node_once() {
    let tree = ValueTree::example();
    for order in [
        TraversalOrder::Preorder,
        TraversalOrder::Inorder,
        TraversalOrder::Postorder,
    ] {
        let mut indices = order.indices(&tree);
        indices.sort_unstable();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5, 6]);
    }
}

#[test]
fn from_str_works() {
    assert_eq!(
        "inorder".parse::<TraversalOrder>().unwrap(),
        TraversalOrder::Inorder
    );
    assert_eq!(
        " Preorder ".parse::<TraversalOrder>().unwrap(),
        TraversalOrder::Preorder
    );
    "sideways".parse::<TraversalOrder>().unwrap_err();
}
