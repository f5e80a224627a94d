#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

/*!
Labelled traversals of complete binary trees.

A [`ValueTree`] stores node values in level order.
Every node has a [`NodeRole`] from its level (root, middle or leaf) and a label like `Leaf(5) `.
[`labelled_walk`] visits the tree in a [`TraversalOrder`] and concatenates the labels into one line:

```
use tree_walk_labels::{labelled_walk, TraversalOrder, ValueTree};

let tree = ValueTree::from_values(&[1, 2, 3, 4, 5, 6, 7]);
assert_eq!(
    labelled_walk(&tree, TraversalOrder::Preorder),
    "Root(1) Middle(2) Leaf(4) Leaf(5) Middle(3) Leaf(6) Leaf(7) ",
);
```

[`layout`] additionally computes drawing positions for every node the way the original
visualizer placed them, serializable for a frontend with the `serde` feature.
*/

mod label;
mod layout;
mod parse;
mod traverse;
mod tree;
mod walk;

pub use crate::label::{format_leaf_label, format_middle_label, format_root_label, NodeRole};
pub use crate::layout::{layout, LayoutNode};
pub use crate::parse::{parse_values, ParseError};
pub use crate::traverse::TraversalOrder;
pub use crate::tree::ValueTree;
pub use crate::walk::{labelled_walk, ImplicitTree};
