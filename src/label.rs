/// Tier of a node inside a [`ValueTree`](crate::ValueTree).
///
/// The root sits on level 0, leaves on the deepest level and middles on every level in between.
/// A tree with a single level only has a [`Root`](Self::Root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeRole {
    Root,
    Middle,
    Leaf,
}

impl NodeRole {
    /// Format the label for a node of this role.
    ///
    /// # Example
    ///
    /// ```
    /// # use tree_walk_labels::NodeRole;
    /// assert_eq!(NodeRole::Middle.format(3), "Middle(3) ");
    /// ```
    #[must_use]
    pub fn format(self, node_id: i64) -> String {
        match self {
            Self::Root => format_root_label(node_id),
            Self::Middle => format_middle_label(node_id),
            Self::Leaf => format_leaf_label(node_id),
        }
    }
}

/// Format the label of a root node: `Root(<id>) `.
///
/// The trailing space allows labels to be concatenated into a single traversal line without a separator.
#[must_use]
pub fn format_root_label(node_id: i64) -> String {
    format!("Root({node_id}) ")
}

/// Format the label of a middle node: `Middle(<id>) `.
///
/// The trailing space allows labels to be concatenated into a single traversal line without a separator.
#[must_use]
pub fn format_middle_label(node_id: i64) -> String {
    format!("Middle({node_id}) ")
}

/// Format the label of a leaf node: `Leaf(<id>) `.
///
/// The trailing space allows labels to be concatenated into a single traversal line without a separator.
///
/// Every call returns a newly allocated [`String`] owned by the caller.
/// No state is shared between calls so results never invalidate each other.
///
/// # Example
///
/// ```
/// assert_eq!(tree_walk_labels::format_leaf_label(42), "Leaf(42) ");
/// ```
#[must_use]
pub fn format_leaf_label(node_id: i64) -> String {
    format!("Leaf({node_id}) ")
}

#[test]
fn leaf_label_zero() {
    assert_eq!(format_leaf_label(0), "Leaf(0) ");
}

#[test]
fn leaf_label_positive() {
    assert_eq!(format_leaf_label(42), "Leaf(42) ");
}

#[test]
fn leaf_label_negative() {
    assert_eq!(format_leaf_label(-7), "Leaf(-7) ");
}

#[test]
fn leaf_label_extremes() {
    assert_eq!(
        format_leaf_label(i64::MAX),
        "Leaf(9223372036854775807) "
    );
    assert_eq!(
        format_leaf_label(i64::MIN),
        "Leaf(-9223372036854775808) "
    );
}

#[test]
fn role_dispatches_prefix() {
    assert_eq!(NodeRole::Root.format(1), "Root(1) ");
    assert_eq!(NodeRole::Middle.format(2), "Middle(2) ");
    assert_eq!(NodeRole::Leaf.format(4), "Leaf(4) ");
}

#[test]
fn repeated_calls_return_independent_values() {
    let first = format_leaf_label(5);
    let mut second = format_leaf_label(5);
    assert_eq!(first, second);
    second.push('x');
    assert_eq!(first, "Leaf(5) ");
}

#[test]
fn concurrent_calls_do_not_cross_contaminate() {
    let handles = (0..16)
        .map(|node_id| {
            std::thread::spawn(move || {
                (0..1000)
                    .all(|_| format_leaf_label(node_id) == format!("Leaf({node_id}) "))
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
