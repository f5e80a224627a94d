use crate::label::NodeRole;
use crate::tree::ValueTree;

/// Position and neighborhood of one node, ready for a frontend to draw.
///
/// `x` and `y` are percentages of the drawing area.
/// `left` and `right` are the child *values*, not indices, matching what the
/// original visualizer kept per node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutNode {
    pub id: i64,
    pub role: NodeRole,
    pub left: Option<i64>,
    pub right: Option<i64>,
    pub x: f64,
    pub y: f64,
}

/// Compute drawing positions for every node of the tree.
///
/// Nodes of a level are spread evenly over the full width.
/// Levels are spread over 5% to 95% of the height, a lone level sits at 50%.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout(tree: &ValueTree) -> Vec<LayoutNode> {
    let height = tree.height();
    (0..tree.len())
        .filter_map(|index| {
            let level = ValueTree::level(index);
            let pos_in_level = index + 1 - (1 << level);
            let nodes_in_level = 1_usize << level;
            let x = (pos_in_level as f64 + 0.5) / (nodes_in_level as f64) * 100.0;
            let y = if height > 1 {
                (level as f64) / ((height - 1) as f64) * 90.0 + 5.0
            } else {
                50.0
            };
            Some(LayoutNode {
                id: tree.value(index)?,
                role: tree.role(index)?,
                left: tree.left(index).and_then(|child| tree.value(child)),
                right: tree.right(index).and_then(|child| tree.value(child)),
                x,
                y,
            })
        })
        .collect()
}

#[test]
fn empty_tree_has_no_layout() {
    assert!(layout(&ValueTree::from_values(&[])).is_empty());
}

#[test]
fn lone_root_is_centered() {
    let nodes = layout(&ValueTree::from_values(&[1]));
    assert_eq!(nodes.len(), 1);
    let root = &nodes[0];
    assert_eq!(root.id, 1);
    assert_eq!(root.role, NodeRole::Root);
    assert_eq!(root.left, None);
    assert_eq!(root.right, None);
    assert!((root.x - 50.0).abs() < f64::EPSILON);
    assert!((root.y - 50.0).abs() < f64::EPSILON);
}

#[test]
fn levels_spread_vertically() {
    let nodes = layout(&ValueTree::example());
    assert!((nodes[0].y - 5.0).abs() < f64::EPSILON);
    assert!((nodes[1].y - 50.0).abs() < f64::EPSILON);
    assert!((nodes[3].y - 95.0).abs() < f64::EPSILON);
}

#[test]
fn level_spread_horizontally() {
    let nodes = layout(&ValueTree::example());
    assert!((nodes[0].x - 50.0).abs() < f64::EPSILON);
    assert!((nodes[1].x - 25.0).abs() < f64::EPSILON);
    assert!((nodes[2].x - 75.0).abs() < f64::EPSILON);
    assert!((nodes[3].x - 12.5).abs() < f64::EPSILON);
    assert!((nodes[6].x - 87.5).abs() < f64::EPSILON);
}

#[test]
fn children_are_values() {
    let nodes = layout(&ValueTree::from_values(&[10, 20, 30, 40]));
    assert_eq!(nodes[0].left, Some(20));
    assert_eq!(nodes[0].right, Some(30));
    assert_eq!(nodes[1].left, Some(40));
    assert_eq!(nodes[1].right, None);
}

#[cfg(all(test, feature = "serde"))]
#[test]
fn layout_node_serializes_for_frontend() {
    let nodes = layout(&ValueTree::from_values(&[1, 2, 3]));
    let json = serde_json::to_value(&nodes[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "role": "root",
            "left": 2,
            "right": 3,
            "x": 50.0,
            "y": 5.0,
        })
    );
}
