//! Outline printer invariants over in-memory trees

use asmtree::arena::{NodeData, SceneArena};
use asmtree::errors::{SceneError, SceneResult};
use asmtree::walk::{NodeQuery, OutlineWriter};
use rstest::{fixture, rstest};

fn outline(arena: &SceneArena) -> String {
    OutlineWriter::new().to_string(arena).expect("write outline")
}

/// root "A" with children ["B", "C"]; "B" has one child "D"
#[fixture]
fn scenario_arena() -> SceneArena {
    let mut arena = SceneArena::new();
    let a = arena.insert_node(NodeData::named("A"), None);
    let b = arena.insert_node(NodeData::named("B"), Some(a));
    arena.insert_node(NodeData::named("C"), Some(a));
    arena.insert_node(NodeData::named("D"), Some(b));
    arena
}

// ============================================================
// Output Shape Tests
// ============================================================

#[rstest]
fn given_scenario_tree_when_printing_then_output_matches_exactly(scenario_arena: SceneArena) {
    assert_eq!(outline(&scenario_arena), "A\n  B\n    D\n  C\n");
}

#[test]
fn given_single_unnamed_node_when_printing_then_placeholder_at_zero_indent() {
    let mut arena = SceneArena::new();
    arena.insert_node(NodeData::anonymous(), None);
    assert_eq!(outline(&arena), "N/A\n");
}

#[test]
fn given_empty_name_when_printing_then_placeholder_is_used() {
    let mut arena = SceneArena::new();
    let root = arena.insert_node(NodeData::named("root"), None);
    arena.insert_node(NodeData::named(""), Some(root));
    assert_eq!(outline(&arena), "root\n  N/A\n");
}

#[test]
fn given_empty_tree_when_printing_then_no_output() {
    let arena = SceneArena::new();
    assert_eq!(outline(&arena), "");
}

#[rstest]
fn given_any_tree_when_printing_then_one_line_per_node(scenario_arena: SceneArena) {
    let text = outline(&scenario_arena);
    assert_eq!(text.lines().count(), scenario_arena.node_count());
}

#[test]
fn given_deep_tree_when_printing_then_indent_is_twice_depth() {
    // Chain of depth 0..=5, expected indent 2*d on each line
    let mut arena = SceneArena::new();
    let mut parent = None;
    for d in 0..6 {
        parent = Some(arena.insert_node(NodeData::named(format!("n{}", d)), parent));
    }

    for (d, line) in outline(&arena).lines().enumerate() {
        let leading = line.len() - line.trim_start_matches(' ').len();
        assert_eq!(leading, 2 * d, "line {:?} at depth {}", line, d);
        assert_eq!(line.trim_start(), format!("n{}", d));
    }
}

#[test]
fn given_reordered_children_when_printing_then_only_their_lines_swap() {
    let mut left = SceneArena::new();
    let root = left.insert_node(NodeData::named("root"), None);
    left.insert_node(NodeData::named("first"), Some(root));
    left.insert_node(NodeData::named("second"), Some(root));

    let mut right = SceneArena::new();
    let root = right.insert_node(NodeData::named("root"), None);
    right.insert_node(NodeData::named("second"), Some(root));
    right.insert_node(NodeData::named("first"), Some(root));

    assert_eq!(outline(&left), "root\n  first\n  second\n");
    assert_eq!(outline(&right), "root\n  second\n  first\n");
}

#[test]
fn given_name_with_special_characters_when_printing_then_emitted_verbatim() {
    let mut arena = SceneArena::new();
    arena.insert_node(NodeData::named("_micro engine / rev [2]"), None);
    assert_eq!(outline(&arena), "_micro engine / rev [2]\n");
}

// ============================================================
// Writer Options Tests
// ============================================================

#[rstest]
fn given_max_depth_when_printing_then_deeper_nodes_are_pruned(scenario_arena: SceneArena) {
    let text = OutlineWriter::new()
        .with_max_depth(Some(1))
        .to_string(&scenario_arena)
        .expect("write outline");
    assert_eq!(text, "A\n  B\n  C\n");
}

#[test]
fn given_custom_indent_and_placeholder_when_printing_then_both_apply() {
    let mut arena = SceneArena::new();
    let root = arena.insert_node(NodeData::named("root"), None);
    arena.insert_node(NodeData::anonymous(), Some(root));

    let text = OutlineWriter::new()
        .with_indent_width(4)
        .with_placeholder("<unnamed>")
        .to_string(&arena)
        .expect("write outline");
    assert_eq!(text, "root\n    <unnamed>\n");
}

// ============================================================
// Query Failure Tests
// ============================================================

/// Fixed-shape backend with injectable query failures.
struct FlakyTree {
    names: Vec<Option<String>>,
    children: Vec<Vec<usize>>,
    fail_name_for: Vec<usize>,
    fail_children_for: Vec<usize>,
}

impl FlakyTree {
    /// root(0) -> a(1), b(2); a -> c(3)
    fn sample() -> Self {
        Self {
            names: vec![
                Some("root".into()),
                Some("a".into()),
                Some("b".into()),
                Some("c".into()),
            ],
            children: vec![vec![1, 2], vec![3], vec![], vec![]],
            fail_name_for: Vec::new(),
            fail_children_for: Vec::new(),
        }
    }
}

impl NodeQuery for FlakyTree {
    type NodeId = usize;

    fn root_node(&self) -> Option<usize> {
        Some(0)
    }

    fn node_name(&self, node: usize) -> SceneResult<Option<String>> {
        if self.fail_name_for.contains(&node) {
            return Err(SceneError::InternalError("name query failed".into()));
        }
        Ok(self.names[node].clone())
    }

    fn node_children(&self, node: usize) -> SceneResult<Vec<usize>> {
        if self.fail_children_for.contains(&node) {
            return Err(SceneError::InternalError("children query failed".into()));
        }
        Ok(self.children[node].clone())
    }
}

#[test]
fn given_failing_name_lookup_when_printing_then_placeholder_and_traversal_continues() {
    let mut tree = FlakyTree::sample();
    tree.fail_name_for = vec![1];

    let text = OutlineWriter::new().to_string(&tree).expect("write outline");
    assert_eq!(text, "root\n  N/A\n    c\n  b\n");
}

#[test]
fn given_failing_children_lookup_when_printing_then_node_becomes_leaf() {
    let mut tree = FlakyTree::sample();
    tree.fail_children_for = vec![1];

    // node 1 keeps its line but loses its subtree; sibling is unaffected
    let text = OutlineWriter::new().to_string(&tree).expect("write outline");
    assert_eq!(text, "root\n  a\n  b\n");
}

#[test]
fn given_failing_root_children_lookup_when_printing_then_single_line_remains() {
    let mut tree = FlakyTree::sample();
    tree.fail_children_for = vec![0];

    let text = OutlineWriter::new().to_string(&tree).expect("write outline");
    assert_eq!(text, "root\n");
}
