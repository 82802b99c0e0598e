use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::{SceneArena, SceneNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn node_label(node: &SceneNode) -> String {
    match &node.data.kind {
        Some(kind) => format!("{} [{}]", node.data.display_name(), kind),
        None => node.data.display_name().to_string(),
    }
}

impl TreeNodeConvert for SceneArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root().and_then(|idx| self.get_node(idx).map(|n| (idx, n))) {
            Some((root_idx, root_node)) => {
                let mut tree = Tree::new(node_label(root_node));

                fn build_tree(arena: &SceneArena, node_idx: Index, parent_tree: &mut Tree<String>) {
                    if let Some(node) = arena.get_node(node_idx) {
                        for &child_idx in &node.children {
                            if let Some(child) = arena.get_node(child_idx) {
                                let mut child_tree = Tree::new(node_label(child));
                                build_tree(arena, child_idx, &mut child_tree);
                                parent_tree.push(child_tree);
                            }
                        }
                    }
                }

                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty scene".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::NodeData;

    #[test]
    fn given_tree_with_kinds_when_converting_then_labels_carry_kind() {
        let mut arena = SceneArena::new();
        let root = arena.insert_node(
            NodeData {
                name: Some("engine".into()),
                kind: Some("assembly".into()),
            },
            None,
        );
        arena.insert_node(NodeData::named("rotor"), Some(root));
        arena.insert_node(NodeData::anonymous(), Some(root));

        let rendered = arena.to_tree_string().to_string();
        assert!(rendered.contains("engine [assembly]"));
        assert!(rendered.contains("rotor"));
        assert!(rendered.contains("N/A"));
    }
}
