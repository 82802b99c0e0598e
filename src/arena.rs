use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{SceneError, SceneResult};
use crate::walk::{NodeQuery, NAME_PLACEHOLDER};

/// Data payload for one element of an assembly tree.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    /// Display name, None for anonymous occurrences
    pub name: Option<String>,
    /// Entity kind annotation (e.g. "assembly", "part"), if the backend supplies one
    pub kind: Option<String>,
}

impl NodeData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Name as shown to the user, placeholder-substituted.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => NAME_PLACEHOLDER,
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct SceneNode {
    /// Payload for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree structure holding one materialized assembly hierarchy.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Backends fill the arena once; traversal never mutates it.
#[derive(Debug)]
pub struct SceneArena {
    /// Arena storage for all tree nodes
    arena: Arena<SceneNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for SceneArena {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = SceneNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&SceneNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator {
        PreOrderIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    /// Number of levels in the tree, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects display names of all leaf nodes (nodes with no children),
    /// in pre-order. Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<String>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.data.display_name().to_string());
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}

impl NodeQuery for SceneArena {
    type NodeId = Index;

    fn root_node(&self) -> Option<Index> {
        self.root
    }

    fn node_name(&self, node: Index) -> SceneResult<Option<String>> {
        let node = self
            .get_node(node)
            .ok_or_else(|| SceneError::InternalError(format!("dangling node index: {:?}", node)))?;
        Ok(node.data.name.clone())
    }

    fn node_children(&self, node: Index) -> SceneResult<Vec<Index>> {
        let node = self
            .get_node(node)
            .ok_or_else(|| SceneError::InternalError(format!("dangling node index: {:?}", node)))?;
        Ok(node.children.clone())
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a SceneArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a SceneArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a SceneArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a SceneArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
