//! Pre-order traversal and outline printing over an abstract node interface.
//!
//! The printer is decoupled from any concrete backend: it only needs a
//! [`NodeQuery`] handle that can resolve a node's display name and its
//! ordered children. Backends binding an external CAD kernel implement the
//! same trait on their session handle.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::errors::SceneResult;

/// Fallback text for nodes whose name is absent or unreadable.
pub const NAME_PLACEHOLDER: &str = "N/A";

/// Spaces emitted per level of depth.
pub const INDENT_WIDTH: usize = 2;

/// Query capabilities a tree handle must provide for traversal.
///
/// Node references are opaque ids resolved against the handle, so the handle
/// travels alongside every node reference. The handle is never mutated.
pub trait NodeQuery {
    type NodeId: Copy;

    /// Root node reference, `None` for an empty tree.
    fn root_node(&self) -> Option<Self::NodeId>;

    /// Display name of a node. `Ok(None)` means the node carries no name.
    fn node_name(&self, node: Self::NodeId) -> SceneResult<Option<String>>;

    /// Ordered children of a node.
    fn node_children(&self, node: Self::NodeId) -> SceneResult<Vec<Self::NodeId>>;
}

/// Writes a tree as an indented outline, one line per node.
#[derive(Debug, Clone)]
pub struct OutlineWriter {
    indent_width: usize,
    placeholder: String,
    max_depth: Option<usize>,
}

impl Default for OutlineWriter {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
            placeholder: NAME_PLACEHOLDER.to_string(),
            max_depth: None,
        }
    }
}

impl OutlineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Stop recursing below the given depth. Depth 0 is the root.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Write the whole tree starting at the root. Empty trees write nothing.
    #[instrument(level = "debug", skip(self, scene, out))]
    pub fn write<Q, W>(&self, scene: &Q, out: &mut W) -> io::Result<()>
    where
        Q: NodeQuery,
        W: Write,
    {
        if let Some(root) = scene.root_node() {
            self.write_node(scene, root, 0, out)?;
        }
        Ok(())
    }

    /// Emit one line for `node` at `depth`, then its children depth-first.
    ///
    /// A failed or absent name lookup falls back to the placeholder; a failed
    /// children lookup makes the node a leaf. Neither aborts the traversal.
    pub fn write_node<Q, W>(
        &self,
        scene: &Q,
        node: Q::NodeId,
        depth: usize,
        out: &mut W,
    ) -> io::Result<()>
    where
        Q: NodeQuery,
        W: Write,
    {
        if let Some(max) = self.max_depth {
            if depth > max {
                return Ok(());
            }
        }

        let name = match scene.node_name(node) {
            Ok(Some(name)) if !name.is_empty() => name,
            Ok(_) => self.placeholder.clone(),
            Err(e) => {
                debug!("name lookup failed, using placeholder: {}", e);
                self.placeholder.clone()
            }
        };
        writeln!(
            out,
            "{:indent$}{}",
            "",
            name,
            indent = self.indent_width * depth
        )?;

        let children = match scene.node_children(node) {
            Ok(children) => children,
            Err(e) => {
                debug!("children lookup failed, treating node as leaf: {}", e);
                Vec::new()
            }
        };
        for child in children {
            self.write_node(scene, child, depth + 1, out)?;
        }
        Ok(())
    }

    /// Render the tree into a string.
    pub fn to_string<Q: NodeQuery>(&self, scene: &Q) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write(scene, &mut buf)?;
        // The writer only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Print the tree to stdout with default settings.
pub fn print<Q: NodeQuery>(scene: &Q) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    OutlineWriter::new().write(scene, &mut lock)
}
