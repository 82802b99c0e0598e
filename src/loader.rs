//! Model loading seam.
//!
//! A [`ModelLoader`] owns the acquire side of the load -> traverse -> release
//! lifecycle: it produces a [`Scene`] whose arena stays valid for as long as
//! the scene is held, and dropping the scene releases everything. Backends
//! that bind an external CAD kernel implement the same trait; the shipped
//! [`SnapshotLoader`] reads pre-exported `.outline` snapshot files.

use std::path::{Path, PathBuf};

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::SceneArena;
use crate::builder::SnapshotParser;
use crate::errors::{SceneError, SceneResult};
use crate::util::path::PathExt;
use crate::walk::NodeQuery;

/// A loaded model: the materialized tree plus where it came from.
#[derive(Debug)]
pub struct Scene {
    arena: SceneArena,
    source: PathBuf,
}

impl Scene {
    pub fn new(arena: SceneArena, source: impl Into<PathBuf>) -> Self {
        Self {
            arena,
            source: source.into(),
        }
    }

    pub fn arena(&self) -> &SceneArena {
        &self.arena
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    pub fn depth(&self) -> usize {
        self.arena.depth()
    }
}

impl NodeQuery for Scene {
    type NodeId = Index;

    fn root_node(&self) -> Option<Index> {
        self.arena.root_node()
    }

    fn node_name(&self, node: Index) -> SceneResult<Option<String>> {
        self.arena.node_name(node)
    }

    fn node_children(&self, node: Index) -> SceneResult<Vec<Index>> {
        self.arena.node_children(node)
    }
}

/// Backend capable of materializing a [`Scene`] from a file.
pub trait ModelLoader {
    /// Whether this loader recognizes the file (by extension).
    fn supports(&self, path: &Path) -> bool;

    fn load(&self, path: &Path) -> SceneResult<Scene>;
}

/// Loader for `.outline` snapshot files.
#[derive(Debug, Default)]
pub struct SnapshotLoader;

impl ModelLoader for SnapshotLoader {
    fn supports(&self, path: &Path) -> bool {
        path.is_snapshot_file()
    }

    #[instrument(level = "debug", skip(self))]
    fn load(&self, path: &Path) -> SceneResult<Scene> {
        let arena = SnapshotParser::new().parse_file(path)?;
        debug!(
            "loaded {} nodes from {}",
            arena.node_count(),
            path.display()
        );
        let source = path.to_canonical()?;
        Ok(Scene::new(arena, source))
    }
}

/// Load a model with the first loader that recognizes the path.
#[instrument(level = "debug")]
pub fn load_scene(path: &Path) -> SceneResult<Scene> {
    let loaders: [&dyn ModelLoader; 1] = [&SnapshotLoader];
    for loader in loaders {
        if loader.supports(path) {
            return loader.load(path);
        }
    }
    Err(SceneError::UnknownFormat(path.to_path_buf()))
}
