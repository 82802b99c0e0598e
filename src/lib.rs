use std::path::Path;

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod loader;
pub mod tree_traits;
pub mod util;
pub mod walk;

pub use errors::{SceneError, SceneResult};
pub use loader::{load_scene, ModelLoader, Scene, SnapshotLoader};
pub use walk::{NodeQuery, OutlineWriter};

/// Load a model and print its outline to stdout with default settings.
pub fn print_outline(path: &Path) -> SceneResult<()> {
    let scene = load_scene(path)?;
    walk::print(&scene)?;
    Ok(())
}

/// Load a model and render its outline into a string.
pub fn outline_of(path: &Path) -> SceneResult<String> {
    let scene = load_scene(path)?;
    Ok(OutlineWriter::new().to_string(&scene)?)
}
