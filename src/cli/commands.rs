use std::io::{self, Write};
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::errors::SceneError;
use crate::loader::load_scene;
use crate::tree_traits::TreeNodeConvert;
use crate::util::path::{ensure_dir_exists, PathExt};
use crate::walk::OutlineWriter;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Print { file, max_depth }) => _print(file, *max_depth),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Stats { file }) => _stats(file),
        Some(Commands::Scan { dir }) => _scan(dir.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Path => _config_path(),
        },
        None => Ok(()),
    }
}

/// Writer configured from settings, with CLI flags taking precedence.
fn outline_writer(max_depth: Option<usize>) -> CliResult<OutlineWriter> {
    let settings = Settings::load()?;
    let mut writer = settings.outline_writer();
    if max_depth.is_some() {
        writer = writer.with_max_depth(max_depth);
    }
    Ok(writer)
}

#[instrument]
fn _print(file: &Path, max_depth: Option<usize>) -> CliResult<()> {
    debug!("file: {:?}", file);
    let scene = load_scene(file)?;
    let writer = outline_writer(max_depth)?;

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    writer.write(&scene, &mut lock)?;
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let scene = load_scene(file)?;
    output::info(&scene.arena().to_tree_string());
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let scene = load_scene(file)?;
    for name in scene.arena().leaf_names() {
        output::info(&name);
    }
    Ok(())
}

#[instrument]
fn _stats(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let scene = load_scene(file)?;
    let arena = scene.arena();

    let unnamed = arena.iter().filter(|(_, n)| n.data.name.is_none()).count();

    output::header(&scene.source().display());
    output::detail(&format!("nodes:   {}", arena.node_count()));
    output::detail(&format!("depth:   {}", arena.depth()));
    output::detail(&format!("leaves:  {}", arena.leaf_names().len()));
    output::detail(&format!("unnamed: {}", unnamed));

    let kinds = arena
        .iter()
        .filter_map(|(_, n)| n.data.kind.clone())
        .counts();
    for (kind, count) in kinds.into_iter().sorted() {
        output::detail(&format!("{}: {}", kind, count));
    }
    Ok(())
}

#[instrument]
fn _scan(dir: Option<&Path>) -> CliResult<()> {
    let dir = dir.unwrap_or_else(|| Path::new("."));
    debug!("dir: {:?}", dir);
    ensure_dir_exists(dir)?;
    let writer = outline_writer(None)?;

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let mut found = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| SceneError::PathResolution {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() || !entry.path().is_snapshot_file() {
            continue;
        }
        found += 1;
        output::header(&entry.path().display());
        match load_scene(entry.path()) {
            Ok(scene) => writer.write(&scene, &mut lock)?,
            // A broken snapshot should not abort the whole scan
            Err(e) => output::warning(&e),
        }
        lock.flush()?;
    }

    if found == 0 {
        output::warning(&format!(
            "no snapshot files under {}",
            dir.display()
        ));
    }
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("no config directory available"),
    }
    Ok(())
}
