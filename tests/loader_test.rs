//! Loader resolution and end-to-end outline rendering

use std::io::Write;
use std::path::Path;

use asmtree::errors::SceneError;
use asmtree::loader::{load_scene, ModelLoader, SnapshotLoader};
use asmtree::util::testing;
use asmtree::{outline_of, OutlineWriter};

#[test]
fn given_fixture_when_loading_then_scene_delegates_queries() {
    testing::init_test_setup();
    let scene = load_scene(Path::new("tests/resources/models/gearbox.outline")).unwrap();

    assert_eq!(scene.node_count(), 7);
    assert_eq!(scene.depth(), 3);
    assert!(scene.source().ends_with("gearbox.outline"));

    let text = OutlineWriter::new().to_string(&scene).expect("write outline");
    assert_eq!(
        text,
        "gearbox\n  input shaft\n  output shaft\n  gear set\n    pinion\n    crown wheel\n  N/A\n"
    );
}

#[test]
fn given_unnamed_fixture_when_rendering_then_single_placeholder_line() {
    let text = outline_of(Path::new("tests/resources/models/unnamed.outline")).unwrap();
    assert_eq!(text, "N/A\n");
}

#[test]
fn given_tempfile_snapshot_when_loading_then_round_trips() {
    let mut file = tempfile::Builder::new()
        .suffix(".outline")
        .tempfile()
        .expect("create tempfile");
    write!(file, "rig\n  camera\n  light\n").expect("write snapshot");

    let text = outline_of(file.path()).unwrap();
    assert_eq!(text, "rig\n  camera\n  light\n");
}

#[test]
fn given_unknown_extension_when_loading_then_unknown_format_error() {
    let result = load_scene(Path::new("tests/resources/models/model.step"));
    assert!(matches!(result, Err(SceneError::UnknownFormat(_))));
}

#[test]
fn given_missing_snapshot_when_loading_then_file_not_found() {
    let result = load_scene(Path::new("tests/resources/models/missing.outline"));
    assert!(matches!(result, Err(SceneError::FileNotFound(_))));
}

#[test]
fn given_snapshot_loader_when_probing_then_only_outline_files_are_supported() {
    let loader = SnapshotLoader;
    assert!(loader.supports(Path::new("a/b/model.outline")));
    assert!(!loader.supports(Path::new("a/b/model.prc")));
    assert!(!loader.supports(Path::new("a/b/outline")));
}
