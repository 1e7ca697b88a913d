//! End-to-end editing sessions: load a file, feed commands, check what is written.

use spheres::prelude::*;
use std::fs;
use std::path::Path;

fn run_script(editor: &mut Editor, script: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    editor.run(script.as_bytes(), &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn neighbours(sphere: &Sphere) -> Vec<(String, Angle)> {
    sphere
        .neighbours
        .iter()
        .map(|n| (n.id.to_string(), n.angle))
        .collect()
}

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("spheres.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_scenario_from_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "");
    let output = dir.path().join("out.toml");

    let mut editor = Editor::new(SphereGraph::load(&input).unwrap());
    let script = format!("add 3-1\nadd 1-2\nwrite {}\n", output.display());
    let (out, err) = run_script(&mut editor, &script);

    assert!(err.is_empty(), "unexpected errors: {}", err);
    assert!(out.contains(&format!("Wrote data to file '{}'", output.display())));

    let written = SphereGraph::load(&output).unwrap();
    let spheres: Vec<&Sphere> = written.spheres().collect();
    let ids: Vec<&str> = spheres.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let unassigned = Angle::unassigned();
    assert_eq!(
        neighbours(spheres[0]),
        vec![("3".to_string(), unassigned), ("2".to_string(), unassigned)]
    );
    assert_eq!(neighbours(spheres[1]), vec![("1".to_string(), unassigned)]);
    assert_eq!(neighbours(spheres[2]), vec![("1".to_string(), unassigned)]);
    assert!(spheres.iter().all(|s| s.space == -1));
}

#[test]
fn test_round_trip_without_edits() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        r#"
version = 3
author = "survey team"

[[spheres]]
id = "12"
space = 2

[[spheres.neighbours]]
id = "4"
angle = 270

[[spheres]]
id = "4"
space = 2
floor = "basement"

[[spheres.neighbours]]
id = "12"
angle = 90.5
"#,
    );
    let output = dir.path().join("copy.toml");

    let original = SphereGraph::load(&input).unwrap();
    let mut editor = Editor::new(original.clone());
    let (_, err) = run_script(&mut editor, &format!("write {}\nexit\n", output.display()));
    assert!(err.is_empty(), "unexpected errors: {}", err);

    let copy = SphereGraph::load(&output).unwrap();
    let ids: Vec<&str> = copy.sphere_ids().map(SphereId::as_str).collect();
    assert_eq!(ids, vec!["4", "12"]);

    for sphere in original.spheres() {
        assert_eq!(copy.sphere(&sphere.id), Some(sphere));
    }
    assert_eq!(copy.extra, original.extra);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("author = \"survey team\""));
    assert!(text.contains("floor = \"basement\""));

    // Top-level keys keep their file order
    let version = text.find("version = 3").unwrap();
    let author = text.find("author = ").unwrap();
    assert!(version < author, "keys reordered:\n{}", text);
}

#[test]
fn test_show_and_add_do_not_touch_files() {
    let dir = tempfile::tempdir().unwrap();
    let content = "[[spheres]]\nid = \"1\"\nspace = 0\nneighbours = []\n";
    let input = write_input(dir.path(), content);

    let mut editor = Editor::new(SphereGraph::load(&input).unwrap());
    let (out, _) = run_script(&mut editor, "add 1-2\nshow\n\nadd 3-4\n");

    assert!(out.contains("{id: \"2\", space: -1, neighbours: [{id: \"1\", angle: -1}]}"));
    // The blank line ended the session before the last add
    assert_eq!(editor.graph().sphere_count(), 2);
    assert_eq!(fs::read_to_string(&input).unwrap(), content);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_malformed_commands_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "");

    let mut editor = Editor::new(SphereGraph::load(&input).unwrap());
    let (_, err) = run_script(&mut editor, "add 12\nwrite\nadd 1-2\n");

    assert!(err.contains("Malformed 'add' command"));
    assert!(err.contains("Malformed 'write' command"));
    assert_eq!(editor.graph().sphere_count(), 2);
}

#[test]
fn test_write_with_non_numeric_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "[[spheres]]\nid = \"lobby\"\nspace = 1\n");
    let output = dir.path().join("out.toml");

    let mut editor = Editor::new(SphereGraph::load(&input).unwrap());
    let (out, err) = run_script(&mut editor, &format!("write {}\n", output.display()));

    assert!(err.contains("Sphere id 'lobby' is not a number"));
    assert!(!out.contains("Wrote data"));
    assert!(!output.exists());
}

#[test]
fn test_write_ids_wider_than_u64() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "");
    let output = dir.path().join("out.toml");

    let mut editor = Editor::new(SphereGraph::load(&input).unwrap());
    let script = format!(
        "add 100000000000000000000-1\nwrite {}\n",
        output.display()
    );
    let (out, err) = run_script(&mut editor, &script);

    assert!(err.is_empty(), "unexpected errors: {}", err);
    assert!(out.contains("Wrote data"));

    let written = SphereGraph::load(&output).unwrap();
    let ids: Vec<&str> = written.sphere_ids().map(SphereId::as_str).collect();
    assert_eq!(ids, vec!["1", "100000000000000000000"]);
}
