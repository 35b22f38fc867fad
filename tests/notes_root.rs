//! Startup against a real notes directory: enumeration, labels, first frame.

use notedrill::{handle_event, initialize, Action, Config, Event, LabelStyle};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn config_for(root: &Path, extra: &[(&str, &str)]) -> Config {
    let mut vars = BTreeMap::new();
    vars.insert("Notes".to_string(), root.to_string_lossy().into_owned());
    for (k, v) in extra {
        vars.insert((*k).to_string(), (*v).to_string());
    }
    Config::from_map(&vars).expect("valid config")
}

fn notes_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("school/term1")).unwrap();
    fs::write(dir.path().join("Inbox.md"), "").unwrap();
    fs::write(dir.path().join("school/Maths.md"), "").unwrap();
    fs::write(dir.path().join("school/term1/Physics.md"), "").unwrap();
    fs::write(dir.path().join("school/readme.txt"), "").unwrap();
    dir
}

#[test]
fn nested_notes_are_listed_by_base_name() {
    let dir = notes_tree();
    let state = initialize(&config_for(dir.path(), &[])).unwrap();

    let mut labels: Vec<String> = state.notes.iter().map(|n| state.label(n)).collect();
    labels.sort();
    assert_eq!(labels, vec!["Inbox", "Maths", "Physics"]);
}

#[test]
fn path_labels_are_relative_and_searchable() {
    let dir = notes_tree();
    let mut state = initialize(&config_for(dir.path(), &[("NOTEDRILL_LABELS", "path")])).unwrap();
    assert_eq!(state.label_style, LabelStyle::Path);

    handle_event(&mut state, &Event::EnterSearch).unwrap();
    for c in "term".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::Confirm).unwrap();

    assert_eq!(state.display.len(), 1);
    let label = state.label(&state.display[0]);
    assert!(label.starts_with("school"));
    assert!(label.ends_with("Physics.md"));
}

#[test]
fn opening_passes_full_paths() {
    let dir = notes_tree();
    let mut state = initialize(&config_for(dir.path(), &[])).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::ToggleSelectAll).unwrap();
    assert!(actions.is_empty());
    let (_, actions) = handle_event(&mut state, &Event::Confirm).unwrap();

    let [Action::OpenEditor { paths }] = actions.as_slice() else {
        panic!("expected one editor launch, got {actions:?}");
    };
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.is_absolute() && p.starts_with(dir.path()) && p.exists()));
}

#[test]
fn first_frame_lists_notes() {
    let dir = notes_tree();
    let state = initialize(&config_for(dir.path(), &[("NOTEDRILL_THEME", "catppuccin-mocha")])).unwrap();

    let frame = notedrill::ui::render(&state, 24, 100);
    assert!(frame.contains("3 notes"));
    assert!(frame.contains("Maths"));
    assert!(frame.contains("q: quit"));
}
