//! End-to-end flows through the session with a recording editor launcher.

use notedrill::app::{Event, InputMode};
use notedrill::domain::{LabelStyle, Note, NoteKey, NotedrillError, Result};
use notedrill::infrastructure::EditorLauncher;
use notedrill::runtime::{Flow, Session};
use notedrill::{AppState, Theme};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct RecordingLauncher {
    launches: Vec<Vec<PathBuf>>,
    fail_with: Option<String>,
}

impl EditorLauncher for RecordingLauncher {
    fn launch(&mut self, paths: &[PathBuf]) -> Result<()> {
        self.launches.push(paths.to_vec());
        match &self.fail_with {
            Some(message) => Err(NotedrillError::Editor(message.clone())),
            None => Ok(()),
        }
    }
}

fn session_with(names: &[&str]) -> Session<RecordingLauncher> {
    let notes = names
        .iter()
        .enumerate()
        .map(|(i, name)| Note::new(NoteKey::new(i as u64), PathBuf::from(format!("/notes/{name}.md")), None))
        .collect();
    let state = AppState::new(PathBuf::from("/notes"), LabelStyle::BaseName, notes, Theme::default());
    Session::new(state, RecordingLauncher::default())
}

fn press(session: &mut Session<RecordingLauncher>, events: &[Event]) {
    for event in events {
        session.step(event).expect("step");
    }
}

fn type_text(session: &mut Session<RecordingLauncher>, text: &str) {
    for c in text.chars() {
        session.step(&Event::Char(c)).expect("step");
    }
}

fn labels(session: &Session<RecordingLauncher>, notes: &[Note]) -> Vec<String> {
    notes.iter().map(|n| session.state.label(n)).collect()
}

fn note_path(name: &str) -> PathBuf {
    PathBuf::from(format!("/notes/{name}.md"))
}

#[test]
fn open_selected_note_after_moving_down() {
    let mut session = session_with(&["a", "b", "c"]);

    press(&mut session, &[Event::KeyDown, Event::KeyDown]);
    assert_eq!(session.state.cursor, 2);
    press(&mut session, &[Event::ToggleSelect, Event::Confirm]);

    assert_eq!(session.launcher.launches, vec![vec![note_path("c")]]);
    assert!(session.state.selection.is_empty());
}

#[test]
fn confirm_without_selection_opens_cursor_note() {
    let mut session = session_with(&["a", "b"]);
    press(&mut session, &[Event::KeyDown, Event::Confirm]);
    assert_eq!(session.launcher.launches, vec![vec![note_path("b")]]);
}

#[test]
fn multi_open_uses_note_order_not_selection_order() {
    let mut session = session_with(&["a", "b", "c", "d"]);
    press(
        &mut session,
        &[
            Event::KeyDown,
            Event::KeyDown,
            Event::KeyDown,
            Event::ToggleSelect,
            Event::KeyUp,
            Event::KeyUp,
            Event::ToggleSelect,
            Event::Confirm,
        ],
    );
    assert_eq!(session.launcher.launches, vec![vec![note_path("b"), note_path("d")]]);
}

#[test]
fn creating_a_note_launches_editor_once() {
    let mut session = session_with(&["a"]);

    press(&mut session, &[Event::EnterInsert]);
    type_text(&mut session, "Foo");
    press(&mut session, &[Event::Confirm]);

    assert_eq!(session.launcher.launches, vec![vec![note_path("Foo")]]);
    assert_eq!(session.state.input_mode, InputMode::Browsing);
    assert!(session.state.input.is_empty());

    let last = session.state.notes.last().expect("note appended");
    assert_eq!(last.path, note_path("Foo"));
    assert_eq!(session.state.label(last), "Foo");
    assert_eq!(session.state.display, session.state.notes);
}

#[test]
fn created_note_name_is_trimmed() {
    let mut session = session_with(&[]);
    press(&mut session, &[Event::EnterInsert]);
    type_text(&mut session, "  Week 3 ");
    press(&mut session, &[Event::Confirm]);
    assert_eq!(session.launcher.launches, vec![vec![note_path("Week 3")]]);
}

#[test]
fn absolute_note_name_stays_under_the_root() {
    let mut session = session_with(&["a"]);
    press(&mut session, &[Event::EnterInsert]);
    type_text(&mut session, "/etc/Foo");
    press(&mut session, &[Event::Confirm]);

    assert_eq!(session.launcher.launches, vec![vec![note_path("etc/Foo")]]);
    assert!(session.state.notes.iter().all(|n| n.path.starts_with("/notes")));
}

#[test]
fn note_name_without_a_file_creates_nothing() {
    let mut session = session_with(&["a"]);
    press(&mut session, &[Event::EnterInsert]);
    type_text(&mut session, "/..");
    press(&mut session, &[Event::Confirm]);

    assert_eq!(session.state.notes.len(), 1);
    assert!(session.launcher.launches.is_empty());
    assert_eq!(session.state.input_mode, InputMode::Browsing);
}

#[test]
fn search_narrows_to_matching_notes() {
    let mut session = session_with(&["alpha", "beta", "gamma"]);
    press(&mut session, &[Event::KeyDown, Event::EnterSearch]);
    type_text(&mut session, "bta");
    press(&mut session, &[Event::Confirm]);

    assert_eq!(labels(&session, &session.state.display), vec!["beta"]);
    assert_eq!(session.state.cursor, 0);
    assert_eq!(session.state.input_mode, InputMode::Browsing);
    assert!(session.launcher.launches.is_empty());
}

#[test]
fn empty_search_shows_every_note() {
    let mut session = session_with(&["alpha", "beta", "gamma"]);
    press(&mut session, &[Event::EnterSearch, Event::Confirm]);
    assert_eq!(labels(&session, &session.state.display), vec!["alpha", "beta", "gamma"]);
    assert_eq!(session.state.last_query, None);
}

#[test]
fn cancelled_search_leaves_display_unchanged() {
    let mut session = session_with(&["alpha", "beta", "gamma"]);
    press(&mut session, &[Event::EnterSearch]);
    type_text(&mut session, "gam");
    press(&mut session, &[Event::Confirm]);
    let before = session.state.display.clone();

    press(&mut session, &[Event::EnterSearch]);
    type_text(&mut session, "alp");
    press(&mut session, &[Event::Cancel]);

    assert_eq!(session.state.display, before);
    assert!(session.state.input.is_empty());
    assert_eq!(session.state.input_mode, InputMode::Browsing);
}

#[test]
fn cancelled_naming_creates_nothing() {
    let mut session = session_with(&["a"]);
    press(&mut session, &[Event::EnterInsert]);
    type_text(&mut session, "draft");
    press(&mut session, &[Event::Cancel]);

    assert_eq!(session.state.notes.len(), 1);
    assert!(session.launcher.launches.is_empty());
    assert!(session.state.input.is_empty());
}

#[test]
fn multi_delete_removes_exactly_the_selected_notes() {
    let mut session = session_with(&["n0", "n1", "n2", "n3", "n4"]);

    // Select index 2 before index 0: naive index removal would drop n3.
    press(&mut session, &[Event::KeyDown, Event::KeyDown, Event::ToggleSelect]);
    press(&mut session, &[Event::KeyUp, Event::KeyUp, Event::ToggleSelect]);
    press(&mut session, &[Event::DeleteSelected]);

    assert_eq!(labels(&session, &session.state.notes), vec!["n1", "n3", "n4"]);
    assert_eq!(session.state.display, session.state.notes);
    assert!(session.state.selection.is_empty());
}

#[test]
fn delete_count_matches_selection_for_every_size() {
    for n in 0..8usize {
        for mask in 0..(1u32 << n) {
            let names: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut session = session_with(&refs);

            for i in (0..n).rev() {
                session.state.cursor = i;
                if mask & (1 << i) != 0 {
                    press(&mut session, &[Event::ToggleSelect]);
                }
            }
            let selected = mask.count_ones() as usize;
            press(&mut session, &[Event::DeleteSelected, Event::ResetFilter]);

            assert_eq!(session.state.notes.len(), n - selected);
            for note in &session.state.notes {
                let index = note.key.get() as usize;
                assert_eq!(mask & (1 << index), 0, "selected note {index} survived");
            }
        }
    }
}

#[test]
fn select_all_twice_returns_to_unselected() {
    let mut session = session_with(&["a", "b", "c"]);
    press(&mut session, &[Event::ToggleSelectAll]);
    assert_eq!(session.state.selection.len(), 3);
    press(&mut session, &[Event::ToggleSelectAll]);
    assert!(session.state.selection.is_empty());
}

#[test]
fn select_all_after_partial_selection_selects_everything() {
    let mut session = session_with(&["a", "b", "c"]);
    press(&mut session, &[Event::ToggleSelect, Event::ToggleSelectAll]);
    assert_eq!(session.state.selection.len(), 3);
}

#[test]
fn selection_is_cleared_by_reset() {
    let mut session = session_with(&["alpha", "beta"]);
    press(&mut session, &[Event::ToggleSelect, Event::EnterSearch]);
    type_text(&mut session, "bet");
    press(&mut session, &[Event::Confirm, Event::ResetFilter]);

    assert!(session.state.selection.is_empty());
    assert_eq!(session.state.display, session.state.notes);
}

#[test]
fn editor_failure_keeps_the_picker_running() {
    let mut session = session_with(&["a"]);
    session.launcher.fail_with = Some("nvim exited with exit status: 1".to_string());

    let flow = session.step(&Event::Confirm).expect("step");
    assert_eq!(flow, Flow::Continue { render: true });
    assert_eq!(session.state.last_error.as_deref(), Some("nvim exited with exit status: 1"));

    session.launcher.fail_with = None;
    press(&mut session, &[Event::Confirm]);
    assert_eq!(session.state.last_error, None);
    assert_eq!(session.launcher.launches.len(), 2);
}

#[test]
fn quit_ends_the_session() {
    let mut session = session_with(&["a"]);
    assert_eq!(session.step(&Event::Quit).expect("step"), Flow::Quit);
    assert!(session.launcher.launches.is_empty());
}

#[test]
fn confirm_on_empty_display_launches_nothing() {
    let mut session = session_with(&["alpha"]);
    press(&mut session, &[Event::EnterSearch]);
    type_text(&mut session, "zzz");
    press(&mut session, &[Event::Confirm, Event::Confirm, Event::KeyDown, Event::ToggleSelect]);

    assert!(session.state.display.is_empty());
    assert_eq!(session.state.cursor, 0);
    assert!(session.launcher.launches.is_empty());
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Up,
    Down,
    Toggle,
    SelectAll,
    Delete,
    Reset,
    SearchNarrow,
    SearchNothing,
    Create,
}

const OPS: [Op; 9] = [
    Op::Up,
    Op::Down,
    Op::Toggle,
    Op::SelectAll,
    Op::Delete,
    Op::Reset,
    Op::SearchNarrow,
    Op::SearchNothing,
    Op::Create,
];

fn apply(session: &mut Session<RecordingLauncher>, op: Op) {
    match op {
        Op::Up => press(session, &[Event::KeyUp]),
        Op::Down => press(session, &[Event::KeyDown]),
        Op::Toggle => press(session, &[Event::ToggleSelect]),
        Op::SelectAll => press(session, &[Event::ToggleSelectAll]),
        Op::Delete => press(session, &[Event::DeleteSelected]),
        Op::Reset => press(session, &[Event::ResetFilter]),
        Op::SearchNarrow | Op::SearchNothing => {
            press(session, &[Event::EnterSearch]);
            type_text(session, if matches!(op, Op::SearchNarrow) { "a" } else { "qq" });
            press(session, &[Event::Confirm]);
        }
        Op::Create => {
            press(session, &[Event::EnterInsert]);
            type_text(session, "new");
            press(session, &[Event::Confirm]);
        }
    }
}

#[test]
fn cursor_stays_in_bounds_for_every_short_sequence() {
    let len = OPS.len();
    for seq in 0..len.pow(4) {
        let mut session = session_with(&["alpha", "beta", "gamma", "delta"]);
        let mut code = seq;
        for _ in 0..4 {
            let op = OPS[code % len];
            code /= len;
            apply(&mut session, op);

            let state = &session.state;
            if state.display.is_empty() {
                assert_eq!(state.cursor, 0, "{op:?} left cursor on an empty list");
            } else {
                assert!(state.cursor < state.display.len(), "{op:?} moved cursor out of bounds");
            }
        }
    }
}
