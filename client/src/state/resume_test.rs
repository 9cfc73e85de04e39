use chrono::TimeZone;
use resume::{BlockKind, TemplateId};

use super::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).single().expect("valid instant")
}

#[test]
fn load_without_storage_uses_starter() {
    let state = ResumeState::load(now());
    assert_eq!(state.document(), &ResumeDocument::starter(now()));
    assert!(!state.exporting);
    assert_eq!(state.canvas.camera().zoom, 1.0);
}

#[test]
fn dispatch_applies_valid_events() {
    let mut state = ResumeState::load(now());
    assert!(state.dispatch(EditorEvent::SetTemplate(TemplateId::Minimal), now()));
    assert_eq!(state.document().template_id, TemplateId::Minimal);
    assert!(state.dispatch(EditorEvent::Add { id: "b9".to_owned(), kind: BlockKind::Skills }, now()));
    assert_eq!(state.document().blocks.len(), 6);
}

#[test]
fn dispatch_rejects_unknown_ids_without_change() {
    let mut state = ResumeState::load(now());
    let before = state.document().clone();
    assert!(!state.dispatch(EditorEvent::Reorder { from: "ghost".to_owned(), to: "header".to_owned() }, now()));
    assert_eq!(state.document(), &before);
}

// =============================================================
// Canvas actions
// =============================================================

#[test]
fn select_block_action_selects_in_editor() {
    let mut state = ResumeState::load(now());
    state.apply_canvas_actions(vec![Action::SelectBlock("header".to_owned())], now());
    assert_eq!(state.editor.phase.selected(), Some("header"));

    state.apply_canvas_actions(vec![Action::ClearSelection], now());
    assert_eq!(state.editor.phase.selected(), None);
}

#[test]
fn cursor_follows_set_cursor_actions() {
    let mut state = ResumeState::load(now());
    assert_eq!(state.cursor, CURSOR_IDLE);
    state.apply_canvas_actions(vec![Action::RenderNeeded, Action::SetCursor("grabbing".to_owned())], now());
    assert_eq!(state.cursor, "grabbing");
}

#[test]
fn selecting_unknown_block_is_ignored() {
    let mut state = ResumeState::load(now());
    state.apply_canvas_actions(vec![Action::SelectBlock("ghost".to_owned())], now());
    assert_eq!(state.editor.phase.selected(), None);
}

// =============================================================
// Block edits
// =============================================================

#[test]
fn edit_block_mutates_a_copy_and_dispatches() {
    let mut state = ResumeState::load(now());
    let applied = state.edit_block("skills", now(), |data| {
        if let BlockData::Skills(skills) = data {
            skills.add("Leptos");
        }
    });
    assert!(applied);
    let Some(BlockData::Skills(skills)) = state.document().block("skills").map(|b| &b.data) else {
        panic!("skills block missing");
    };
    assert!(skills.contains("Leptos"));
    assert_eq!(state.editor.phase.selected(), Some("skills"));
}

#[test]
fn edit_block_on_missing_id_is_a_no_op() {
    let mut state = ResumeState::load(now());
    let before = state.document().clone();
    assert!(!state.edit_block("ghost", now(), |_| {}));
    assert_eq!(state.document(), &before);
}

#[test]
fn restore_keeps_the_camera() {
    let mut state = ResumeState::new(ResumeDocument::starter(now()));
    let _ = state.canvas.zoom_in();
    let zoom = state.canvas.camera().zoom;
    state.restore(now());
    assert_eq!(state.canvas.camera().zoom, zoom);
    assert_eq!(state.document(), &ResumeDocument::starter(now()));
}
