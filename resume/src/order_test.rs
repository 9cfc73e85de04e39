use super::*;
use crate::blocks::BlockKind;

fn blocks(ids: &[&str]) -> Vec<ResumeBlock> {
    ids.iter().map(|id| ResumeBlock::with_defaults(*id, BlockKind::Summary)).collect()
}

fn ids(blocks: &[ResumeBlock]) -> Vec<&str> {
    blocks.iter().map(|b| b.id.as_str()).collect()
}

// =============================================================
// reorder
// =============================================================

#[test]
fn reorder_moves_to_target_original_index() {
    let mut list = blocks(&["header", "summary", "experience"]);
    reorder(&mut list, "header", "experience").expect("reorder");
    assert_eq!(ids(&list), ["summary", "experience", "header"]);
}

#[test]
fn reorder_backwards() {
    let mut list = blocks(&["a", "b", "c", "d"]);
    reorder(&mut list, "d", "b").expect("reorder");
    assert_eq!(ids(&list), ["a", "d", "b", "c"]);
}

#[test]
fn reorder_same_id_is_noop() {
    let mut list = blocks(&["a", "b", "c"]);
    reorder(&mut list, "b", "b").expect("reorder");
    assert_eq!(ids(&list), ["a", "b", "c"]);
}

#[test]
fn reorder_then_reorder_back_restores_order() {
    let original = blocks(&["a", "b", "c", "d", "e"]);
    for from in ["a", "b", "c", "d", "e"] {
        for to in ["a", "b", "c", "d", "e"] {
            let mut list = original.clone();
            let from_index = position(&list, from).expect("from");
            let to_index = position(&list, to).expect("to");
            reorder(&mut list, from, to).expect("forward");
            // The block now sitting at from's old index is the way back.
            let back_target = list[from_index].id.clone();
            reorder(&mut list, from, &back_target).expect("back");
            assert_eq!(list, original, "from {from} ({from_index}) to {to} ({to_index})");
        }
    }
}

#[test]
fn reorder_unknown_id_fails_and_leaves_list() {
    let mut list = blocks(&["a", "b"]);
    assert_eq!(reorder(&mut list, "zz", "a"), Err(OrderError::NotFound("zz".to_owned())));
    assert_eq!(reorder(&mut list, "a", "zz"), Err(OrderError::NotFound("zz".to_owned())));
    assert_eq!(ids(&list), ["a", "b"]);
}

// =============================================================
// Other moves
// =============================================================

#[test]
fn move_to_index_places_block() {
    let mut list = blocks(&["a", "b", "c"]);
    move_to_index(&mut list, "a", 2).expect("move");
    assert_eq!(ids(&list), ["b", "c", "a"]);
    assert_eq!(
        move_to_index(&mut list, "a", 3),
        Err(OrderError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn move_up_and_down_stop_at_edges() {
    let mut list = blocks(&["a", "b", "c"]);
    assert_eq!(move_up(&mut list, "a"), Ok(false));
    assert_eq!(move_down(&mut list, "c"), Ok(false));
    assert_eq!(move_up(&mut list, "c"), Ok(true));
    assert_eq!(ids(&list), ["a", "c", "b"]);
    assert_eq!(move_down(&mut list, "a"), Ok(true));
    assert_eq!(ids(&list), ["c", "a", "b"]);
}

#[test]
fn remove_returns_block() {
    let mut list = blocks(&["a", "b"]);
    assert_eq!(remove(&mut list, "a").map(|b| b.id), Ok("a".to_owned()));
    assert_eq!(ids(&list), ["b"]);
    assert!(remove(&mut list, "a").is_err());
}

#[test]
fn not_found_message_names_id() {
    assert_eq!(OrderError::NotFound("b9".to_owned()).to_string(), "block not found: b9");
}
