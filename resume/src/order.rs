//! Block ordering. Render order is array order.
//!
//! All operations address blocks by id and leave the slice untouched when
//! they fail.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use crate::blocks::ResumeBlock;

/// Error returned by the ordering operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// No block carries this id.
    #[error("block not found: {0}")]
    NotFound(String),
    /// A target index past the end of the list.
    #[error("index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Index of the block with `id`.
///
/// # Errors
///
/// [`OrderError::NotFound`] if no block has `id`.
pub fn position(blocks: &[ResumeBlock], id: &str) -> Result<usize, OrderError> {
    blocks.iter().position(|b| b.id == id).ok_or_else(|| OrderError::NotFound(id.to_owned()))
}

/// Move `from_id` to the index `to_id` occupied before the move.
///
/// `[header, summary, experience]` with `reorder(header, experience)` becomes
/// `[summary, experience, header]`. Equal ids are a no-op.
///
/// # Errors
///
/// [`OrderError::NotFound`] for either id; the list is left unchanged.
pub fn reorder(blocks: &mut Vec<ResumeBlock>, from_id: &str, to_id: &str) -> Result<(), OrderError> {
    let from = position(blocks, from_id)?;
    let to = position(blocks, to_id)?;
    shift(blocks, from, to);
    Ok(())
}

/// Move the block with `id` so it ends at `index`.
///
/// # Errors
///
/// [`OrderError::NotFound`] for an unknown id, [`OrderError::IndexOutOfRange`]
/// when `index >= blocks.len()`.
pub fn move_to_index(blocks: &mut Vec<ResumeBlock>, id: &str, index: usize) -> Result<(), OrderError> {
    let from = position(blocks, id)?;
    if index >= blocks.len() {
        return Err(OrderError::IndexOutOfRange { index, len: blocks.len() });
    }
    shift(blocks, from, index);
    Ok(())
}

/// Swap the block with its predecessor. Returns `false` if already first.
///
/// # Errors
///
/// [`OrderError::NotFound`] for an unknown id.
pub fn move_up(blocks: &mut [ResumeBlock], id: &str) -> Result<bool, OrderError> {
    let at = position(blocks, id)?;
    if at == 0 {
        return Ok(false);
    }
    blocks.swap(at, at - 1);
    Ok(true)
}

/// Swap the block with its successor. Returns `false` if already last.
///
/// # Errors
///
/// [`OrderError::NotFound`] for an unknown id.
pub fn move_down(blocks: &mut [ResumeBlock], id: &str) -> Result<bool, OrderError> {
    let at = position(blocks, id)?;
    if at + 1 >= blocks.len() {
        return Ok(false);
    }
    blocks.swap(at, at + 1);
    Ok(true)
}

/// Remove and return the block with `id`.
///
/// # Errors
///
/// [`OrderError::NotFound`] for an unknown id.
pub fn remove(blocks: &mut Vec<ResumeBlock>, id: &str) -> Result<ResumeBlock, OrderError> {
    let at = position(blocks, id)?;
    Ok(blocks.remove(at))
}

fn shift(blocks: &mut Vec<ResumeBlock>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let block = blocks.remove(from);
    blocks.insert(to, block);
}
