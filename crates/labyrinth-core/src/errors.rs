//! Core error taxonomy.
//!
//! Only data-level failures are errors. Player mistakes (bad direction,
//! unknown item, wrong answer) are reported through the message queue
//! and return [`crate::action::ActionResult::NoTime`] instead.

use thiserror::Error;

use crate::world::RoomId;

/// A defect in the world data reached at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),
}
