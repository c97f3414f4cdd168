//! Player action system — the game-state transition engine.
//!
//! Each submodule implements one family of commands. Operations push
//! their feedback onto the state's message queue and report how the
//! turn ended through [`ActionResult`]; multi-step flows (riddle
//! answers, the chest's code prompt) are split so the front end can
//! collect input between the steps.

pub mod apply;
pub mod event;
pub mod look;
pub mod movement;
pub mod pickup;
pub mod puzzle;
pub mod treasure;

/// Result of executing a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// The action succeeded and the world changed.
    Success,
    /// The action was refused or had no effect; only feedback was printed.
    NoTime,
    /// The player backed out of a prompt.
    Cancelled,
    /// The action ended the game in defeat.
    Died,
    /// The action ended the game in victory.
    Won,
}

impl ActionResult {
    /// The success boolean the dispatcher reports.
    pub fn succeeded(self) -> bool {
        matches!(self, ActionResult::Success | ActionResult::Won)
    }
}
