//! The treasure-chest unlock protocol.
//!
//! Two ways in: the treasure key opens the chest outright; without it
//! the lock accepts the code from the treasure room's riddle. Either
//! way, opening the chest wins and ends the game.

use crate::GameError;
use crate::action::ActionResult;
use crate::item::{self, TREASURE_CHEST, TREASURE_KEY};
use crate::state::GameState;
use crate::world::{Room, RoomId, World};

/// Bonus score for opening the chest.
pub const VICTORY_BONUS: u32 = 100;

/// Outcome of approaching the chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureOutcome {
    /// Not in the treasure room at all.
    NotHere,
    /// The chest was opened earlier; nothing left to do.
    AlreadyOpen,
    /// Opened with the treasure key. The game is won.
    Opened,
    /// No key. The front end may offer the code prompt, answered by
    /// [`open_with_code`].
    Locked,
}

/// Key-path attempt at the chest.
pub fn attempt_open_treasure(
    world: &mut World,
    state: &mut GameState,
) -> Result<TreasureOutcome, GameError> {
    if state.current_room != RoomId::TreasureRoom {
        state.message("There is no treasure chest here.");
        return Ok(TreasureOutcome::NotHere);
    }

    let room = world.room_mut(RoomId::TreasureRoom)?;
    if !item::contains_any(&room.items, TREASURE_CHEST) {
        state.message("The chest is already open.");
        return Ok(TreasureOutcome::AlreadyOpen);
    }

    if item::contains_any(&state.inventory, TREASURE_KEY) {
        state.message("You turn the key and the lock snaps open. The chest is yours!");
        open_chest(room, state);
        state.message("The treasure spills out at your feet. You win!");
        return Ok(TreasureOutcome::Opened);
    }

    state.message("The chest is locked, and none of your keys fit.");
    Ok(TreasureOutcome::Locked)
}

/// Code-path attempt. The comparison is byte-exact against the riddle's
/// answer, read before the riddle is cleared: the code bonus includes
/// the riddle's points, so the order matters.
pub fn open_with_code(
    world: &mut World,
    state: &mut GameState,
    code: &str,
) -> Result<ActionResult, GameError> {
    let room = world.room_mut(RoomId::TreasureRoom)?;
    if !item::contains_any(&room.items, TREASURE_CHEST) {
        state.message("The chest is already open.");
        return Ok(ActionResult::NoTime);
    }

    let (matched, points) = match &room.puzzle {
        Some(puzzle) => (puzzle.answer.accepts_code(code), puzzle.points),
        None => (false, 0),
    };
    if !matched {
        state.message("The code is wrong. The chest stays locked.");
        return Ok(ActionResult::NoTime);
    }

    state.message("The code clicks into place and the lid lifts!");
    open_chest(room, state);
    state.add_score(points);
    room.puzzle = None;
    state.message("The treasure spills out at your feet. You win!");
    Ok(ActionResult::Won)
}

fn open_chest(room: &mut Room, state: &mut GameState) {
    room.items
        .retain(|item| !TREASURE_CHEST.contains(&item.canonical_name().as_str()));
    state.victory = true;
    state.game_over = true;
    state.add_score(VICTORY_BONUS);
}
