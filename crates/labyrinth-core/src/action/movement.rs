//! Movement and access control.

use log::debug;

use crate::GameError;
use crate::action::{ActionResult, event, look};
use crate::item::{self, RUSTY_KEY};
use crate::state::GameState;
use crate::world::{Direction, RoomId, World};

/// Try to move the player through `direction`.
///
/// Entering the treasure room requires a rusty-key equivalent in the
/// inventory. On success the step counter advances, the new room is
/// described, and a random event may fire; event failures never undo
/// a completed move.
pub fn move_player(
    world: &mut World,
    state: &mut GameState,
    direction: Direction,
) -> Result<ActionResult, GameError> {
    let destination = match world.room(state.current_room)?.exits.get(&direction) {
        Some(&destination) => destination,
        None => {
            state.message("You can't go that way.");
            return Ok(ActionResult::NoTime);
        }
    };

    if destination == RoomId::TreasureRoom {
        if !item::contains_any(&state.inventory, RUSTY_KEY) {
            state.message("The door is locked tight.");
            state.message("A rusty key might fit this lock...");
            return Ok(ActionResult::NoTime);
        }
        state.message("The rusty key grinds in the lock, and the iron door swings open.");
    }

    state.current_room = destination;
    state.steps_taken += 1;
    look::describe_room(world, state)?;

    // Post-move events are best-effort.
    if let Err(err) = event::random_event(world, state) {
        debug!("random event skipped: {err}");
    }

    Ok(ActionResult::Success)
}
