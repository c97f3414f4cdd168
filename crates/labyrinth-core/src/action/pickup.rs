//! Taking items from the current room.

use crate::GameError;
use crate::action::ActionResult;
use crate::item;
use crate::state::GameState;
use crate::world::World;

/// Move the named item from the room's floor into the inventory.
/// Removal is positional, so duplicates are taken one at a time.
pub fn take_item(
    world: &mut World,
    state: &mut GameState,
    name: &str,
) -> Result<ActionResult, GameError> {
    let room = world.room_mut(state.current_room)?;

    if room.items.is_empty() {
        state.message("There is nothing here to take.");
        return Ok(ActionResult::NoTime);
    }

    let Some((index, _)) = item::find_item(&room.items, name) else {
        state.message("There is no such item here.");
        return Ok(ActionResult::NoTime);
    };

    let taken = room.items.remove(index);
    state.message(format!("You pick up: {taken}"));
    state.inventory.push(taken);
    Ok(ActionResult::Success)
}
