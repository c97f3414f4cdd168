//! Describing the surroundings and the inventory.

use crate::GameError;
use crate::state::GameState;
use crate::world::World;

/// Push the current room's description: heading, text, visible items,
/// exits, and a hint when a riddle waits here.
pub fn describe_room(world: &World, state: &mut GameState) -> Result<(), GameError> {
    let room = world.room(state.current_room)?;

    state.message(format!("== {} ==", room.name.to_uppercase()));
    state.message(room.description.clone());

    if !room.items.is_empty() {
        state.message("Notable items:");
        for item in &room.items {
            state.message(format!("  - {item}"));
        }
    }

    if !room.exits.is_empty() {
        let exits: Vec<String> = room.exits.keys().map(|d| d.to_string()).collect();
        state.message(format!("Exits: {}", exits.join(", ")));
    }

    if room.puzzle.is_some() {
        state.message("A riddle waits here (try 'solve').");
    }

    Ok(())
}

/// Push a numbered listing of the inventory.
pub fn show_inventory(state: &mut GameState) {
    if state.inventory.is_empty() {
        state.message("Your inventory is empty.");
        return;
    }

    let mut lines = vec!["=== INVENTORY ===".to_string()];
    for (index, item) in state.inventory.iter().enumerate() {
        lines.push(format!("{}. {item}", index + 1));
        if let Some(description) = item.description() {
            lines.push(format!("   {description}"));
        }
    }
    for line in lines {
        state.message(line);
    }
}
