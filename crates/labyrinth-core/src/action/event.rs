//! Traps and ambient random events.
//!
//! Every roll is seeded by the step counter, so a given route through
//! the labyrinth always springs the same events.

use log::debug;

use crate::GameError;
use crate::item::{self, COIN, Item, SWORD, TORCH};
use crate::rng::pseudo_random;
use crate::state::GameState;
use crate::world::{RoomId, World};

/// A sprung trap: lose a random item, or with empty hands risk defeat
/// on a roughly 30% roll.
pub fn trigger_trap(state: &mut GameState) {
    state.message("The floor shudders underfoot. A trap!");

    if !state.inventory.is_empty() {
        let index = pseudo_random(state.steps_taken, state.inventory.len() as u32) as usize;
        let lost = state.inventory.remove(index);
        debug!("trap took inventory slot {index}");
        state.message(format!("You lost an item: {lost}"));
        return;
    }

    let roll = pseudo_random(state.steps_taken, 10);
    debug!("empty-handed trap roll: {roll}");
    if roll < 3 {
        state.message("The trap catches you square. It's all over.");
        state.game_over = true;
    } else {
        state.message("You throw yourself aside at the last instant. Unharmed!");
    }
}

/// Ambient event after a move. Fires on one roll in ten; a second roll
/// picks one of three scenarios.
pub fn random_event(world: &mut World, state: &mut GameState) -> Result<(), GameError> {
    if pseudo_random(state.steps_taken, 10) != 0 {
        return Ok(());
    }

    let scenario = pseudo_random(state.steps_taken + 1, 3);
    debug!("random event fired at step {}: scenario {scenario}", state.steps_taken);

    match scenario {
        0 => {
            state.message("Something glints on the floor: a coin!");
            let room = world.room_mut(state.current_room)?;
            if !item::contains_any(&room.items, COIN) {
                room.items.push(Item::label("coin"));
            }
        }
        1 => {
            state.message("You hear a strange rustling in the dark...");
            if item::contains_any(&state.inventory, SWORD) {
                state.message("You draw your sword, and the rustling stops at once.");
            } else {
                state.message("The rustling goes on. It makes your skin crawl.");
            }
        }
        _ => {
            if state.current_room == RoomId::TrapRoom
                && !item::contains_any(&state.inventory, TORCH)
            {
                state.message("You never saw the tripwire in the dark!");
                trigger_trap(state);
            }
        }
    }

    Ok(())
}
