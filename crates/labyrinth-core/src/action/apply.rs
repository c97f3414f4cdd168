//! Using inventory items.
//!
//! The torch and the sword only print flavor; the bronze box is the
//! one item with a real effect, yielding the rusty key exactly once.

use crate::action::ActionResult;
use crate::item::{self, BRONZE_BOX, Item, RUSTY_KEY, SWORD, TORCH};
use crate::state::GameState;

/// Use an item from the inventory by name.
pub fn use_item(state: &mut GameState, name: &str) -> ActionResult {
    let (index, canonical, display) = match item::find_item(&state.inventory, name) {
        Some((index, found)) => (index, found.canonical_name(), found.name().to_string()),
        None => {
            state.message("You have no such item.");
            return ActionResult::NoTime;
        }
    };

    if TORCH.contains(&canonical.as_str()) {
        state.message("You light the torch. The shadows pull back.");
        state.message("Hidden corners of the rooms are visible now.");
        ActionResult::Success
    } else if SWORD.contains(&canonical.as_str()) {
        state.message("You draw the sword and feel a good deal braver.");
        ActionResult::Success
    } else if BRONZE_BOX.contains(&canonical.as_str()) {
        state.message("You pry open the bronze box...");
        if item::contains_any(&state.inventory, RUSTY_KEY) {
            state.message("Inside lies a rusty key — but you already carry its twin.");
        } else {
            state.inventory.push(Item::label("rusty key"));
            state.message("Inside you find an old rusty key!");
            state.message("You receive: rusty key");
        }
        // The box is spent either way; the key cannot be farmed.
        state.inventory.remove(index);
        state.message(format!("(The {display} falls apart in your hands.)"));
        ActionResult::Success
    } else {
        state.message(format!("You don't know how to use {display}."));
        ActionResult::NoTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(items: Vec<Item>) -> GameState {
        let mut state = GameState::new();
        state.inventory = items;
        state
    }

    #[test]
    fn missing_item_is_refused() {
        let mut state = state_with(vec![]);
        assert_eq!(use_item(&mut state, "torch"), ActionResult::NoTime);
        assert_eq!(state.drain_messages(), vec!["You have no such item."]);
    }

    #[test]
    fn torch_and_sword_print_flavor_only() {
        let mut state = state_with(vec![Item::label("torch"), Item::label("sword")]);
        assert_eq!(use_item(&mut state, "TORCH"), ActionResult::Success);
        assert_eq!(use_item(&mut state, "sword"), ActionResult::Success);
        assert_eq!(state.inventory.len(), 2);
    }

    #[test]
    fn bronze_box_yields_the_rusty_key_once() {
        let mut state = state_with(vec![Item::record(
            "bronze box",
            "A small tarnished box.",
        )]);

        assert_eq!(use_item(&mut state, "bronze box"), ActionResult::Success);
        assert_eq!(state.inventory.len(), 1);
        assert!(item::contains_any(&state.inventory, RUSTY_KEY));
        assert!(!item::contains_any(&state.inventory, BRONZE_BOX));
    }

    #[test]
    fn second_box_does_not_duplicate_the_key() {
        let mut state = state_with(vec![
            Item::label("bronze box"),
            Item::label("rusty key"),
        ]);

        assert_eq!(use_item(&mut state, "bronze box"), ActionResult::Success);
        let keys = state
            .inventory
            .iter()
            .filter(|i| RUSTY_KEY.contains(&i.canonical_name().as_str()))
            .count();
        assert_eq!(keys, 1);
        assert!(!item::contains_any(&state.inventory, BRONZE_BOX));
    }

    #[test]
    fn unusable_item_is_reported() {
        let mut state = state_with(vec![Item::label("coin")]);
        assert_eq!(use_item(&mut state, "coin"), ActionResult::NoTime);
        assert_eq!(state.inventory.len(), 1);
        assert_eq!(
            state.drain_messages(),
            vec!["You don't know how to use coin."]
        );
    }
}
