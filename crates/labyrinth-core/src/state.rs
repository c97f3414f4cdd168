//! Mutable game state shared by every operation.

use crate::item::Item;
use crate::world::RoomId;

/// The single mutable record a game runs on. Owned by the main loop
/// and passed by `&mut` into every core operation.
#[derive(Debug, Clone)]
pub struct GameState {
    pub current_room: RoomId,
    pub inventory: Vec<Item>,
    pub score: u32,
    /// Also the seed for every pseudo-random roll.
    pub steps_taken: u64,
    pub solved_puzzles: u32,
    /// Terminal: once set, the dispatcher processes no further commands.
    pub game_over: bool,
    pub victory: bool,
    /// Feedback lines for the front end to drain and print.
    pub messages: Vec<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            current_room: RoomId::Entrance,
            inventory: Vec::new(),
            score: 0,
            steps_taken: 0,
            solved_puzzles: 0,
            game_over: false,
            victory: false,
            messages: Vec::new(),
        }
    }

    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Score never wraps; penalties elsewhere clamp at zero the same way.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
