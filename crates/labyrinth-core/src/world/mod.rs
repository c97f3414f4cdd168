//! Rooms, exits, and puzzles.
//!
//! The room map is static data, but `items` and `puzzle` mutate at
//! runtime: items get taken, solved puzzles disappear, random events
//! drop coins. The core operations receive the world as an explicit
//! `&mut World` rather than reaching for ambient shared state.

use std::collections::{BTreeMap, HashMap};

use strum::{Display, EnumIter, EnumString};

use crate::GameError;
use crate::item::Item;

mod data;

/// Identifier of a room in the labyrinth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RoomId {
    Entrance,
    Hall,
    Library,
    TrapRoom,
    TreasureRoom,
}

/// Movement directions. The `Ord` derive fixes the order exits are
/// listed in room descriptions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    West,
    East,
    Up,
    Down,
}

/// Canonical answer forms for a riddle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A single textual answer, compared case-insensitively.
    Text(String),
    /// A numeric answer; digit strings and number words both match.
    Number(i64),
    /// Any of these texts is accepted.
    AnyOf(Vec<String>),
}

impl Answer {
    /// Whether `code` matches this answer byte-for-byte. Used by the
    /// treasure chest's lock, which is stricter than riddle matching.
    pub fn accepts_code(&self, code: &str) -> bool {
        match self {
            Answer::Text(text) => text == code,
            Answer::Number(n) => n.to_string() == code,
            Answer::AnyOf(options) => options.iter().any(|option| option == code),
        }
    }
}

/// What a solved riddle hands out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reward {
    One(Item),
    Many(Vec<Item>),
}

impl Reward {
    pub fn into_items(self) -> Vec<Item> {
        match self {
            Reward::One(item) => vec![item],
            Reward::Many(items) => items,
        }
    }
}

/// Points awarded for a riddle that doesn't name its own score.
pub const DEFAULT_PUZZLE_POINTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: Answer,
    /// Explicit reward; `None` falls back to the room's default.
    pub reward: Option<Reward>,
    pub points: u32,
}

impl Puzzle {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
            reward: None,
            points: DEFAULT_PUZZLE_POINTS,
        }
    }

    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.reward = Some(reward);
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    pub exits: BTreeMap<Direction, RoomId>,
    pub puzzle: Option<Puzzle>,
    /// Handed out when a solved puzzle has no reward of its own.
    pub default_reward: Option<Item>,
}

/// The id -> room map the whole game runs against.
#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
}

impl World {
    pub fn new(rooms: HashMap<RoomId, Room>) -> Self {
        Self { rooms }
    }

    pub fn room(&self, id: RoomId) -> Result<&Room, GameError> {
        self.rooms.get(&id).ok_or(GameError::UnknownRoom(id))
    }

    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, GameError> {
        self.rooms.get_mut(&id).ok_or(GameError::UnknownRoom(id))
    }
}
