//! labyrinth-core: Core game logic for the treasure labyrinth
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: every operation takes the
//! world data and the game state as explicit parameters, and all
//! user-visible feedback goes through the message queue on
//! [`GameState`] rather than stdout. The front end drains the queue
//! and prints it.

pub mod action;
pub mod item;
pub mod rng;
pub mod state;
pub mod world;

mod errors;

pub use errors::GameError;
pub use rng::pseudo_random;
pub use state::GameState;
pub use world::{Direction, Room, RoomId, World};
