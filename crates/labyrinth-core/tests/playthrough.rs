//! Full-game walkthroughs over the standard labyrinth.
//!
//! Because every roll is seeded by the step counter, these routes are
//! fully deterministic: the same commands always meet the same events.

use labyrinth_core::action::movement::move_player;
use labyrinth_core::action::pickup::take_item;
use labyrinth_core::action::puzzle::{self, SolveStart};
use labyrinth_core::action::treasure::{self, TreasureOutcome};
use labyrinth_core::action::{ActionResult, apply};
use labyrinth_core::{Direction, GameState, RoomId, World, item};

#[test]
fn code_path_victory() {
    let mut world = World::labyrinth();
    let mut state = GameState::new();

    assert_eq!(
        take_item(&mut world, &mut state, "torch").unwrap(),
        ActionResult::Success
    );
    assert_eq!(
        move_player(&mut world, &mut state, Direction::North).unwrap(),
        ActionResult::Success
    );
    assert_eq!(state.current_room, RoomId::Hall);

    take_item(&mut world, &mut state, "bronze box").unwrap();
    assert_eq!(apply::use_item(&mut state, "bronze box"), ActionResult::Success);
    assert!(item::contains_any(&state.inventory, item::RUSTY_KEY));

    // The hall riddle, with a number word for the answer.
    assert!(matches!(
        puzzle::question(&world, &mut state).unwrap(),
        SolveStart::Ask(_)
    ));
    assert_eq!(
        puzzle::solve_puzzle(&mut world, &mut state, "ten").unwrap(),
        ActionResult::Success
    );
    assert_eq!(state.score, 10);

    // The rusty key unlocks the north door.
    assert_eq!(
        move_player(&mut world, &mut state, Direction::North).unwrap(),
        ActionResult::Success
    );
    assert_eq!(state.current_room, RoomId::TreasureRoom);
    assert_eq!(state.steps_taken, 2);

    // No treasure key: the chest only offers the code prompt.
    assert_eq!(
        treasure::attempt_open_treasure(&mut world, &mut state).unwrap(),
        TreasureOutcome::Locked
    );
    assert!(!state.game_over);

    assert_eq!(
        treasure::open_with_code(&mut world, &mut state, "542").unwrap(),
        ActionResult::Won
    );
    assert!(state.victory && state.game_over);
    // 10 riddle + 100 bonus + 25 lock-riddle points.
    assert_eq!(state.score, 135);
    assert_eq!(state.solved_puzzles, 1);
}

#[test]
fn key_path_victory() {
    let mut world = World::labyrinth();
    let mut state = GameState::new();

    move_player(&mut world, &mut state, Direction::North).unwrap();
    move_player(&mut world, &mut state, Direction::East).unwrap();
    assert_eq!(state.current_room, RoomId::TrapRoom);

    assert_eq!(
        puzzle::solve_puzzle(&mut world, &mut state, "3").unwrap(),
        ActionResult::Success
    );
    assert!(item::contains_any(&state.inventory, item::TREASURE_KEY));
    assert_eq!(state.score, 15);

    move_player(&mut world, &mut state, Direction::West).unwrap();
    take_item(&mut world, &mut state, "bronze box").unwrap();
    apply::use_item(&mut state, "bronze box");

    move_player(&mut world, &mut state, Direction::North).unwrap();
    assert_eq!(state.current_room, RoomId::TreasureRoom);

    assert_eq!(
        treasure::attempt_open_treasure(&mut world, &mut state).unwrap(),
        TreasureOutcome::Opened
    );
    assert!(state.victory && state.game_over);
    assert_eq!(state.score, 115);

    // Terminal state: approaching again reports the open chest.
    state.drain_messages();
    assert_eq!(
        treasure::attempt_open_treasure(&mut world, &mut state).unwrap(),
        TreasureOutcome::AlreadyOpen
    );
    assert_eq!(state.score, 115);
}
