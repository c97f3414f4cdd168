//! Riddle presentation and answer validation.

use log::debug;

use crate::GameError;
use crate::action::{ActionResult, event};
use crate::state::GameState;
use crate::world::{Answer, Reward, RoomId, World};

/// Words accepted in place of digits, by value. Extend as riddles need.
const NUMBER_WORDS: &[(i64, &[&str])] = &[
    (3, &["three", "три"]),
    (5, &["five", "пять", "пяти", "пятью"]),
    (10, &["ten", "десять", "десяти", "десятью"]),
];

/// How a `solve` command should proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStart {
    /// The treasure room routes to the chest protocol instead.
    TreasureChest,
    /// Nothing to solve here; feedback already queued.
    NoPuzzle,
    /// Present this question and collect an answer.
    Ask(String),
}

/// First half of the solve flow: find out whether there is anything to
/// ask. The front end prompts and then calls [`solve_puzzle`].
pub fn question(world: &World, state: &mut GameState) -> Result<SolveStart, GameError> {
    if state.current_room == RoomId::TreasureRoom {
        return Ok(SolveStart::TreasureChest);
    }
    match &world.room(state.current_room)?.puzzle {
        Some(puzzle) => Ok(SolveStart::Ask(puzzle.question.clone())),
        None => {
            state.message("There is no riddle here.");
            Ok(SolveStart::NoPuzzle)
        }
    }
}

/// Second half: validate `answer` against the current room's riddle.
///
/// A correct answer clears the riddle for good, awards the reward (the
/// riddle's own, or the room's default) and the points. A wrong answer
/// leaves the riddle in place — and springs the trap in the trap room.
pub fn solve_puzzle(
    world: &mut World,
    state: &mut GameState,
    answer: &str,
) -> Result<ActionResult, GameError> {
    let room = world.room_mut(state.current_room)?;
    let Some(puzzle) = room.puzzle.clone() else {
        state.message("There is no riddle here.");
        return Ok(ActionResult::NoTime);
    };

    let guess = answer.trim().to_lowercase();
    if !answer_matches(&puzzle.answer, &guess) {
        debug!("wrong answer {guess:?} in {}", state.current_room);
        state.message("Wrong. Think it over and try again.");
        if state.current_room == RoomId::TrapRoom {
            state.message("The wrong answer springs something in the walls!");
            event::trigger_trap(state);
            if state.game_over {
                return Ok(ActionResult::Died);
            }
        }
        return Ok(ActionResult::NoTime);
    }

    // One-time: the riddle is gone before rewards are handed out.
    room.puzzle = None;
    let default_reward = room.default_reward.clone();

    state.message("Correct! The riddle is solved.");
    state.message("The carved letters fade from the wall.");

    let reward = puzzle.reward.or(default_reward.map(Reward::One));
    if let Some(reward) = reward {
        for item in reward.into_items() {
            state.message(format!("You receive: {item}"));
            state.inventory.push(item);
        }
    }

    state.add_score(puzzle.points);
    state.solved_puzzles += 1;
    state.message(format!(
        "You earn {} points. Total score: {}.",
        puzzle.points, state.score
    ));

    Ok(ActionResult::Success)
}

fn answer_matches(answer: &Answer, guess: &str) -> bool {
    match answer {
        Answer::Text(text) => text_matches(text, guess),
        Answer::Number(n) => number_matches(*n, guess),
        Answer::AnyOf(options) => options.iter().any(|option| text_matches(option, guess)),
    }
}

fn text_matches(canonical: &str, guess: &str) -> bool {
    let canonical = canonical.to_lowercase();
    if canonical == guess {
        return true;
    }
    // Numeric canonical answers also accept digit strings and words.
    match canonical.parse::<i64>() {
        Ok(n) => number_matches(n, guess),
        Err(_) => false,
    }
}

fn number_matches(n: i64, guess: &str) -> bool {
    if guess.parse::<i64>() == Ok(n) {
        return true;
    }
    NUMBER_WORDS
        .iter()
        .any(|(value, words)| *value == n && words.contains(&guess))
}
