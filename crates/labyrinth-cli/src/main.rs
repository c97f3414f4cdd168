//! The `labyrinth` binary: read loop, prompts, and end-of-run report.
//!
//! One command is fully processed, including any prompts it issues,
//! before the next line is read. A closed stdin is an implicit quit.

mod input;

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use log::debug;

use labyrinth_core::action::puzzle::{self, SolveStart};
use labyrinth_core::action::treasure::{self, TreasureOutcome};
use labyrinth_core::action::{ActionResult, apply, look, movement, pickup};
use labyrinth_core::{GameState, World};

use crate::input::Command;

/// A text-driven treasure hunt in a five-room labyrinth.
#[derive(Parser, Debug)]
#[command(name = "labyrinth", version, about)]
struct Args {
    /// Skip the welcome banner.
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let color = !args.no_color && io::stdout().is_terminal();

    let mut world = World::labyrinth();
    let mut state = GameState::new();

    if !args.quiet {
        print_banner();
    }
    look::describe_room(&world, &mut state)?;
    flush_messages(&mut state, color);

    while !state.game_over {
        let Some(line) = prompt("\n> ")? else {
            println!("\nLeaving the labyrinth.");
            break;
        };
        if line.trim().is_empty() {
            println!("Enter a command, or 'help' for the list.");
            continue;
        }
        match input::parse_line(&line) {
            Ok(command) => {
                debug!("dispatch: {command:?}");
                let result = run_command(&mut world, &mut state, color, command)?;
                debug!("result: {result:?} (succeeded: {})", result.succeeded());
            }
            Err(message) => {
                println!("{message}");
                println!("Type 'help' for the available commands.");
            }
        }
        flush_messages(&mut state, color);
    }

    print_report(&state, color);
    Ok(())
}

fn run_command(
    world: &mut World,
    state: &mut GameState,
    color: bool,
    command: Command,
) -> Result<ActionResult> {
    let result = match command {
        Command::Quit => {
            println!("You leave the labyrinth. Game over.");
            state.game_over = true;
            ActionResult::NoTime
        }
        Command::Look => {
            look::describe_room(world, state)?;
            ActionResult::NoTime
        }
        Command::Inventory => {
            look::show_inventory(state);
            ActionResult::NoTime
        }
        Command::Score => {
            print_score(state);
            ActionResult::NoTime
        }
        Command::Help => {
            print_help();
            ActionResult::NoTime
        }
        Command::Go(direction) => movement::move_player(world, state, direction)?,
        Command::Take(name) => pickup::take_item(world, state, &name)?,
        Command::Use(name) => apply::use_item(state, &name),
        Command::Solve => solve_flow(world, state, color)?,
        Command::Open => open_flow(world, state, color)?,
    };
    Ok(result)
}

/// Present the riddle, collect an answer, validate it.
fn solve_flow(world: &mut World, state: &mut GameState, color: bool) -> Result<ActionResult> {
    match puzzle::question(world, state)? {
        SolveStart::TreasureChest => open_flow(world, state, color),
        SolveStart::NoPuzzle => Ok(ActionResult::NoTime),
        SolveStart::Ask(question) => {
            println!();
            println!("{}", maybe_bold("A RIDDLE!", color));
            println!("{question}");
            match prompt("\nYour answer: ")? {
                Some(answer) => Ok(puzzle::solve_puzzle(world, state, &answer)?),
                None => {
                    state.game_over = true;
                    Ok(ActionResult::Cancelled)
                }
            }
        }
    }
}

/// The chest protocol: key first, then the optional code prompt.
fn open_flow(world: &mut World, state: &mut GameState, color: bool) -> Result<ActionResult> {
    match treasure::attempt_open_treasure(world, state)? {
        TreasureOutcome::NotHere | TreasureOutcome::AlreadyOpen => Ok(ActionResult::NoTime),
        TreasureOutcome::Opened => Ok(ActionResult::Won),
        TreasureOutcome::Locked => {
            flush_messages(state, color);
            match prompt("Try a code? (yes/no): ")? {
                None => {
                    state.game_over = true;
                    Ok(ActionResult::Cancelled)
                }
                Some(reply) if is_yes(&reply) => match prompt("Enter the code: ")? {
                    Some(code) => Ok(treasure::open_with_code(world, state, &code)?),
                    None => {
                        state.game_over = true;
                        Ok(ActionResult::Cancelled)
                    }
                },
                Some(_) => {
                    println!("You step back from the chest.");
                    Ok(ActionResult::Cancelled)
                }
            }
        }
    }
}

fn is_yes(reply: &str) -> bool {
    matches!(reply.trim().to_lowercase().as_str(), "yes" | "y" | "да" | "д")
}

/// Print `text`, then read one line. `None` means stdin is closed.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn flush_messages(state: &mut GameState, color: bool) {
    for line in state.drain_messages() {
        if line.starts_with("== ") {
            println!("\n{}", maybe_bold(&line, color));
        } else {
            println!("{line}");
        }
    }
}

fn maybe_bold(line: &str, color: bool) -> String {
    if color {
        format!("{}", line.bold().cyan())
    } else {
        line.to_string()
    }
}

fn print_banner() {
    println!("{}", "=".repeat(40));
    println!("Welcome to the Treasure Labyrinth!");
    println!("{}", "=".repeat(40));
    println!();
    println!("Explore the labyrinth, gather items, solve riddles,");
    println!("and open the treasure chest to win.");
    println!();
    println!("THE WAY TO WIN:");
    println!("1. Find the treasure key, or");
    println!("2. Crack the chest's lock code,");
    println!("3. then open the chest in the treasure room.");
    println!();
    println!("Type 'help' for the commands, 'score' for your standing.");
    println!("{}", "-".repeat(50));
}

fn print_help() {
    println!("\nAvailable commands:");
    println!("  look                describe the current room");
    println!("  go <direction>      move (north/south/west/east; bare words work too)");
    println!("  take <item>         pick an item off the floor");
    println!("  use <item>          use an item you carry");
    println!("  inventory           list what you carry");
    println!("  solve               take on the room's riddle");
    println!("  open                try the treasure chest");
    println!("  score               show your score");
    println!("  quit                give up and leave");
    println!("\nSpecial items:");
    println!("  torch      - lights dark rooms");
    println!("  sword      - steadies the nerves");
    println!("  bronze box - can be opened");
    println!("\nVICTORY:");
    println!("  Find the treasure key and open the chest in the treasure");
    println!("  room — or crack the chest by solving its lock code.");
}

fn print_score(state: &GameState) {
    println!("\nYour score so far: {} points", state.score);
    println!("Riddles solved: {}", state.solved_puzzles);
    println!("Items carried: {}", state.inventory.len());
}

fn print_report(state: &GameState, color: bool) {
    println!("\n{}", "=".repeat(50));
    if state.victory {
        let banner = "CONGRATULATIONS — YOU WIN!";
        if color {
            println!("{}", banner.bold().yellow());
        } else {
            println!("{banner}");
        }
        println!("You found the treasure and beat the labyrinth!");
    } else {
        println!("GAME OVER");
    }
    println!("{}", "=".repeat(50));

    println!("\nYour results:");
    println!("- Steps taken: {}", state.steps_taken);
    println!("- Score: {} points", state.score);
    println!("- Riddles solved: {}", state.solved_puzzles);
    println!("- Items collected: {}", state.inventory.len());
    println!("- Rating: {}", rating(state));
    println!("\nThanks for playing!");
}

fn rating(state: &GameState) -> &'static str {
    if state.victory {
        match state.score {
            200.. => "Legendary hero!",
            150.. => "Great victor!",
            _ => "Winner of the labyrinth!",
        }
    } else {
        match state.score {
            100.. => "So close!",
            50.. => "A good run!",
            _ => "Better luck next time!",
        }
    }
}
