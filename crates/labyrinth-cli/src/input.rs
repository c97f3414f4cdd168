//! Command tokenizing — map a typed line to a game command.
//!
//! Normalization happens once, here. The core never sees raw tokens,
//! only the `Command` variants. English and Russian forms both work.

use labyrinth_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Inventory,
    Go(Direction),
    Take(String),
    Use(String),
    Solve,
    Open,
    Score,
    Help,
    Quit,
}

/// Parse one input line. `Err` carries the corrective message to print.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("You typed nothing.".into());
    };
    let cmd = head.to_lowercase();
    let rest: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "look" | "осмотреться" | "осмотр" => Ok(Command::Look),
        "inventory" | "inv" | "инвентарь" | "инв" => Ok(Command::Inventory),
        "go" | "move" | "идти" => {
            // "go to the north" still works: the last word decides.
            let Some(last) = rest.last() else {
                return Err("Say which way to go.".into());
            };
            let token = last.to_lowercase();
            parse_direction(&token)
                .map(Command::Go)
                .ok_or_else(|| format!("'{token}' is not a direction."))
        }
        "take" | "взять" | "подобрать" => match rest.is_empty() {
            true => Err("Say which item to take.".into()),
            false => Ok(Command::Take(rest.join(" "))),
        },
        "use" | "использовать" => match rest.is_empty() {
            true => Err("Say which item to use.".into()),
            false => Ok(Command::Use(rest.join(" "))),
        },
        "solve" | "решить" | "загадка" => Ok(Command::Solve),
        "open" | "открыть" => Ok(Command::Open),
        "score" | "очки" | "счет" => Ok(Command::Score),
        "help" | "?" | "помощь" => Ok(Command::Help),
        "quit" | "exit" | "выход" | "выйти" => Ok(Command::Quit),
        // Bare direction words move too.
        other => parse_direction(other)
            .map(Command::Go)
            .ok_or_else(|| format!("Unknown command: '{}'.", line.trim())),
    }
}

fn parse_direction(token: &str) -> Option<Direction> {
    match token {
        "n" | "север" => Some(Direction::North),
        "s" | "юг" => Some(Direction::South),
        "w" | "запад" => Some(Direction::West),
        "e" | "восток" => Some(Direction::East),
        "вверх" => Some(Direction::Up),
        "вниз" => Some(Direction::Down),
        other => other.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_commands() {
        assert_eq!(parse_line("look"), Ok(Command::Look));
        assert_eq!(parse_line("  INVENTORY  "), Ok(Command::Inventory));
        assert_eq!(parse_line("solve"), Ok(Command::Solve));
        assert_eq!(parse_line("открыть"), Ok(Command::Open));
        assert_eq!(parse_line("quit"), Ok(Command::Quit));
    }

    #[test]
    fn go_takes_the_last_word() {
        assert_eq!(parse_line("go north"), Ok(Command::Go(Direction::North)));
        assert_eq!(parse_line("идти на север"), Ok(Command::Go(Direction::North)));
        assert_eq!(parse_line("go e"), Ok(Command::Go(Direction::East)));
        assert!(parse_line("go sideways").is_err());
        assert!(parse_line("go").is_err());
    }

    #[test]
    fn bare_directions_move() {
        assert_eq!(parse_line("north"), Ok(Command::Go(Direction::North)));
        assert_eq!(parse_line("s"), Ok(Command::Go(Direction::South)));
        assert_eq!(parse_line("вверх"), Ok(Command::Go(Direction::Up)));
    }

    #[test]
    fn item_commands_join_their_arguments() {
        assert_eq!(
            parse_line("take bronze box"),
            Ok(Command::Take("bronze box".into()))
        );
        assert_eq!(parse_line("use torch"), Ok(Command::Use("torch".into())));
        assert!(parse_line("take").is_err());
        assert!(parse_line("use").is_err());
    }

    #[test]
    fn unknown_input_is_reported() {
        assert!(parse_line("dance").is_err());
        assert!(parse_line("").is_err());
    }
}
