//! Player commands understood by the terminal driver

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use lost_rovers::game::Game;

/// One player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    PickUp,
    PerformTask,
    WayBack,
    Inventory,
    Map,
    Summary,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self> {
        let command = match input.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Command::Up,
            "d" | "down" => Command::Down,
            "l" | "left" => Command::Left,
            "r" | "right" => Command::Right,
            "p" | "pick" => Command::PickUp,
            "t" | "task" => Command::PerformTask,
            "w" | "way" => Command::WayBack,
            "i" | "inventory" => Command::Inventory,
            "m" | "map" => Command::Map,
            "s" | "summary" => Command::Summary,
            "q" | "quit" => Command::Quit,
            other => bail!("Unknown command '{}'", other),
        };
        Ok(command)
    }
}

/// Parse a script of single-letter commands, ignoring whitespace
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string().parse::<Command>())
        .collect()
}

/// Play one command per input line until quit, win or end of input.
/// Unknown lines are reported and skipped.
pub fn play_lines<R: BufRead>(game: &mut Game, input: R, show_map: bool) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        if !apply(game, command, show_map) {
            break;
        }
        io::stdout().flush().context("Failed to flush stdout")?;
    }
    Ok(())
}

/// Apply one command. Returns false when play should stop.
pub fn apply(game: &mut Game, command: Command, show_map: bool) -> bool {
    let tasks_before = game.tasks().len();
    match command {
        Command::Up => {
            game.move_up();
        }
        Command::Down => {
            game.move_down();
        }
        Command::Left => {
            game.move_left();
        }
        Command::Right => {
            game.move_right();
        }
        Command::PickUp => {
            game.pick_up();
        }
        Command::PerformTask => {
            game.perform_task();
        }
        Command::WayBack => {
            game.show_way_back();
        }
        Command::Inventory => print!("{}", game.inventory_description()),
        Command::Map => println!("{}", game.draw_map()),
        Command::Summary => game.print_summary(),
        Command::Quit => return false,
    }

    if show_map {
        println!("{}", game.draw_map());
    }
    if game.tasks().len() != tasks_before {
        print!("{}", game.current_task_description());
        println!();
    }
    !game.is_won()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lost_rovers::game::{Item, Location, Point};

    /// Hand the rover every supply of the front task and park it on the
    /// matching broken component
    fn prepare_front_task(game: &mut Game) {
        let task = game.tasks().peek().cloned().expect("task");
        let depot = Point::new(0, 0);
        assert!(game.place_rover(depot));
        for supply in &task.supplies {
            for _ in 0..supply.count {
                game.current_room_mut()
                    .set(depot.into(), Some(Item::part(&supply.part)));
                assert!(game.pick_up());
            }
        }
        let target = game
            .current_room()
            .items()
            .find(|(_, item)| item.label() == task.broken_label())
            .map(|(location, _)| location)
            .expect("broken component");
        assert!(game.place_rover(target.into()));
    }

    #[test]
    fn test_every_alias_parses() {
        let cases = [
            (["u", "up"], Command::Up),
            (["d", "down"], Command::Down),
            (["l", "left"], Command::Left),
            (["r", "right"], Command::Right),
            (["p", "pick"], Command::PickUp),
            (["t", "task"], Command::PerformTask),
            (["w", "way"], Command::WayBack),
            (["i", "inventory"], Command::Inventory),
            (["m", "map"], Command::Map),
            (["s", "summary"], Command::Summary),
            (["q", "quit"], Command::Quit),
        ];
        for (aliases, expected) in cases {
            for alias in aliases {
                assert_eq!(alias.parse::<Command>().ok(), Some(expected), "{}", alias);
            }
        }
    }

    #[test]
    fn test_parse_trims_and_ignores_case() {
        assert_eq!("  UP \n".parse::<Command>().ok(), Some(Command::Up));
        assert_eq!("Inventory".parse::<Command>().ok(), Some(Command::Inventory));
    }

    #[test]
    fn test_unknown_command_is_error() {
        let err = "jump".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown command 'jump'");
    }

    #[test]
    fn test_parse_script_ignores_whitespace() {
        let commands = parse_script(" u d\tl\nr  p ").expect("valid script");
        assert_eq!(
            commands,
            vec![
                Command::Up,
                Command::Down,
                Command::Left,
                Command::Right,
                Command::PickUp
            ]
        );
        assert!(parse_script("").expect("empty script").is_empty());
    }

    #[test]
    fn test_parse_script_rejects_unknown_letter() {
        let err = parse_script("ux").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command 'x'");
    }

    #[test]
    fn test_unknown_line_is_skipped() {
        let mut game = Game::new_with_seed(5);
        assert!(game.place_rover(Point::new(3, 3)));
        game.current_room_mut().set(Location::new(3, 4), None);

        play_lines(&mut game, "bogus\n\nright\n".as_bytes(), false).expect("play");

        assert_eq!(game.rover_location(), Point::new(4, 3));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut game = Game::new_with_seed(5);
        assert!(game.place_rover(Point::new(3, 3)));
        game.current_room_mut().set(Location::new(3, 4), None);

        play_lines(&mut game, "quit\nright\n".as_bytes(), false).expect("play");

        assert_eq!(game.rover_location(), Point::new(3, 3));
    }

    #[test]
    fn test_play_stops_once_won() {
        let mut game = Game::new_with_seed(19);
        while game.tasks().len() > 1 {
            prepare_front_task(&mut game);
            assert!(apply(&mut game, Command::PerformTask, false));
        }

        prepare_front_task(&mut game);
        let final_cell = game.rover_location();
        game.current_room_mut()
            .set(Location::new(final_cell.y, final_cell.x - 1), None);

        play_lines(&mut game, "task\nleft\n".as_bytes(), false).expect("play");

        assert!(game.is_won());
        assert_eq!(game.rover_location(), final_cell);
    }
}
