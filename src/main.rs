mod command;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use command::{apply, parse_script, play_lines};
use lost_rovers::game::Game;

#[derive(Parser)]
#[command(name = "lost_rovers")]
#[command(about = "Explore linked rooms, collect parts and repair the ship")]
struct Cli {
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Run a string of single-letter commands (u/d/l/r/p/t/w/i/m/s/q) and exit
    #[arg(long)]
    script: Option<String>,

    /// Draw the current room after every command
    #[arg(long)]
    show_map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,lost_rovers=info"),
    )
    .init();

    let cli = Cli::parse();

    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(seed),
        None => Game::new(),
    };

    match &cli.script {
        Some(script) => run_script(&mut game, script, cli.show_map)?,
        None => run_interactive(&mut game, cli.show_map)?,
    }

    println!("=== Final State ===");
    game.print_summary();
    Ok(())
}

/// Run a fixed command script in headless mode
fn run_script(game: &mut Game, script: &str, show_map: bool) -> Result<()> {
    let commands = parse_script(script).context("Invalid command script")?;
    info!("Running {} scripted commands", commands.len());

    for command in commands {
        if !apply(game, command, show_map) {
            break;
        }
    }
    Ok(())
}

/// Read commands from stdin until quit, win or end of input
fn run_interactive(game: &mut Game, show_map: bool) -> Result<()> {
    println!("Commands: up/down/left/right, pick, task, way, inventory, map, summary, quit");
    println!("{}", game.draw_map());
    print!("{}", game.current_task_description());

    play_lines(game, io::stdin().lock(), show_map)
}
