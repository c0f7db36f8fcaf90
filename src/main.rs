//! Console adapter for the battle core. Prompts, menus and status printing
//! only; all rules live in the library.

use crossterm::style::Stylize;
use rand::Rng;
use std::io::{self, BufRead, Write};

use warband::constants::*;
use warband::game::{Game, MatchStatus};

fn main() -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut game = Game::new(INITIAL_BUDGET, INITIAL_BUDGET);

    println!("{}", "Welcome to Warband!".bold());
    println!("\nAssemble your army:");
    shopping_phase(&mut game, &mut rng)?;

    for line in game.recruit_ai(&mut rng) {
        println!("The enemy recruits a {}", line);
    }

    loop {
        println!("\n{}", format!("===== ROUND {} =====", game.round + 1).bold());
        let report = game.play_round(&mut rng);
        for event in &report.events {
            println!("{}", event);
        }

        print_army_status(&game);

        match report.status {
            MatchStatus::Ongoing => {
                println!(
                    "\n{}",
                    format!("Both sides survive: +{} coins", ROUND_REWARD).green()
                );
                println!("\n--- Reinforcement phase ---");
                shopping_phase(&mut game, &mut rng)?;
                for line in game.recruit_ai(&mut rng) {
                    println!("The enemy recruits a {}", line);
                }
            }
            MatchStatus::PlayerWon | MatchStatus::AiWon => break,
        }
    }

    println!("\n{}", "===== BATTLE OVER =====".bold());
    if let Some(summary) = game.winner_summary() {
        let styled = match game.status {
            MatchStatus::PlayerWon => summary.green(),
            _ => summary.red(),
        };
        println!("{}", styled);
    }
    Ok(())
}

/// Interactive purchasing loop. Re-prompts on invalid kinds and on
/// insufficient funds; the core never partially charges.
fn shopping_phase(game: &mut Game, rng: &mut impl Rng) -> io::Result<()> {
    loop {
        println!(
            "\nBudget: {}",
            format!("{} coins", game.player_budget).yellow()
        );
        println!("1. Knight ({})", KNIGHT_COST);
        println!("2. Archer ({})", ARCHER_COST);
        println!("3. Healer ({})", HEALER_COST);
        println!("4. Mage ({})", MAGE_COST);
        println!("5. Done");

        let choice = prompt("Choose a unit kind: ")?;
        if choice.trim() == "5" {
            return Ok(());
        }

        let name = prompt("Name the recruit: ")?;
        match game.player_purchase(name.trim(), choice.trim(), rng) {
            Ok(()) => println!("{}", format!("{} joins your army", name.trim()).green()),
            Err(err) => println!("{}", format!("{}. Try again.", err).red()),
        }
    }
}

fn print_army_status(game: &Game) {
    println!("\n{}", "Your army:".cyan());
    for line in game.player.status_lines() {
        println!(" - {}", line);
    }
    println!("{}", "Enemy army:".cyan());
    for line in game.ai.status_lines() {
        println!(" - {}", line);
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line)
}
