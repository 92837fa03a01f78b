//! Console front-end for the 4x4 tic-tac-toe engine
//!
//! Thin I/O glue around `tictac_engine`: renders the board, reads and
//! validates human coordinates (re-prompting on bad input before
//! anything reaches the engine), and asks the engine for the machine's
//! replies. All game logic lives in the engine crate.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tictac_engine::{
    apply_move, game_state, new_game, reply, reset_game, Board, Game, GameState, Move, Player,
};
use tracing::{debug, info};

const BOARD_SIZE: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "tictac4", about = "4x4 tic-tac-toe against a minimax opponent")]
struct Args {
    /// Let the machine open the game instead of the human
    #[arg(long)]
    machine_first: bool,
}

fn render(board: &Board) {
    println!("\n   0   1   2   3");
    println!("  ---------------");
    for row in 0..BOARD_SIZE {
        print!("{} |", row);
        for col in 0..BOARD_SIZE {
            print!(" {} |", board.get(row, col).glyph());
        }
        println!();
        println!("  ---------------");
    }
    println!();
}

/// Prompt until a number in [0, 4) is entered.
fn read_coordinate(stdin: &mut impl BufRead, prompt: &str) -> Result<usize> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }

        match line.trim().parse::<usize>() {
            Ok(n) if n < BOARD_SIZE => return Ok(n),
            Ok(_) => println!("Coordinates must be between 0 and 3."),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Read a human move, re-prompting until it targets an empty cell.
fn read_human_move(stdin: &mut impl BufRead, board: &Board) -> Result<Move> {
    loop {
        println!("Your turn (X)");
        let row = read_coordinate(stdin, "Row (0-3): ")?;
        let col = read_coordinate(stdin, "Col (0-3): ")?;

        if !board.is_empty(row, col) {
            println!("That cell is already taken. Try another.");
            continue;
        }
        return Ok(Move::new(row, col));
    }
}

fn ask_play_again(stdin: &mut impl BufRead) -> Result<bool> {
    print!("Play again? (y/n): ");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn play_one_game(stdin: &mut impl BufRead, game: &mut Game) -> Result<()> {
    loop {
        render(&game.board);

        match game_state(game) {
            GameState::MachineWin => {
                println!("The machine wins.");
                return Ok(());
            }
            GameState::HumanWin => {
                println!("You win!");
                return Ok(());
            }
            GameState::Draw => {
                println!("It's a draw.");
                return Ok(());
            }
            GameState::InProgress => {}
        }

        if game.turn == Player::Human {
            let mv = read_human_move(stdin, &game.board)?;
            apply_move(game, mv)?;
        } else {
            println!("Machine is thinking...");
            let (mv, stats) = reply(game)?;
            debug!(nodes = stats.nodes, cuts = stats.cuts, "search finished");
            info!(row = mv.row, col = mv.col, "machine plays");
            println!("Machine plays ({}, {})", mv.row, mv.col);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let first = if args.machine_first {
        Player::Machine
    } else {
        Player::Human
    };

    println!("=== 4x4 Tic-Tac-Toe ===");
    println!("You are X, the machine is O.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = new_game(first);

    loop {
        play_one_game(&mut input, &mut game)?;
        if !ask_play_again(&mut input)? {
            break;
        }
        reset_game(&mut game, first);
    }

    println!("Thanks for playing.");
    Ok(())
}
