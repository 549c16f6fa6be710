//! Text game loop
//!
//! Plays one game over any line-oriented reader/writer pair, so the same
//! loop drives stdin/stdout and scripted tests.

use std::io::{self, BufRead, Write};

use crate::board::{GameState, Move, Pile, Player};
use crate::config::MatchConfig;
use crate::engine::AIEngine;
use crate::error::{Error, Result};
use crate::rules::{validate_move, winner, WinMode};

/// Play a full game and return the winner.
///
/// Illegal or unparseable human input is reported and re-prompted; running
/// out of input is an [`Error::Io`].
pub fn run<R: BufRead, W: Write>(config: &MatchConfig, mut input: R, mut output: W) -> Result<Player> {
    let mut engine = AIEngine::with_config(i32::from(config.depth), config.mode)?;
    let mut state = config.initial;
    let mut current = config.first_player;

    writeln!(output, "Red-Blue Nim ({} rules, depth {})", config.mode, config.depth)?;

    loop {
        writeln!(output)?;
        writeln!(output, "Red marbles: {}, Blue marbles: {}", state.red, state.blue)?;

        let mv = match current {
            Player::Human => read_human_move(&mut input, &mut output, &state)?,
            Player::Computer => {
                writeln!(output, "Computer is thinking...")?;
                let result = engine.get_move_with_stats(&state);
                let mv = result
                    .best_move
                    .ok_or_else(|| Error::invalid_argument("no marbles left to take"))?;
                writeln!(output, "Computer takes {} from the {} pile.", mv.count, mv.pile)?;
                writeln!(
                    output,
                    "  (score {}, {} nodes, {}ms)",
                    result.score, result.nodes, result.time_ms
                )?;
                mv
            }
        };

        state = state.apply(mv)?;

        if state.is_terminal() {
            let winner = winner(current, config.mode);
            announce(&mut output, winner, config.mode)?;
            return Ok(winner);
        }

        current = current.opponent();
    }
}

fn read_human_move<R: BufRead, W: Write>(input: &mut R, output: &mut W, state: &GameState) -> Result<Move> {
    loop {
        let line = prompt(input, output, "Which pile? (red/blue): ")?;
        let pile = match line.parse::<Pile>() {
            Ok(pile) => pile,
            Err(_) => {
                writeln!(output, "Invalid choice. Try again.")?;
                continue;
            }
        };

        let line = prompt(input, output, &format!("How many marbles do you want to take from {pile}? "))?;
        let count = match line.trim().parse::<u32>() {
            Ok(count) => count,
            Err(_) => {
                writeln!(output, "Please enter a valid number.")?;
                continue;
            }
        };

        let mv = Move::new(pile, count);
        match validate_move(state, mv) {
            Ok(()) => return Ok(mv),
            Err(err) => writeln!(output, "{err}. Try again.")?,
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed mid-game").into());
    }
    Ok(line.trim().to_string())
}

fn announce<W: Write>(output: &mut W, winner: Player, mode: WinMode) -> Result<()> {
    writeln!(output)?;
    match (winner, mode) {
        (Player::Human, WinMode::Standard) => writeln!(output, "Game over! You win!")?,
        (Player::Computer, WinMode::Standard) => writeln!(output, "Game over! The computer wins.")?,
        (Player::Human, WinMode::Misere) => {
            writeln!(output, "Game over! The computer took the last marble. You win in misère mode!")?
        }
        (Player::Computer, WinMode::Misere) => {
            writeln!(output, "Game over! You took the last marble. The computer wins in misère mode.")?
        }
    }
    Ok(())
}
