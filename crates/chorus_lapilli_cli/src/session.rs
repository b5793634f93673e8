//! Prompt loop: reads commands, drives the engine, renders the result.

use crate::command::{Command, HELP};
use anyhow::{Context, Result};
use chorus_lapilli::{ActionOutcome, GameEngine};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Renders the current board as a grid followed by the status line.
///
/// Empty cells show their index; the selected piece is bracketed.
pub fn render(engine: &GameEngine) -> String {
    let board = engine.current_board();
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = board.cells()[index]
                    .player()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| index.to_string());
                if engine.highlight(index) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out.push_str(&engine.status());
    out.push('\n');
    out
}

fn render_history(engine: &GameEngine) -> String {
    engine
        .history_labels()
        .into_iter()
        .enumerate()
        .map(|(step, label)| {
            let marker = if step == engine.current_step() { '>' } else { ' ' };
            format!("{} {}. {}\n", marker, step, label)
        })
        .collect()
}

fn render_moves(engine: &GameEngine) -> String {
    let moves = engine.legal_moves();
    if moves.is_empty() {
        return "No moves available\n".to_string();
    }
    moves.iter().map(|m| format!("  {}\n", m)).collect()
}

fn describe(outcome: ActionOutcome) -> Option<&'static str> {
    match outcome {
        ActionOutcome::Ignored => Some("Nothing happens."),
        ActionOutcome::Selected(_) => Some("Piece selected; choose an adjacent empty cell."),
        _ => None,
    }
}

/// Runs the prompt loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run(engine: &mut GameEngine, input: impl BufRead, mut output: impl Write) -> Result<()> {
    write!(output, "{}", render(engine)).context("Failed to write board")?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{} (type 'help' for commands)", e)?;
                continue;
            }
        };
        debug!(?command, "Command parsed");

        let text = match command {
            Command::Quit => break,
            Command::Help => format!("{}\n", HELP),
            Command::History => render_history(engine),
            Command::Moves => render_moves(engine),
            Command::Board => render(engine),
            Command::Select(index) => match engine.select_cell(index) {
                Ok(outcome) => match describe(outcome) {
                    Some(note) => format!("{}\n{}", note, render(engine)),
                    None => render(engine),
                },
                Err(e) => format!("Error: {}\n", e),
            },
            Command::Jump(step) => match engine.jump_to(step) {
                Ok(()) => render(engine),
                Err(e) => format!("Error: {}\n", e),
            },
        };
        write!(output, "{}", text).context("Failed to write output")?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}
