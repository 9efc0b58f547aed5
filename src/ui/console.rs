//! Line-oriented front end: prints the board, reads 1-based column numbers.
//!
//! Generic over its reader and writer so it can run against stdin/stdout or
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::game::{GameEngine, GameStatus};

/// Play `engine` to completion, or until input ends or the player types `q`.
///
/// Returns the game's status when the loop stopped.
pub fn play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    mut output: W,
) -> io::Result<GameStatus> {
    let width = engine.board().width();
    let mut line = String::new();

    while !engine.is_terminal() {
        writeln!(output, "{}\n", engine.board())?;
        write!(
            output,
            "{}, choose a column (1-{width}, q to quit): ",
            engine.active_player()
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            break;
        }

        let column = match answer.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                writeln!(output, "Pick a column between 1 and {width}")?;
                continue;
            }
        };

        match engine.drop_piece(column) {
            Ok(placement) => {
                if let Some(msg) = super::outcome_message(placement.outcome) {
                    writeln!(output, "{}\n", engine.board())?;
                    writeln!(output, "{msg}")?;
                }
            }
            Err(err) => writeln!(output, "{}", super::rejection_message(&err))?,
        }
    }

    Ok(engine.status())
}
