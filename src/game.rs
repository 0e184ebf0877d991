//! Console game loop: show the card, ask for a field, mark it, repeat until
//! a row, column or diagonal is complete.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::{Grid, GridError};
use crate::input::Prompter;
use crate::term::{CardView, ConsoleRenderer};
use crate::types::PlayCommand;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The card is complete; `marked` cells were marked at the end.
    Bingo { marked: usize },
    /// The player typed quit.
    Quit,
    /// Input ended before a bingo.
    InputClosed,
}

/// Options for [`run_game`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// Clear the screen before each redraw
    pub clear_screen: bool,
    /// Draw box glyphs as ASCII
    pub ascii: bool,
}

pub fn run_game<In: BufRead, Out: Write>(
    grid: &mut Grid,
    prompter: &mut Prompter<In, Out>,
    options: GameOptions,
) -> Result<GameOutcome> {
    let view = CardView::output().with_ascii(options.ascii);
    let size = grid.size();
    let range_hint = format!("Please select values between 1 and {}", size);

    loop {
        let card = view.render(grid)?;
        let status = format!("{} of {} marked", grid.marked_count(), size * size);
        ConsoleRenderer::new(prompter.output())
            .with_clear(options.clear_screen)
            .draw_card(&card, &status)?;

        if grid.is_complete() {
            ConsoleRenderer::new(prompter.output()).announce("Bingo!")?;
            return Ok(GameOutcome::Bingo {
                marked: grid.marked_count(),
            });
        }

        let command = prompter.ask_until(
            "Select the field to mark off as `X Y` (q to quit): ",
            &range_hint,
            PlayCommand::from_str,
        )?;
        match command {
            None => return Ok(GameOutcome::InputClosed),
            Some(PlayCommand::Quit) => return Ok(GameOutcome::Quit),
            Some(PlayCommand::Mark { x, y }) => match grid.mark_cell(x, y) {
                Ok(()) => debug!(x, y, "marked cell"),
                Err(GridError::IndexOutOfRange { .. }) => {
                    ConsoleRenderer::new(prompter.output()).warn(&range_hint)?;
                }
                Err(e) => return Err(e.into()),
            },
        }
    }
}
