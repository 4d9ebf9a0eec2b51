use anyhow::Context;
use minimax::MiniMaxAi;
use rand::Rng;
use std::io::{
    BufRead,
    Write,
};
use tic_tac_toe::{
    Board,
    Move,
    Outcome,
    Player,
};
use tracing::{
    debug,
    info,
};

/// A game of Tic-Tac-Toe between a person on a console and the engine.
///
/// X always moves first.
#[derive(Debug)]
pub struct ConsoleGame<I, O, R> {
    ai: MiniMaxAi,
    human: Player,
    chance_for_error: f64,

    input: I,
    output: O,
    rng: R,
}

impl<I, O, R> ConsoleGame<I, O, R>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    /// Make a new game.
    pub fn new(
        ai: MiniMaxAi,
        human: Player,
        chance_for_error: f64,
        input: I,
        output: O,
        rng: R,
    ) -> Self {
        Self {
            ai,
            human,
            chance_for_error,

            input,
            output,
            rng,
        }
    }

    /// Get the output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Play until the game ends.
    ///
    /// Returns `None` if the input ended before the game did.
    pub fn run(&mut self) -> anyhow::Result<Option<Outcome>> {
        info!(
            human = %self.human,
            chance_for_error = self.chance_for_error,
            "starting game"
        );

        writeln!(
            self.output,
            "Input the col and row number separated by a comma."
        )?;
        writeln!(
            self.output,
            "e.g., to tick the middle cell in the top row ?> 2, 1"
        )?;

        let mut board = Board::new();
        let mut turn = Player::X;
        loop {
            let (new_board, outcome) = if turn == self.human {
                writeln!(self.output, "{board}\n")?;
                match self.read_human_move(board)? {
                    Some(ret) => ret,
                    None => {
                        info!("input ended, quitting");
                        return Ok(None);
                    }
                }
            } else {
                let ret = self
                    .ai
                    .play(board, turn, self.chance_for_error, &mut self.rng)
                    .context("the engine failed to play")?;
                debug!(player = %turn, "engine played");
                ret
            };
            board = new_board;

            if let Some(outcome) = outcome {
                writeln!(self.output, "{board}\n")?;
                match outcome.winner() {
                    Some(player) => writeln!(self.output, "{player} is the winner!")?,
                    None => writeln!(self.output, "Tie!")?,
                }
                info!(%outcome, "game over");
                return Ok(Some(outcome));
            }

            turn = turn.opponent();
        }
    }

    /// Prompt until the person enters a legal move.
    fn read_human_move(&mut self, board: Board) -> anyhow::Result<Option<(Board, Option<Outcome>)>> {
        let mut line = String::new();
        loop {
            write!(self.output, "?> ")?;
            self.output.flush()?;

            line.clear();
            let n = self
                .input
                .read_line(&mut line)
                .context("failed to read move")?;
            if n == 0 {
                return Ok(None);
            }

            match parse_move(&line).map(|mv| board.play(self.human, mv)) {
                Some(Ok(ret)) => return Ok(Some(ret)),
                Some(Err(error)) => {
                    debug!("{error:?}");
                    writeln!(self.output, "This is an illegal move!")?;
                }
                None => {
                    writeln!(self.output, "This is an illegal move!")?;
                }
            }
        }
    }
}

/// Parse a 1-based "col, row" pair.
///
/// Whitespace is ignored.
pub fn parse_move(line: &str) -> Option<Move> {
    let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let (column, row) = line.split_once(',')?;
    let column = column.parse::<u8>().ok()?.checked_sub(1)?;
    let row = row.parse::<u8>().ok()?.checked_sub(1)?;

    Some(Move::new(column, row))
}
