//! Prompt/response loop for two players sharing one console.

use crate::config::SessionConfig;
use crate::input::parse_move;
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use sumline_tictactoe::{GameState, GameStatus, Mark, Player, attempt_move};
use tracing::{debug, info, instrument};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a win or draw.
    Finished(GameStatus),
    /// Input ran out before the game finished.
    InputClosed,
}

/// Results across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A console session reading moves from `input` and drawing to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    x: Player,
    o: Player,
    config: SessionConfig,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with players named from `config`.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            x: Player::new(config.player_x().clone(), Mark::X),
            o: Player::new(config.player_o().clone(), Mark::O),
            config,
            json: false,
        }
    }

    /// Also print each finished game as a JSON snapshot.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Plays games until one ends without a rematch, or input closes.
    #[instrument(skip(self), fields(player_x = %self.x.name(), player_o = %self.o.name()))]
    pub fn run(&mut self) -> Result<Tally> {
        let mut tally = Tally::default();

        if *self.config.show_instructions() {
            let text = render::instructions(self.x.name(), self.o.name());
            write!(self.output, "{text}").context("Failed to write instructions")?;
        }

        loop {
            match self.play_game()? {
                GameEnd::Finished(status) => tally.record(status),
                GameEnd::InputClosed => break,
            }
            if !*self.config.rematch() || !self.wants_rematch()? {
                break;
            }
        }

        if tally.games() > 1 {
            writeln!(
                self.output,
                "Final score: {} {} - {} {} ({} drawn)",
                self.x.name(),
                tally.x_wins,
                tally.o_wins,
                self.o.name(),
                tally.draws
            )
            .context("Failed to write score")?;
        }

        info!(?tally, "Session finished");
        Ok(tally)
    }

    /// Plays one game from an empty board.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameEnd> {
        let mut state = GameState::new();
        info!("Game started");
        self.draw(&state)?;

        loop {
            let player = match state.to_move() {
                Mark::X => self.x.clone(),
                Mark::O => self.o.clone(),
            };
            write!(self.output, "{}'s move (row col): ", player.name())
                .context("Failed to write prompt")?;
            self.output.flush().context("Failed to flush prompt")?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output).context("Failed to write output")?;
                info!("Input closed mid-game");
                return Ok(GameEnd::InputClosed);
            };

            let mv = match parse_move(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(self.output, "{e}").context("Failed to write output")?;
                    continue;
                }
            };

            match attempt_move(&mut state, &player, mv) {
                Ok(GameStatus::InProgress) => self.draw(&state)?,
                Ok(status) => {
                    self.announce(&state, status, &player)?;
                    return Ok(GameEnd::Finished(status));
                }
                Err(e) => {
                    writeln!(self.output, "{e}").context("Failed to write output")?;
                }
            }
        }
    }

    fn announce(&mut self, state: &GameState, status: GameStatus, mover: &Player) -> Result<()> {
        let written = match status {
            GameStatus::Won(_) => writeln!(self.output, "{} wins!", mover.name()),
            _ => writeln!(self.output, "It's a draw!"),
        };
        written.context("Failed to write result")?;
        self.draw(state)?;

        if self.json {
            let json = serde_json::to_string(&state.snapshot())
                .context("Failed to serialize snapshot")?;
            writeln!(self.output, "{json}").context("Failed to write snapshot")?;
        }
        info!(%status, moves = state.history().len(), "Game finished");
        Ok(())
    }

    fn draw(&mut self, state: &GameState) -> Result<()> {
        write!(self.output, "{}", render::board(state.board())).context("Failed to write board")
    }

    fn wants_rematch(&mut self) -> Result<bool> {
        write!(self.output, "Play again? (y/n): ").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        let answer = self.read_line()?;
        debug!(?answer, "Rematch answer");
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "Yes")
        ))
    }

    /// Next line of input, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
