//! Interactive session: owns one engine and drives it from line commands.

use crate::command::{Command, HELP};
use crate::config::{HostConfig, OutputFormat};
use crate::render::{render_history, render_json, render_text};
use rewind_engine::{EngineError, GameEngine, GameState};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument, warn};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Text produced by one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Lines to print, in order.
    pub lines: Vec<String>,
    /// Whether to keep going.
    pub flow: Flow,
}

impl Reply {
    fn text(lines: Vec<String>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }
}

/// A single player's game session.
///
/// The engine stays synchronous; the session only records when a finished
/// game should reset, and the caller's loop decides when that moment has
/// come.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    output: OutputFormat,
    auto_reset: Option<Duration>,
    reset_at: Option<Instant>,
}

impl Session {
    /// Creates a session with a fresh engine.
    #[instrument(skip(config))]
    pub fn new(config: &HostConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            output: *config.output(),
            auto_reset: config.auto_reset_delay(),
            reset_at: None,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// When a pending auto-reset is due, if one is scheduled.
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Renders a state in the configured output format.
    pub fn render(&self, state: &GameState) -> String {
        match self.output {
            OutputFormat::Text => render_text(state),
            OutputFormat::Json => render_json(state).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to serialize state");
                format!("{{\"error\":\"{e}\"}}")
            }),
        }
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Reply {
        let reply = match command {
            Command::Play(cell) => self.engine_reply(|e| e.apply_move(cell)),
            Command::Jump(index) => self.engine_reply(|e| e.jump_to(index)),
            Command::Reset => {
                let state = self.engine.reset_game();
                Reply::text(vec!["New game.".to_string(), self.render(&state)])
            }
            Command::History => Reply::text(vec![render_history(&self.engine)]),
            Command::Show => Reply::text(vec![self.render(&self.engine.state())]),
            Command::Help => Reply::text(vec![HELP.to_string()]),
            Command::Quit => Reply {
                lines: Vec::new(),
                flow: Flow::Quit,
            },
        };
        self.schedule_reset();
        reply
    }

    /// Resets a finished game once its deadline has passed.
    ///
    /// Returns `None` when no reset is pending.
    #[instrument(skip(self))]
    pub fn fire_auto_reset(&mut self) -> Option<Reply> {
        self.reset_at.take()?;
        info!("Auto-resetting finished game");
        let state = self.engine.reset_game();
        Some(Reply::text(vec![
            "Game over, starting a new game.".to_string(),
            self.render(&state),
        ]))
    }

    /// Applies a move sequence, stopping at the first illegal move.
    ///
    /// # Errors
    ///
    /// Returns the move's position in `cells` with the engine's error.
    #[instrument(skip(self))]
    pub fn replay(&mut self, cells: &[usize]) -> Result<GameState, (usize, EngineError)> {
        let mut state = self.engine.state();
        for (n, &cell) in cells.iter().enumerate() {
            state = self.engine.apply_move(cell).map_err(|e| (n, e))?;
        }
        Ok(state)
    }

    fn engine_reply(
        &mut self,
        op: impl FnOnce(&mut GameEngine) -> Result<GameState, EngineError>,
    ) -> Reply {
        match op(&mut self.engine) {
            Ok(state) => Reply::text(vec![self.render(&state)]),
            Err(e) => {
                debug!(error = %e, "Command rejected");
                Reply::text(vec![e.to_string()])
            }
        }
    }

    /// Arms the reset timer when the viewed board turns terminal and disarms
    /// it when it stops being terminal. An armed deadline is never pushed back.
    fn schedule_reset(&mut self) {
        let terminal = self.engine.state().status().is_terminal();
        match (terminal, self.auto_reset, self.reset_at) {
            (true, Some(delay), None) => {
                debug!(delay_ms = delay.as_millis() as u64, "Scheduling auto-reset");
                self.reset_at = Some(Instant::now() + delay);
            }
            (false, _, Some(_)) => {
                debug!("Cancelling auto-reset");
                self.reset_at = None;
            }
            _ => {}
        }
    }
}

async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn write_reply<W>(output: &mut W, reply: &Reply) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in &reply.lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Input lines and the auto-reset deadline are raced on one task, so the
/// engine is never shared.
#[instrument(skip_all)]
pub async fn run<R, W>(session: &mut Session, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let greeting = Reply::text(vec![
        "Tic-tac-toe. Type 'help' for commands.".to_string(),
        session.render(&session.engine().state()),
    ]);
    write_reply(output, &greeting).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let reply = match line.parse::<Command>() {
                    Ok(command) => session.handle(command),
                    Err(e) => Reply::text(vec![e.to_string()]),
                };
                write_reply(output, &reply).await?;
                if reply.flow == Flow::Quit {
                    break;
                }
            }
            _ = until(session.reset_deadline()) => {
                if let Some(reply) = session.fire_auto_reset() {
                    write_reply(output, &reply).await?;
                }
            }
        }
    }
    Ok(())
}
