//! Session controller: sequences menu, level play, completion reports and the
//! end-of-game screen as a tagged state machine.
//!
//! Transitions:
//! `Menu -> Level(0) -> Completed(n) -> Level(n + 1) | GameCompleted -> Level(0)`

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::core::{Cell, Direction, Grid, PuzzleState, UserAction, Vec2};
use crate::error::SessionError;
use crate::level_loader::LevelLoader;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionCommand {
    Move(Direction),
    Undo,
    Reset,
    Confirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    pub level_id: usize,
    pub elapsed: Duration,
    pub steps: u32,
}

impl CompletionReport {
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Elapsed time as `m:ss`.
    pub fn clock_text(&self) -> String {
        let secs = self.elapsed_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

pub struct ActiveLevel {
    pub puzzle: PuzzleState,
    pub started_at: Instant,
}

pub enum Screen {
    Menu,
    Level(ActiveLevel),
    Completed(CompletionReport),
    GameCompleted,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu => ScreenKind::Menu,
            Screen::Level(_) => ScreenKind::Level,
            Screen::Completed(_) => ScreenKind::Completed,
            Screen::GameCompleted => ScreenKind::GameCompleted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Menu,
    Level,
    Completed,
    GameCompleted,
}

/// Read-only snapshot of everything a renderer needs for one frame.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub screen: ScreenKind,
    pub level_index: Option<usize>,
    pub level_count: usize,
    pub steps: u32,
    pub elapsed_secs: u64,
    pub complete: bool,
    pub rows: Vec<String>,
    pub report: Option<CompletionReport>,
}

pub struct Session {
    config: GameConfig,
    loader: LevelLoader,
    screen: Screen,
}

impl Session {
    pub fn new(config: &GameConfig, loader: LevelLoader) -> Self {
        Session {
            config: config.clone(),
            loader,
            screen: Screen::Menu,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn level_count(&self) -> usize {
        self.config.level_count
    }

    pub fn handle(&mut self, command: SessionCommand, now: Instant) -> Result<(), SessionError> {
        match (&mut self.screen, command) {
            (Screen::Menu, SessionCommand::Confirm) => self.start_level(0, now),
            (Screen::Level(active), SessionCommand::Move(direction)) => {
                active.puzzle.apply(UserAction::Move(direction))?;
                Ok(())
            }
            (Screen::Level(active), SessionCommand::Undo) => {
                active.puzzle.apply(UserAction::Undo)?;
                Ok(())
            }
            (Screen::Level(active), SessionCommand::Reset) => {
                active.puzzle.apply(UserAction::Reset)?;
                Ok(())
            }
            (Screen::Completed(report), SessionCommand::Confirm) => {
                let next = report.level_id + 1;
                if next >= self.config.level_count {
                    info!("all levels completed");
                    self.screen = Screen::GameCompleted;
                    Ok(())
                } else {
                    self.start_level(next, now)
                }
            }
            (Screen::GameCompleted, SessionCommand::Confirm) => self.start_level(0, now),
            _ => Ok(()),
        }
    }

    /// Per-frame completion check. The first frame that sees a finished level stops
    /// its timer and moves to the completion report.
    pub fn tick(&mut self, now: Instant) {
        let Screen::Level(active) = &self.screen else {
            return;
        };
        if !active.puzzle.is_complete() {
            return;
        }
        let report = CompletionReport {
            level_id: active.puzzle.level_id(),
            elapsed: now.saturating_duration_since(active.started_at),
            steps: active.puzzle.steps(),
        };
        info!(
            level = report.level_id,
            steps = report.steps,
            secs = report.elapsed_secs(),
            "level completed"
        );
        self.screen = Screen::Completed(report);
    }

    fn start_level(&mut self, level_id: usize, now: Instant) -> Result<(), SessionError> {
        let grid = self.loader.load(level_id).inspect_err(|err| {
            warn!(level = level_id, %err, "could not start level");
        })?;
        self.screen = Screen::Level(ActiveLevel {
            puzzle: PuzzleState::new(level_id, grid),
            started_at: now,
        });
        Ok(())
    }

    fn active(&self) -> Option<&ActiveLevel> {
        match &self.screen {
            Screen::Level(active) => Some(active),
            _ => None,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.active().map(|a| a.puzzle.grid())
    }

    pub fn cell(&self, pos: Vec2) -> Option<Cell> {
        self.grid().and_then(|g| g.get(pos))
    }

    pub fn is_complete(&self) -> bool {
        match &self.screen {
            Screen::Level(active) => active.puzzle.is_complete(),
            Screen::Completed(_) | Screen::GameCompleted => true,
            Screen::Menu => false,
        }
    }

    pub fn steps(&self) -> u32 {
        match &self.screen {
            Screen::Level(active) => active.puzzle.steps(),
            Screen::Completed(report) => report.steps,
            _ => 0,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match &self.screen {
            Screen::Level(active) => now.saturating_duration_since(active.started_at),
            Screen::Completed(report) => report.elapsed,
            _ => Duration::ZERO,
        }
    }

    pub fn level_index(&self) -> Option<usize> {
        match &self.screen {
            Screen::Level(active) => Some(active.puzzle.level_id()),
            Screen::Completed(report) => Some(report.level_id),
            _ => None,
        }
    }

    pub fn view(&self, now: Instant) -> SessionView {
        let rows: Vec<String> = self
            .grid()
            .map(|g| g.rows().map(|r| r.iter().map(|c| c.to_char()).collect::<String>()).collect())
            .unwrap_or_default();
        SessionView {
            screen: self.screen.kind(),
            level_index: self.level_index(),
            level_count: self.level_count(),
            steps: self.steps(),
            elapsed_secs: self.elapsed(now).as_secs(),
            complete: self.is_complete(),
            rows,
            report: match &self.screen {
                Screen::Completed(report) => Some(*report),
                _ => None,
            },
        }
    }
}
