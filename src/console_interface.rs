use crate::core::{Direction, Grid};
use crate::session::{Screen, Session, SessionCommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Instant;

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &Session,
    now: Instant,
    error: Option<&str>,
) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let (title, body, footer) = screen_text(session, now);
        let footer = if let Some(err) = error {
            format!("{} | Error: {}", footer, err)
        } else {
            footer
        };

        let body_paragraph = Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(body_paragraph, chunks[0]);

        let footer_paragraph = Paragraph::new(footer)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(footer_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Title, body and footer text for the current screen.
pub fn screen_text(session: &Session, now: Instant) -> (String, String, String) {
    match session.screen() {
        Screen::Menu => (
            "Sokoban".into(),
            [
                "SOKOBAN",
                "",
                "Use arrow keys or WASD to move the player",
                "Use U to undo the step",
                "Use R to return to the original state",
            ]
            .join("\n"),
            "Press SPACE to start | Q to quit".into(),
        ),
        Screen::Level(active) => {
            let level = active.puzzle.level_id() + 1;
            let elapsed = session.elapsed(now).as_secs();
            (
                format!("Level {} / {}", level, session.level_count()),
                render_grid_to_string(active.puzzle.grid()),
                format!(
                    "Steps: {} | Time: {}:{:02} | Arrows/WASD move, U undo, R reset, Q quit",
                    active.puzzle.steps(),
                    elapsed / 60,
                    elapsed % 60
                ),
            )
        }
        Screen::Completed(report) => (
            "Level finished".into(),
            format!(
                "CONGRATULATIONS!\n\nLEVEL {} FINISHED!\n\nTime: {}\nNumber of steps: {}",
                report.level_id + 1,
                report.clock_text(),
                report.steps
            ),
            "Press SPACE to continue | Q to quit".into(),
        ),
        Screen::GameCompleted => (
            "Game finished".into(),
            "CONGRATULATIONS!\n\nGAME FINISHED!".into(),
            "Press SPACE to restart | Q to quit".into(),
        ),
    }
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    grid.to_text()
}

pub enum ConsoleInput {
    Command(SessionCommand),
    Quit,
    Timeout,
    Unknown,
}

pub fn map_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::Command(SessionCommand::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::Command(SessionCommand::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::Command(SessionCommand::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::Command(SessionCommand::Move(Direction::Right))
        }
        KeyCode::Char('u') | KeyCode::Char('U') => ConsoleInput::Command(SessionCommand::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Command(SessionCommand::Reset),
        KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::Command(SessionCommand::Confirm),
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> io::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(map_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
