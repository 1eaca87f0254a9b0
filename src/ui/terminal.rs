//! Terminal implementation of the primary and reminder windows

use std::{
    io::{self, Stdout, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use super::{
    layout::{alert_area, window_area, ALERT_PADDING_X, ALERT_PADDING_Y},
    CountdownView, Frontend, ALERT_TITLE, WINDOW_TITLE,
};

/// Backend that can switch between the alternate screen and the normal one
pub trait ScreenBackend: Backend {
    fn enter_screen(&mut self) -> io::Result<()>;
    fn leave_screen(&mut self) -> io::Result<()>;
}

impl<W: Write> ScreenBackend for CrosstermBackend<W> {
    fn enter_screen(&mut self) -> io::Result<()> {
        execute!(self, EnterAlternateScreen)
    }

    fn leave_screen(&mut self) -> io::Result<()> {
        execute!(self, LeaveAlternateScreen)
    }
}

/// Runs `restore` on drop unless disarmed
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn disarm(mut self) {
        self.restore = None;
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Best effort terminal restore for a failed setup
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Countdown window and reminder popup drawn on the terminal
pub struct TerminalFrontend<B: ScreenBackend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    view: CountdownView,
    visible: Arc<AtomicBool>,
    alert: Option<String>,
    on_screen: bool,
    raw_mode: bool,
    closed: bool,
}

impl TerminalFrontend<CrosstermBackend<Stdout>> {
    /// Take over the terminal and show the primary window
    pub fn new(view: CountdownView) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = RestoreGuard::new(restore_terminal);

        execute!(io::stdout(), SetTitle(WINDOW_TITLE), Hide)?;
        let mut frontend = Self::with_backend(CrosstermBackend::new(io::stdout()), view)?;
        frontend.raw_mode = true;

        guard.disarm();
        Ok(frontend)
    }
}

impl<B: ScreenBackend> TerminalFrontend<B> {
    /// Show the primary window on `backend`; raw mode is left to the caller
    pub fn with_backend(backend: B, view: CountdownView) -> io::Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let mut frontend = Self {
            terminal,
            view,
            visible: Arc::new(AtomicBool::new(true)),
            alert: None,
            on_screen: false,
            raw_mode: false,
            closed: false,
        };
        frontend.draw()?;
        Ok(frontend)
    }

    /// Shared flag the key reader consults to know which keys apply
    pub fn visibility(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.visible)
    }

    /// Check if the alternate screen is in use
    pub fn on_alternate_screen(&self) -> bool {
        self.on_screen
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        if !self.on_screen {
            self.terminal.backend_mut().enter_screen()?;
            self.terminal.clear()?;
            self.on_screen = true;
        }
        Ok(())
    }

    fn leave_screen(&mut self) -> io::Result<()> {
        if self.on_screen {
            self.terminal.backend_mut().leave_screen()?;
            self.on_screen = false;
        }
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }

        let window_visible = self.visible.load(Ordering::Relaxed);
        if !window_visible && self.alert.is_none() {
            return self.leave_screen();
        }

        self.enter_screen()?;
        let view = self.view;
        let alert = self.alert.as_deref();
        self.terminal.draw(|frame| {
            let screen = frame.area();
            if window_visible {
                render_window(frame, window_area(screen), &view);
            }
            if let Some(message) = alert {
                render_alert(frame, alert_area(screen, message), message);
            }
        })?;
        Ok(())
    }
}

impl<B: ScreenBackend> Frontend for TerminalFrontend<B> {
    fn update_countdown(&mut self, view: CountdownView) -> io::Result<()> {
        self.view = view;
        self.draw()
    }

    fn hide_window(&mut self) -> io::Result<()> {
        self.visible.store(false, Ordering::Relaxed);
        self.draw()
    }

    fn show_window(&mut self) -> io::Result<()> {
        self.visible.store(true, Ordering::Relaxed);
        self.draw()
    }

    fn window_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    fn open_alert(&mut self, message: &str) -> io::Result<()> {
        self.alert = Some(message.to_string());
        self.draw()
    }

    fn alert_open(&self) -> bool {
        self.alert.is_some()
    }

    fn close_alert(&mut self) -> io::Result<()> {
        self.alert = None;
        self.draw()
    }

    fn redraw(&mut self) -> io::Result<()> {
        if self.on_screen {
            self.terminal.autoresize()?;
        }
        self.draw()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.alert = None;
        self.visible.store(false, Ordering::Relaxed);

        debug!("Restoring terminal");
        self.leave_screen()?;
        self.terminal.show_cursor()?;
        if self.raw_mode {
            disable_raw_mode()?;
            self.raw_mode = false;
        }
        Ok(())
    }
}

impl<B: ScreenBackend> Drop for TerminalFrontend<B> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Draw the countdown window: gauge, status line and controls
fn render_window(frame: &mut Frame, area: Rect, view: &CountdownView) {
    let block = Block::default()
        .title(format!(" {} ", WINDOW_TITLE))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(view.ratio())
        .label(Span::styled(
            view.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, rows[1]);

    let status = if view.running { "Running" } else { "Stopped" };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        rows[2],
    );

    let controls = Line::from(vec![
        control("S", "Start", Color::Green),
        Span::raw("  "),
        control("R", "Reset", Color::Yellow),
        Span::raw("  "),
        control("H", "Hide", Color::Cyan),
        Span::raw("  "),
        control("Q", "Quit", Color::Red),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        rows[4],
    );
}

fn control(key: &'static str, label: &'static str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}] {}", key, label),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Draw the reminder popup above everything else
fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", ALERT_TITLE))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .padding(Padding::new(
            ALERT_PADDING_X,
            ALERT_PADDING_X,
            ALERT_PADDING_Y,
            ALERT_PADDING_Y,
        ));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
