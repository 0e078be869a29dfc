use super::{Frame, RenderError, Stage, StyledChar};
use crate::style::Color;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub(crate) struct TerminalOptions {
    /// The element whose iterations are counted.
    pub(crate) target: String,
    pub(crate) fps: u16,
    pub(crate) background: Option<Color>,
    /// Stop once this many iterations completed.
    pub(crate) max_iterations: Option<u64>,
    pub(crate) show_status: bool,
}

/// Puts the terminal in raw mode on an alternate screen and restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn new(stdout: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // restores raw mode on drop if entering the alternate screen fails
        let guard = Self;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Plays a stage in the terminal until the user quits or the iteration limit is reached.
pub(crate) struct TerminalRunner {
    stdout: Stdout,
    options: TerminalOptions,
}

impl TerminalRunner {
    pub(crate) fn new(options: TerminalOptions) -> Self {
        Self { stdout: io::stdout(), options }
    }

    pub(crate) fn run(&mut self, stage: &mut Stage) -> Result<(), RenderError> {
        let _guard = TerminalGuard::new(&mut self.stdout)?;
        let frame_time = Duration::from_secs(1) / u32::from(self.options.fps.max(1));
        info!(fps = self.options.fps, "terminal runner started");

        self.clear()?;
        let mut iterations = 0;
        loop {
            let frame_start = Instant::now();
            iterations += stage.tick(frame_start).iterations_of(&self.options.target);
            self.draw(&stage.frame(), iterations)?;

            if self.options.max_iterations.is_some_and(|max| iterations >= max) {
                info!(iterations, "iteration limit reached");
                return Ok(());
            }

            let timeout = frame_time.saturating_sub(frame_start.elapsed());
            if !event::poll(timeout)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if is_quit(&key) => {
                    info!(iterations, "quit requested");
                    return Ok(());
                }
                Event::Resize(columns, rows) => {
                    debug!(columns, rows, "terminal resized");
                    self.clear()?;
                }
                _ => {}
            }
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if let Some(background) = self.options.background {
            queue!(self.stdout, SetBackgroundColor(background.into()))?;
        }
        queue!(self.stdout, Clear(ClearType::All))?;
        self.stdout.flush()
    }

    fn draw(&mut self, frame: &Frame, iterations: u64) -> io::Result<()> {
        let (columns, rows) = terminal::size()?;
        let top = (rows / 2).saturating_sub(frame.lines.len() as u16 / 2);

        for (index, line) in frame.lines.iter().enumerate() {
            let row = top + index as u16;
            if row >= rows {
                break;
            }
            let width = Frame::line_width(line) as u16;
            let column = columns.saturating_sub(width) / 2;
            queue!(self.stdout, MoveTo(0, row), Clear(ClearType::CurrentLine), MoveTo(column, row))?;
            for StyledChar { ch, color } in line {
                queue!(self.stdout, SetForegroundColor((*color).into()), Print(ch))?;
            }
        }

        if self.options.show_status && rows > 1 {
            let status = format!(" iteration {iterations} · q to quit");
            queue!(
                self.stdout,
                MoveTo(0, rows - 1),
                Clear(ClearType::CurrentLine),
                SetForegroundColor(Color::STATUS_GRAY.into()),
                Print(status)
            )?;
        }
        self.stdout.flush()
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
