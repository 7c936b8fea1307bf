use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Anything that takes over the terminal between `start` and `stop`.
pub trait TerminalSession {
    fn start(&mut self) -> io::Result<()>;
    fn stop(&mut self) -> io::Result<()>;
}

/// Run `body` inside a started session. `stop` runs even when `start` fails
/// partway or `body` returns an error; the first error wins.
pub fn with_session<S, T>(
    session: &mut S,
    body: impl FnOnce(&mut S) -> io::Result<T>,
) -> io::Result<T>
where
    S: TerminalSession,
{
    let result = session.start().and_then(|()| body(session));
    let stopped = session.stop();
    let value = result?;
    stopped?;
    Ok(value)
}

/// Ratatui-based terminal backend
pub struct RatatuiBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl RatatuiBackend {
    /// Create a new ratatui backend (does not start terminal mode)
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press. Releases and repeats are dropped.
    pub fn poll_key(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

impl TerminalSession for RatatuiBackend {
    /// Enter raw mode and alternate screen
    fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Leave raw mode and alternate screen
    fn stop(&mut self) -> io::Result<()> {
        restore_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Undo `start` without a backend handle. Safe to call from a panic hook.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal before the default panic message prints.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSession {
        fail_start: bool,
        events: Vec<&'static str>,
    }

    impl TerminalSession for FakeSession {
        fn start(&mut self) -> io::Result<()> {
            self.events.push("start");
            if self.fail_start {
                Err(io::Error::new(io::ErrorKind::Other, "no tty"))
            } else {
                Ok(())
            }
        }

        fn stop(&mut self) -> io::Result<()> {
            self.events.push("stop");
            Ok(())
        }
    }

    #[test]
    fn stop_runs_after_body() {
        let mut session = FakeSession::default();
        let value = with_session(&mut session, |s| {
            s.events.push("body");
            Ok(7)
        })
        .unwrap();
        assert_eq!(value, 7);
        assert_eq!(session.events, ["start", "body", "stop"]);
    }

    #[test]
    fn stop_runs_when_start_fails() {
        let mut session = FakeSession {
            fail_start: true,
            ..FakeSession::default()
        };
        let result = with_session(&mut session, |s| {
            s.events.push("body");
            Ok(())
        });
        assert_eq!(result.unwrap_err().to_string(), "no tty");
        assert_eq!(session.events, ["start", "stop"]);
    }

    #[test]
    fn stop_runs_when_body_fails() {
        let mut session = FakeSession::default();
        let result: io::Result<()> = with_session(&mut session, |_| {
            Err(io::Error::new(io::ErrorKind::Other, "draw failed"))
        });
        assert!(result.is_err());
        assert_eq!(session.events, ["start", "stop"]);
    }
}
