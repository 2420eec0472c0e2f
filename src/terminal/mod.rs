//! Raw-mode terminal driver.
//!
//! Keys are decoded from unbuffered reads on stdin so an escape byte can be
//! told apart from the start of an escape sequence by timing alone.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::input::{self, ByteSource, Key};

/// How long one read waits before the loop gets a chance to redraw.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cursor-report bytes read before giving up on a reply.
const REPORT_MAX: usize = 32;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to switch terminal raw mode")]
    RawMode(#[source] io::Error),
    #[error("failed to read from the terminal")]
    Read(#[source] io::Error),
    #[error("failed to determine the terminal window size")]
    WindowSize,
    #[error("failed to write to the terminal")]
    Write(#[source] io::Error),
}

/// Unbuffered bytes from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinBytes;

#[cfg(unix)]
impl ByteSource for StdinBytes {
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        use rustix::event::{PollFd, PollFlags, Timespec, poll};
        use rustix::io::Errno;

        let stdin = io::stdin();
        let timeout = Timespec {
            tv_sec: i64::try_from(timeout.as_secs()).unwrap_or(i64::MAX),
            tv_nsec: timeout.subsec_nanos().into(),
        };
        let mut fds = [PollFd::new(&stdin, PollFlags::IN)];
        match poll(&mut fds, Some(&timeout)) {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            Err(err) if err == Errno::INTR => return Ok(None),
            Err(err) => return Err(err.into()),
        }

        let mut byte = [0u8; 1];
        match rustix::io::read(&stdin, &mut byte[..]) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(err) if err == Errno::INTR || err == Errno::AGAIN => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(unix))]
impl ByteSource for StdinBytes {
    fn read_byte(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        use std::io::Read;

        let mut byte = [0u8; 1];
        let read = io::stdin().lock().read(&mut byte)?;
        Ok((read == 1).then_some(byte[0]))
    }
}

/// The terminal in raw mode. Dropping it restores cooked mode.
pub struct Terminal {
    input: StdinBytes,
    stdout: io::Stdout,
    size: (usize, usize),
}

impl Terminal {
    /// Switch the terminal to raw mode and measure it.
    ///
    /// # Errors
    ///
    /// Fails if raw mode cannot be enabled or the window size cannot be
    /// determined by either method.
    pub fn enable() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::RawMode)?;
        let mut terminal = Self {
            input: StdinBytes,
            stdout: io::stdout(),
            size: (0, 0),
        };
        terminal.size = terminal.query_window_size()?;
        debug!(rows = terminal.size.0, cols = terminal.size.1, "terminal ready");
        Ok(terminal)
    }

    /// Window size as `(rows, cols)`.
    pub const fn size(&self) -> (usize, usize) {
        self.size
    }

    /// The new window size if it changed since the last call.
    pub fn resized(&mut self) -> Option<(usize, usize)> {
        let (cols, rows) = crossterm::terminal::size().ok()?;
        let size = (usize::from(rows), usize::from(cols));
        if size.0 == 0 || size.1 == 0 || size == self.size {
            return None;
        }
        debug!(rows = size.0, cols = size.1, "terminal resized");
        self.size = size;
        Some(size)
    }

    /// Wait up to [`POLL_INTERVAL`] for the next key.
    ///
    /// # Errors
    ///
    /// Fails if reading stdin fails.
    pub fn next_key(&mut self) -> Result<Option<Key>, TerminalError> {
        input::next_key(&mut self.input, POLL_INTERVAL).map_err(TerminalError::Read)
    }

    /// Write a complete frame in one call.
    ///
    /// # Errors
    ///
    /// Fails if stdout cannot be written.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<(), TerminalError> {
        self.stdout
            .write_all(frame)
            .and_then(|()| self.stdout.flush())
            .map_err(TerminalError::Write)
    }

    /// Clear the screen and home the cursor.
    pub fn clear_screen(&mut self) {
        if let Err(err) = execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(%err, "failed to clear screen");
        }
    }

    fn query_window_size(&mut self) -> Result<(usize, usize), TerminalError> {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Ok((usize::from(rows), usize::from(cols))),
            _ => {
                debug!("window size unavailable, asking for the cursor position");
                self.window_size_from_cursor()
            }
        }
    }

    fn window_size_from_cursor(&mut self) -> Result<(usize, usize), TerminalError> {
        self.write_frame(b"\x1b[999C\x1b[999B\x1b[6n")?;
        let mut reply = Vec::with_capacity(REPORT_MAX);
        while reply.len() < REPORT_MAX {
            match self
                .input
                .read_byte(POLL_INTERVAL)
                .map_err(TerminalError::Read)?
            {
                Some(b'R') | None => break,
                Some(byte) => reply.push(byte),
            }
        }
        parse_cursor_report(&reply).ok_or(TerminalError::WindowSize)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "failed to restore terminal mode");
        }
    }
}

/// Parse a cursor position report `ESC [ rows ; cols` (the final `R`
/// may be present or already consumed).
pub fn parse_cursor_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = body.strip_suffix(b"R").unwrap_or(body);
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    let size = (rows.parse().ok()?, cols.parse().ok()?);
    (size.0 > 0 && size.1 > 0).then_some(size)
}
