use std::io::{self, BufRead, Stdout, Write};

use anyhow::{Context, Result, bail};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};

/// The terminal as the controller sees it.
///
/// Key reads need raw mode; line reads need it released. Callers switch
/// with `suspend_raw_mode` / `resume_raw_mode` around line input.
pub trait Console {
    /// Block until a key is pressed.
    fn read_key(&mut self) -> Result<KeyEvent>;

    /// Block until a full line is entered. The line ending is stripped.
    fn read_line(&mut self) -> Result<String>;

    fn suspend_raw_mode(&mut self) -> Result<()>;

    fn resume_raw_mode(&mut self) -> Result<()>;

    /// Clear the screen and draw `frame`.
    fn present(&mut self, frame: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Crossterm-backed console on stdin/stdout. Raw mode is held for as long
/// as the guard lives, so dropping the terminal always restores it.
pub struct Terminal {
    raw: Option<RawModeGuard>,
    out: Stdout,
}

impl Terminal {
    pub fn open() -> Result<Self> {
        let raw = RawModeGuard::enable().context("error opening keyboard")?;
        Ok(Terminal {
            raw: Some(raw),
            out: io::stdout(),
        })
    }
}

impl Console for Terminal {
    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read().context("error reading key")?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("error reading input")?;
        if n == 0 {
            bail!("error reading input: end of input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn suspend_raw_mode(&mut self) -> Result<()> {
        self.raw = None;
        Ok(())
    }

    fn resume_raw_mode(&mut self) -> Result<()> {
        if self.raw.is_none() {
            self.raw = Some(RawModeGuard::enable().context("error reopening keyboard")?);
        }
        Ok(())
    }

    fn present(&mut self, frame: &str) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        // raw mode doesn't translate \n into a carriage return
        self.out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.out.flush()?;
        Ok(())
    }
}
