use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::store::{TaskFile, TaskStore};

use super::event::Console;
use super::keymap::{self, Action};
use super::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Add,
    Remove,
}

/// The interactive loop. Owns the store and writes it back through the
/// task file after every change.
pub struct App<C: Console> {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    file: TaskFile,
    console: C,
    // Shown under the table on the next draw only
    notice: Option<String>,
}

impl<C: Console> App<C> {
    pub fn new(store: TaskStore, file: TaskFile, console: C) -> Self {
        App {
            store,
            mode: Mode::Browse,
            should_quit: false,
            file,
            console,
            notice: None,
        }
    }

    /// Show `notice` under the table on the first draw.
    #[must_use]
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// Run until the user quits. Input errors end the loop and are
    /// returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.draw()?;
            match self.mode {
                Mode::Browse | Mode::Remove => {
                    let key = self.console.read_key()?;
                    self.handle_key(key)?;
                }
                Mode::Add => {
                    let line = self.console.read_line()?;
                    self.handle_line(&line)?;
                }
            }
        }
        self.console.clear()
    }

    fn draw(&mut self) -> Result<()> {
        let notice = self.notice.take();
        let frame = ui::frame(&self.store, self.mode, notice.as_deref());
        self.console.present(&frame)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = match self.mode {
            Mode::Browse => keymap::lookup_browse(key.code, key.modifiers),
            Mode::Remove => keymap::lookup_remove(key.code, key.modifiers),
            Mode::Add => None,
        };
        match action {
            Some(action) => self.execute(action),
            None => Ok(()),
        }
    }

    fn execute(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                tracing::info!("quitting with {} tasks", self.store.len());
                self.should_quit = true;
            }
            Action::EnterAddMode => {
                self.console.suspend_raw_mode()?;
                self.mode = Mode::Add;
            }
            Action::EnterRemoveMode => self.mode = Mode::Remove,
            Action::Back => self.mode = Mode::Browse,
            Action::Toggle(index) => {
                if self.store.toggle_at(index) {
                    tracing::debug!("toggled task {index}");
                    self.persist();
                }
            }
            Action::Remove(index) => {
                if let Some(task) = self.store.remove_at(index) {
                    tracing::info!("removed task {index}: {}", task.description);
                    self.notice = Some(format!("Task '{}' removed", task.description));
                    self.persist();
                }
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<()> {
        match line {
            "0" => {
                self.console.resume_raw_mode()?;
                self.mode = Mode::Browse;
            }
            "" => {}
            description => {
                self.store.append(description);
                tracing::info!("added task {}: {description}", self.store.len());
                self.persist();
            }
        }
        Ok(())
    }

    /// Save the store. Failures keep the in-memory state and are reported
    /// on the next frame.
    fn persist(&mut self) {
        if let Err(e) = self.file.save(&self.store) {
            tracing::error!("error saving tasks: {e:#}");
            self.notice = Some(format!("error saving tasks: {e:#}"));
        }
    }
}
