mod app;
mod event;
mod keymap;
mod ui;

use anyhow::Result;

use crate::store::{TaskFile, TaskStore};

pub use app::{App, Mode};
pub use event::{Console, Terminal};

/// Run the interactive loop. `notice` is shown under the table on the
/// first frame.
pub fn run(store: TaskStore, file: TaskFile, notice: Option<String>) -> Result<()> {
    let mut app = App::new(store, file, Terminal::open()?).with_notice(notice);
    let result = app.run();
    if let Err(ref e) = result {
        tracing::error!("{e:#}");
    }
    result
}
