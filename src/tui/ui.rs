//! Text rendering for the task table.
//!
//! Everything here is a pure function of the store contents. The table is
//! as wide as the longest description needs, but never narrower than the
//! title, and every width is measured in code points.

use crate::store::{Task, TaskStore};

use super::app::Mode;

pub const TITLE: &str = "cli to-do list in go :)";

/// Columns taken by everything in a row except the description: the
/// index digit, `". "`, the status cell and the borders.
const ROW_DECORATION: usize = 9;

pub const BROWSE_PROMPT: &str = "'a' to add / 'r' to remove / '0' to exit ";
pub const REMOVE_PROMPT: &str = " press the index task to remove / '0' to exit";
pub const ADD_PROMPT: &str = "add > ";

/// Inner width of the table, between the outer `+`/`|` borders.
pub fn column_width(max_desc_len: usize, title: &str) -> usize {
    (max_desc_len + ROW_DECORATION).max(title.chars().count())
}

fn border(width: usize) -> String {
    format!("+{}+", "-".repeat(width))
}

/// Top border, centered title line and a second border, each line
/// newline-terminated.
pub fn header(width: usize, title: &str) -> String {
    let padding = width.saturating_sub(title.chars().count());
    let left = padding / 2;
    let right = padding - left;
    let border = border(width);
    format!(
        "{border}\n|{}{title}{}|\n{border}\n",
        " ".repeat(left),
        " ".repeat(right)
    )
}

pub fn footer(width: usize) -> String {
    border(width)
}

/// One table row. Descriptions longer than `max_desc_len` are cut at a
/// code point boundary.
pub fn row(index: usize, task: &Task, max_desc_len: usize, width: usize) -> String {
    let description: String = task.description.chars().take(max_desc_len).collect();
    let fill = width.saturating_sub(description.chars().count() + ROW_DECORATION - 1);
    format!(
        "| {index}. {description}{}|{}|",
        " ".repeat(fill),
        task.status_cell()
    )
}

/// Header, one row per task and the footer. The footer carries no
/// trailing newline.
pub fn table(store: &TaskStore) -> String {
    let max_desc_len = store.max_description_length();
    let width = column_width(max_desc_len, TITLE);

    let mut out = header(width, TITLE);
    for (i, task) in store.tasks().iter().enumerate() {
        out.push_str(&row(i + 1, task, max_desc_len, width));
        out.push('\n');
    }
    out.push_str(&footer(width));
    out
}

/// The full screen for `mode`: table, optional one-shot notice, prompt.
pub fn frame(store: &TaskStore, mode: Mode, notice: Option<&str>) -> String {
    let mut out = table(store);
    out.push('\n');
    if let Some(notice) = notice {
        out.push_str(notice);
        out.push('\n');
    }
    match mode {
        Mode::Browse => {
            out.push_str(BROWSE_PROMPT);
            out.push('\n');
        }
        Mode::Remove => {
            out.push_str(REMOVE_PROMPT);
            out.push('\n');
        }
        Mode::Add => out.push_str(ADD_PROMPT),
    }
    out
}
