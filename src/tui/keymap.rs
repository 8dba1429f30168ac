use crossterm::event::{KeyCode, KeyModifiers};

// ── Actions ──────────────────────────────────────────────────────────

/// Everything a single key press can ask the controller to do.
///
/// Positions are the 1-based indices shown in the table. Only `1`..`9`
/// can be typed, so tasks past the ninth are not addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    EnterAddMode,
    EnterRemoveMode,
    Back,
    Toggle(usize),
    Remove(usize),
}

fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

fn position(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

// ── Lookup ───────────────────────────────────────────────────────────

/// Browse mode: `a` adds, `r` removes, `0` exits, digits toggle.
pub fn lookup_browse(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if is_interrupt(code, modifiers) {
        return Some(Action::Quit);
    }
    match code {
        KeyCode::Char('a') => Some(Action::EnterAddMode),
        KeyCode::Char('r') => Some(Action::EnterRemoveMode),
        KeyCode::Char('0') => Some(Action::Quit),
        _ => position(code).map(Action::Toggle),
    }
}

/// Remove mode: `0` goes back, digits remove.
pub fn lookup_remove(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if is_interrupt(code, modifiers) {
        return Some(Action::Quit);
    }
    match code {
        KeyCode::Char('0') => Some(Action::Back),
        _ => position(code).map(Action::Remove),
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn browse(c: char) -> Option<Action> {
        lookup_browse(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn remove(c: char) -> Option<Action> {
        lookup_remove(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn browse_mode_switches() {
        assert_eq!(browse('a'), Some(Action::EnterAddMode));
        assert_eq!(browse('r'), Some(Action::EnterRemoveMode));
        assert_eq!(browse('0'), Some(Action::Quit));
    }

    #[test]
    fn browse_digits_toggle() {
        assert_eq!(browse('1'), Some(Action::Toggle(1)));
        assert_eq!(browse('9'), Some(Action::Toggle(9)));
    }

    #[test]
    fn browse_unknown_keys_ignored() {
        assert_eq!(browse('x'), None);
        assert_eq!(browse('A'), None);
        assert_eq!(lookup_browse(KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(lookup_browse(KeyCode::Esc, KeyModifiers::NONE), None);
    }

    #[test]
    fn remove_digits_remove() {
        assert_eq!(remove('1'), Some(Action::Remove(1)));
        assert_eq!(remove('7'), Some(Action::Remove(7)));
        assert_eq!(remove('0'), Some(Action::Back));
    }

    #[test]
    fn remove_ignores_browse_keys() {
        assert_eq!(remove('a'), None);
        assert_eq!(remove('r'), None);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        assert_eq!(
            lookup_browse(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            lookup_remove(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(browse('c'), None);
    }
}
