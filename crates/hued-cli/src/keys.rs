//! Key bindings for the interactive counter.
//!
//! | Key        | Action             |
//! |------------|--------------------|
//! | `Space`    | increment          |
//! | `r` / `R`  | reset              |
//! | `1` `2` `3`| light / blue / dark |
//! | `q` / Esc  | quit               |

use console::Key;
use hued::{Action, ThemeKind};

pub fn action_for(key: &Key) -> Option<Action> {
    match key {
        Key::Char(' ') => Some(Action::Increment),
        Key::Char(c) if c.eq_ignore_ascii_case(&'r') => Some(Action::Reset),
        Key::Char('1') => Some(Action::SelectTheme(ThemeKind::Light)),
        Key::Char('2') => Some(Action::SelectTheme(ThemeKind::Blue)),
        Key::Char('3') => Some(Action::SelectTheme(ThemeKind::Dark)),
        Key::Char('q') | Key::Char('Q') | Key::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Key shown next to each theme in the help line.
pub fn theme_key(kind: ThemeKind) -> char {
    match kind {
        ThemeKind::Light => '1',
        ThemeKind::Blue => '2',
        ThemeKind::Dark => '3',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_increments() {
        assert_eq!(action_for(&Key::Char(' ')), Some(Action::Increment));
    }

    #[test]
    fn test_r_resets_either_case() {
        assert_eq!(action_for(&Key::Char('r')), Some(Action::Reset));
        assert_eq!(action_for(&Key::Char('R')), Some(Action::Reset));
    }

    #[test]
    fn test_theme_keys_match_help() {
        for kind in ThemeKind::ALL {
            assert_eq!(
                action_for(&Key::Char(theme_key(kind))),
                Some(Action::SelectTheme(kind))
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(&Key::Escape), Some(Action::Quit));
        assert_eq!(action_for(&Key::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for(&Key::Char('x')), None);
        assert_eq!(action_for(&Key::Enter), None);
        assert_eq!(action_for(&Key::ArrowUp), None);
    }
}
