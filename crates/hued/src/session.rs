//! Click counter session.
//!
//! A [`Session`] holds the counter and the active theme kind. Front ends
//! translate their input (button presses, key strokes) into [`Action`]s and
//! react to the returned [`Outcome`].

use tracing::trace;

use crate::theme::ThemeKind;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add one to the counter.
    Increment,
    /// Set the counter back to zero.
    Reset,
    /// Switch to a theme.
    SelectTheme(ThemeKind),
    /// Leave the session.
    Quit,
}

/// What the front end should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Counter changed; redraw it.
    Redraw,
    /// Theme changed; apply and persist it, then redraw.
    ThemeChanged(ThemeKind),
    /// Nothing changed.
    Unchanged,
    /// Stop the session.
    Exit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increment(&mut self) -> u64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Counter plus active theme.
#[derive(Debug, Clone)]
pub struct Session {
    counter: Counter,
    theme: ThemeKind,
}

impl Session {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            counter: Counter::new(),
            theme,
        }
    }

    pub fn count(&self) -> u64 {
        self.counter.value()
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        trace!(?action, count = self.counter.value(), "dispatch");
        match action {
            Action::Increment => {
                self.counter.increment();
                Outcome::Redraw
            }
            Action::Reset => {
                self.counter.reset();
                Outcome::Redraw
            }
            Action::SelectTheme(kind) if kind == self.theme => Outcome::Unchanged,
            Action::SelectTheme(kind) => {
                self.theme = kind;
                Outcome::ThemeChanged(kind)
            }
            Action::Quit => Outcome::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let mut session = Session::new(ThemeKind::Light);
        assert_eq!(session.count(), 0);

        for _ in 0..3 {
            assert_eq!(session.dispatch(Action::Increment), Outcome::Redraw);
        }
        assert_eq!(session.count(), 3);

        assert_eq!(session.dispatch(Action::Reset), Outcome::Redraw);
        assert_eq!(session.count(), 0);
    }

    #[test]
    fn test_theme_change() {
        let mut session = Session::new(ThemeKind::Light);
        assert_eq!(
            session.dispatch(Action::SelectTheme(ThemeKind::Dark)),
            Outcome::ThemeChanged(ThemeKind::Dark)
        );
        assert_eq!(session.theme(), ThemeKind::Dark);
        assert_eq!(
            session.dispatch(Action::SelectTheme(ThemeKind::Dark)),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_theme_change_keeps_count() {
        let mut session = Session::new(ThemeKind::Light);
        session.dispatch(Action::Increment);
        session.dispatch(Action::SelectTheme(ThemeKind::Blue));
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new(ThemeKind::Blue);
        assert_eq!(session.dispatch(Action::Quit), Outcome::Exit);
    }

    #[test]
    fn test_counter_saturates() {
        let mut counter = Counter { value: u64::MAX };
        assert_eq!(counter.increment(), u64::MAX);
    }
}
