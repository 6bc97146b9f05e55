//! Theme selection with persistence.
//!
//! [`ThemeSwitcher`] owns the preference store and remembers which theme it
//! last applied. Applying always happens before persisting, so a broken store
//! never prevents a theme from showing; the storage error is handed back to
//! the caller to report.

use tracing::{debug, warn};

use super::target::{apply_theme, ThemeTarget};
use super::theme::{Theme, ThemeKind, ThemeTokens};
use crate::error::PreferenceError;
use crate::preference::{PreferenceStore, THEME_KEY};

/// Applies themes and records the choice in a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemeSwitcher<S> {
    store: S,
    current: Option<ThemeKind>,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// The most recently applied theme, if any.
    pub fn current(&self) -> Option<ThemeKind> {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Reads the persisted theme name without applying anything.
    ///
    /// Unknown names read as `None`.
    pub fn saved(&self) -> Result<Option<ThemeKind>, PreferenceError> {
        let value = self.store.get(THEME_KEY)?;
        Ok(value.and_then(|name| match name.parse() {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!(error = %e, "ignoring stored theme");
                None
            }
        }))
    }

    /// Applies `theme` to `target`, then persists its kind.
    ///
    /// On `Err` the target has still been updated and [`current`](Self::current)
    /// reflects the new theme; only the save failed.
    pub fn select<T: ThemeTarget + ?Sized>(
        &mut self,
        theme: &Theme,
        target: &mut T,
    ) -> Result<ThemeTokens, PreferenceError> {
        let tokens = apply_theme(theme, target);
        self.current = Some(theme.kind());

        if let Err(e) = self.store.set(THEME_KEY, theme.kind().as_str()) {
            warn!(theme = %theme.kind(), error = %e, "theme applied but not saved");
            return Err(e);
        }
        debug!(theme = %theme.kind(), "theme saved");
        Ok(tokens)
    }

    /// Applies the persisted theme, or `fallback` when none is stored.
    ///
    /// `resolve` turns the chosen kind into a full [`Theme`], so callers can
    /// apply their own adjustments. When nothing valid is stored the fallback
    /// is applied and saved. When the store cannot be read, or the fallback
    /// cannot be saved, the fallback is still applied and the error returned.
    pub fn restore<T, F>(
        &mut self,
        target: &mut T,
        fallback: ThemeKind,
        resolve: F,
    ) -> Result<ThemeKind, PreferenceError>
    where
        T: ThemeTarget + ?Sized,
        F: Fn(ThemeKind) -> Theme,
    {
        match self.saved() {
            Ok(Some(kind)) => {
                debug!(theme = %kind, "restoring saved theme");
                apply_theme(&resolve(kind), target);
                self.current = Some(kind);
                Ok(kind)
            }
            Ok(None) => {
                self.select(&resolve(fallback), target)?;
                Ok(fallback)
            }
            Err(e) => {
                warn!(error = %e, fallback = %fallback, "could not read saved theme");
                apply_theme(&resolve(fallback), target);
                self.current = Some(fallback);
                Err(e)
            }
        }
    }
}
