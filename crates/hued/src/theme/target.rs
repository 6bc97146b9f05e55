//! Applying a theme to whatever displays it.
//!
//! A theme is applied with one root class and two custom properties. Styling
//! then cascades from the root; nothing walks individual elements.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::debug;

use super::theme::{Theme, ThemeTokens};

/// Custom property holding the background color.
pub const BG_PROPERTY: &str = "--bg-color";

/// Custom property holding the text color.
pub const TEXT_PROPERTY: &str = "--text-color";

/// Something that can receive theme tokens at its root.
pub trait ThemeTarget {
    /// Replaces the active theme class on the root.
    fn set_theme_class(&mut self, class: &str);

    /// Sets one custom property on the root.
    fn set_property(&mut self, name: &str, value: &str);
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for &mut T {
    fn set_theme_class(&mut self, class: &str) {
        (**self).set_theme_class(class)
    }

    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value)
    }
}

/// Applies `theme` to `target` and returns the resolved tokens.
pub fn apply_theme<T: ThemeTarget + ?Sized>(theme: &Theme, target: &mut T) -> ThemeTokens {
    let tokens = theme.tokens();
    debug!(
        theme = %theme.kind(),
        background = %tokens.background,
        text = %tokens.text,
        "applying theme"
    );
    target.set_theme_class(theme.kind().class_name());
    target.set_property(BG_PROPERTY, &tokens.background.to_string());
    target.set_property(TEXT_PROPERTY, &tokens.text.to_string());
    tokens
}

/// In-memory [`ThemeTarget`] that renders to a CSS `:root` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSheet {
    class: Option<String>,
    properties: BTreeMap<String, String>,
    writes: usize,
}

impl TokenSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Number of property writes received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Renders the properties as a `:root` rule, sorted by name.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

impl ThemeTarget for TokenSheet {
    fn set_theme_class(&mut self, class: &str) {
        self.class = Some(class.to_string());
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }
}
