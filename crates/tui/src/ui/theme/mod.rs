//! Theme styling module for the TUI UI layer.
//!
//! This module defines the color palettes (Dracula, Nord), the semantic theme
//! roles, and helper builders for Ratatui widgets and styles. Prefer these
//! helpers over hard-coding colors.

use std::env;

use tracing::debug;

pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

pub const THEME_ENV: &str = "TUI_THEME";

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

impl std::fmt::Debug for LoadedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedTheme").field("id", &self.definition.id).finish()
    }
}

/// Selects a theme: explicit override, then `TUI_THEME`, then the persisted
/// preference, then the default palette. Unknown names fall through.
pub fn load(explicit: Option<&str>, preferred: Option<&str>) -> LoadedTheme {
    if let Some(definition) = explicit.and_then(catalog::resolve) {
        return LoadedTheme::from_definition(definition);
    }

    if let Ok(theme_name) = env::var(THEME_ENV)
        && let Some(definition) = catalog::resolve(&theme_name)
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(definition) = preferred.and_then(catalog::resolve) {
        return LoadedTheme::from_definition(definition);
    }

    debug!("no theme override found; using default palette");
    LoadedTheme::from_definition(catalog::default_definition())
}
