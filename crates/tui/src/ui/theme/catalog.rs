use super::{DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Names (env overrides, CLI flag) that map back to this definition.
    pub aliases: &'static [&'static str],
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &["dracula"],
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["nord", "polar"],
        factory: || Box::new(NordTheme::new()),
    },
];

/// Looks a theme up by id or alias, ignoring case.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let needle = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == needle || definition.aliases.contains(&needle.as_str()))
}

pub fn default_definition() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// The definition after `current`, wrapping around.
pub fn next(current: &ThemeDefinition) -> &'static ThemeDefinition {
    let index = THEME_DEFINITIONS
        .iter()
        .position(|definition| definition.id == current.id)
        .unwrap_or(0);
    &THEME_DEFINITIONS[(index + 1) % THEME_DEFINITIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("NORD").map(|d| d.id), Some("nord"));
        assert_eq!(resolve(" polar ").map(|d| d.id), Some("nord"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn next_wraps_around() {
        let nord = resolve("nord").unwrap();
        assert_eq!(next(nord).id, "dracula");
        assert_eq!(next(default_definition()).id, "nord");
    }
}
