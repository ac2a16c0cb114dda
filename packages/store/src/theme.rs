use crate::prefs::PreferenceStore;

/// Storage key holding the theme name.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute and of the stored preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Owns the current theme and keeps the stored preference in step with it.
#[derive(Clone, Debug)]
pub struct ThemeController<P> {
    prefs: P,
    current: Theme,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Read the stored preference, falling back to light.
    pub fn load(prefs: P) -> Self {
        let current = prefs
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self { prefs, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.prefs.set(THEME_KEY, self.current.as_str());
        self.current
    }
}
