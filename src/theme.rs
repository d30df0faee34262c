//! Light/dark theme, persisted in a key-value store.

pub const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
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

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// String storage with browser `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The persisted theme, or the system preference when nothing valid is
    /// stored.
    pub fn initial(&self, prefers_dark: bool) -> Theme {
        self.store
            .get(&self.key)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.set(&self.key, next.as_str());
        log::debug!("theme set to {}", next.as_str());
        next
    }
}
