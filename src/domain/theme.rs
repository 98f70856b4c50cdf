use strum::{AsRefStr, Display, EnumString};

/// Key under which the preference lives in client-local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Value Object - the page's visual theme.
///
/// Stored `"dark"` means dark; anything else (including absence or a
/// corrupted value) means light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
pub enum Theme {
    #[strum(serialize = "light")]
    Light,
    #[strum(serialize = "dark")]
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Injected key-value persistence; the browser backs this with
/// localStorage, tests with a map.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Owner of the persisted theme flag. Load runs once at startup; toggle
/// flips, persists and hands back the state the caller must apply.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_STORAGE_KEY).as_deref())
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.flipped();
        self.store.set(THEME_STORAGE_KEY, next.as_ref());
        next
    }
}
