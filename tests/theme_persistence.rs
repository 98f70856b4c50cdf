use mahr_calculator_wasm::domain::theme::{PreferenceStore, THEME_STORAGE_KEY, Theme, ThemePreference};
use mahr_calculator_wasm::infrastructure::storage::InMemoryPreferences;

#[test]
fn defaults_to_light_when_nothing_stored() {
    let store = InMemoryPreferences::new();
    let preference = ThemePreference::new(&store);
    assert_eq!(preference.load(), Theme::Light);
}

#[test]
fn invalid_stored_value_means_light() {
    let store = InMemoryPreferences::new();
    store.set(THEME_STORAGE_KEY, "solarized");
    let preference = ThemePreference::new(&store);
    assert_eq!(preference.load(), Theme::Light);
}

#[test]
fn toggle_flips_and_persists() {
    let store = InMemoryPreferences::new();
    let preference = ThemePreference::new(&store);

    let dark = preference.toggle(Theme::Light);
    assert_eq!(dark, Theme::Dark);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn double_toggle_is_involution() {
    let store = InMemoryPreferences::new();
    let preference = ThemePreference::new(&store);

    let first = preference.toggle(Theme::Light);
    let second = preference.toggle(first);

    assert_eq!(second, Theme::Light);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn persisted_value_survives_reload() {
    let store = InMemoryPreferences::new();
    {
        let preference = ThemePreference::new(&store);
        preference.toggle(Theme::Light);
    }
    // a fresh preference over the same store models the page reload
    let reloaded = ThemePreference::new(&store);
    assert_eq!(reloaded.load(), Theme::Dark);
}

#[test]
fn repeated_toggles_always_reflect_last_state() {
    let store = InMemoryPreferences::new();
    let preference = ThemePreference::new(&store);

    let mut current = preference.load();
    for _ in 0..7 {
        current = preference.toggle(current);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some(current.as_ref()));
    }
    assert_eq!(current, Theme::Dark);
}
