use folio_theme::{ColorToken, SystemDefault, ThemeMode, ThemeProvider, ThemeSource};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct StoredPreference(Arc<Mutex<Option<ThemeMode>>>);

impl StoredPreference {
    fn new(initial: ThemeMode) -> Self {
        Self(Arc::new(Mutex::new(Some(initial))))
    }

    fn stored(&self) -> Option<ThemeMode> {
        *self.0.lock().unwrap()
    }
}

impl ThemeSource for StoredPreference {
    fn initial_mode(&self) -> ThemeMode {
        self.0.lock().unwrap().unwrap_or_default()
    }

    fn persist(&self, mode: ThemeMode) {
        *self.0.lock().unwrap() = Some(mode);
    }
}

#[test]
fn stored_preference_round_trips_through_provider() {
    let store = StoredPreference::new(ThemeMode::Dark);
    let provider = ThemeProvider::with_defaults(store.clone());

    assert_eq!(provider.mode(), ThemeMode::Dark);

    provider.toggle();
    assert_eq!(store.stored(), Some(ThemeMode::Light));

    // A second page constructed from the same store picks up the toggle
    let reopened = ThemeProvider::with_defaults(store.clone());
    assert_eq!(reopened.mode(), ThemeMode::Light);
}

#[test]
fn double_toggle_restores_every_token() {
    let provider = ThemeProvider::with_defaults(SystemDefault);
    let before = provider.colors();

    provider.toggle();
    assert_ne!(provider.color(ColorToken::Background), before.background);

    provider.toggle();
    assert_eq!(provider.colors(), before);
}

#[test]
fn token_lookup_follows_current_mode() {
    let provider = ThemeProvider::with_defaults(SystemDefault);

    let light_text = provider.color(ColorToken::TextPrimary);
    provider.toggle();
    let dark_text = provider.color(ColorToken::TextPrimary);

    assert_ne!(light_text, dark_text);
}
