use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_wasm::config::SiteConfig;
use folio_wasm::playground::{Playground, DEFAULT_SNIPPET};
use folio_wasm::theme::{KeyValueStore, Theme, ThemeStore};
use folio_wasm::typed::{TypedAction, TypedText};
use folio_wasm::widgets::{Accordion, Carousel, NavMenu};

/// In-memory stand-in for `localStorage`, shared between "page loads".
#[derive(Clone, Default)]
struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[test]
fn theme_toggle_persists_and_survives_reload() {
    let storage = MemoryStore::default();

    let first = ThemeStore::new(storage.clone(), "theme");
    let initial = first.initial(false);
    assert_eq!(initial, Theme::Light);
    let now = first.toggle(initial);
    assert_eq!(now, Theme::Dark);
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));

    // A fresh page load reads the stored value before anything is clicked.
    let reloaded = ThemeStore::new(storage.clone(), "theme");
    assert_eq!(reloaded.initial(false), Theme::Dark);

    reloaded.toggle(Theme::Dark);
    assert_eq!(storage.get("theme").as_deref(), Some("light"));
    // Stored choice wins over the system preference.
    assert_eq!(reloaded.initial(true), Theme::Light);
}

#[test]
fn theme_falls_back_to_system_preference() {
    let storage = MemoryStore::default();
    let store = ThemeStore::new(storage.clone(), "theme");
    assert_eq!(store.initial(true), Theme::Dark);
    assert_eq!(store.initial(false), Theme::Light);

    storage.set("theme", "sepia");
    assert_eq!(store.initial(true), Theme::Dark);
}

fn texts(words: &[&str], n: usize) -> Vec<String> {
    TypedText::new(words, 150, 1000)
        .take(n)
        .map(|f| match f.action {
            TypedAction::Type => f.text,
            TypedAction::Pause => "(pause)".to_string(),
            TypedAction::Clear => "(clear)".to_string(),
        })
        .collect()
}

#[test]
fn typed_text_sequence_wraps_forever() {
    let expected = [
        "H", "HT", "HTM", "HTML", "(pause)", "(clear)", "C", "CS", "CSS", "(pause)", "(clear)",
        "H", "HT",
    ];
    assert_eq!(texts(&["HTML", "CSS"], expected.len()), expected);

    // Still going after many cycles.
    assert_eq!(TypedText::new(&["HTML", "CSS"], 150, 1000).take(10_000).count(), 10_000);
}

#[test]
fn typed_text_delays() {
    let frames: Vec<_> = TypedText::new(&["ab"], 120, 900).take(5).collect();
    let delays: Vec<u32> = frames.iter().map(|f| f.delay_ms).collect();
    assert_eq!(delays, [120, 120, 900, 0, 120]);
    assert_eq!(frames[2].text, "ab");
    assert_eq!(frames[3].text, "");
}

#[test]
fn typed_text_handles_unicode_and_empty_lists() {
    assert_eq!(texts(&["né"], 3), ["n", "né", "(pause)"]);
    let none: [&str; 0] = [];
    assert_eq!(TypedText::new(&none, 150, 1000).next(), None);
    assert_eq!(texts(&["", "Go"], 3), ["G", "Go", "(pause)"]);
}

#[test]
fn nav_menu_toggles_and_closes_on_link() {
    let mut nav = NavMenu::default();
    assert_eq!(nav.aria_expanded(), "false");
    assert!(nav.toggle());
    assert_eq!(nav.aria_expanded(), "true");
    nav.link_activated();
    assert!(!nav.is_open());
    nav.link_activated();
    assert!(!nav.is_open());
}

#[test]
fn accordion_entries_are_independent() {
    let mut faq = Accordion::new(3);
    assert_eq!(faq.toggle(0), Some(true));
    assert_eq!(faq.toggle(2), Some(true));
    assert!(!faq.is_expanded(1));
    assert_eq!(faq.toggle(0), Some(false));
    assert!(faq.is_expanded(2));
    assert_eq!(faq.toggle(7), None);
}

#[test]
fn carousel_wraps_at_scroll_width() {
    let mut c = Carousel::new(320.0);
    assert_eq!(c.advance(1000.0), 320.0);
    assert_eq!(c.advance(1000.0), 640.0);
    assert_eq!(c.advance(1000.0), 960.0);
    assert_eq!(c.advance(1000.0), 0.0);
    assert_eq!(c.advance(1000.0), 320.0);
}

#[test]
fn playground_run_and_reset() {
    let mut pg = Playground::default();
    assert_eq!(pg.run(), DEFAULT_SNIPPET);
    pg.edit("<p>hi</p><script>alert(1)</script>");
    assert_eq!(pg.run(), "<p>hi</p><script>alert(1)</script>");
    pg.edit("<h1>again</h1>");
    assert_eq!(pg.run(), "<h1>again</h1>");
    assert_eq!(pg.reset(), DEFAULT_SNIPPET);
    assert_eq!(pg.buffer(), DEFAULT_SNIPPET);
}

#[test]
fn config_overrides_merge_with_defaults() {
    let cfg = SiteConfig::from_json(r#"{"email":"me@site.test","typedWords":["Rust"],"searchDebounceMs":250}"#)
        .expect("valid config");
    assert_eq!(cfg.email, "me@site.test");
    assert_eq!(cfg.typed_words, ["Rust"]);
    assert_eq!(cfg.search_debounce_ms, 250);
    assert_eq!(cfg.featured_count, 3);
    assert_eq!(cfg.projects_url, "data/projects.json");

    assert_eq!(SiteConfig::from_json_or_default("not json"), SiteConfig::default());
    let d = SiteConfig::default();
    assert_eq!(d.search_debounce_ms, 300);
    assert_eq!(d.theme_key, "theme");
}
