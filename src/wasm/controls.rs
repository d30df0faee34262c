//! Independent page controls. Each one is optional: a missing element just
//! leaves that control unwired.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlIFrameElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

use super::dom;
use super::storage::LocalStorage;
use super::timer::{self, TaskHandle};
use crate::config::SiteConfig;
use crate::playground::{Playground, SANDBOX};
use crate::theme::{Theme, ThemeStore, DARK_CLASS};
use crate::typed::TypedText;
use crate::widgets::{Accordion, Carousel, NavMenu};

/// Wires every control present on the page and returns the handles of the
/// timer loops it started.
pub fn start(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Vec<TaskHandle>, JsValue> {
    theme(window, document, config)?;
    back_to_top(window, document)?;
    faq(document)?;
    nav(document)?;
    copy_email(window, document, config)?;
    playground(document)?;

    let loops = [typed_text(document, config)?, testimonial_scroll(document, config)?];
    Ok(loops.into_iter().flatten().collect())
}

fn on(target: &EventTarget, event: &str, f: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn theme(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let store = ThemeStore::new(LocalStorage::of(window), config.theme_key.as_str());
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches());
    let current = Cell::new(store.initial(prefers_dark));
    body.class_list()
        .toggle_with_force(DARK_CLASS, current.get().is_dark())?;

    let Some(toggle) = dom::by_id::<Element>(document, "darkModeToggle") else {
        return Ok(());
    };
    on(&toggle, "click", move || {
        let next: Theme = store.toggle(current.get());
        current.set(next);
        if let Err(e) = body.class_list().toggle_with_force(DARK_CLASS, next.is_dark()) {
            log::warn!("theme class: {e:?}");
        }
    })
}

fn typed_text(document: &Document, config: &SiteConfig) -> Result<Option<TaskHandle>, JsValue> {
    let Some(el) = dom::by_id::<Element>(document, "typed-text") else {
        return Ok(None);
    };
    let mut frames = TypedText::new(
        &config.typed_words,
        config.type_interval_ms,
        config.type_pause_ms,
    );
    el.set_text_content(None);
    let handle = timer::repeat(0, move || {
        let frame = frames.next()?;
        el.set_text_content(Some(&frame.text));
        Some(frame.delay_ms)
    })?;
    Ok(Some(handle))
}

fn back_to_top(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(button) = dom::by_id::<Element>(document, "backToTop") else {
        return Ok(());
    };
    let win = window.clone();
    on(&button, "click", move || {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    })
}

fn faq(document: &Document) -> Result<(), JsValue> {
    let items = dom::query_all(document, ".faq-item");
    let state = Rc::new(RefCell::new(Accordion::new(items.len())));
    for (i, item) in items.into_iter().enumerate() {
        let trigger = item.query_selector(".faq-question")?.unwrap_or_else(|| item.clone());
        let state = state.clone();
        on(&trigger, "click", move || {
            let Some(expanded) = state.borrow_mut().toggle(i) else {
                return;
            };
            if let Err(e) = item.class_list().toggle_with_force("open", expanded) {
                log::warn!("faq toggle: {e:?}");
            }
            if let Err(e) = item.set_attribute("aria-expanded", if expanded { "true" } else { "false" }) {
                log::warn!("faq aria-expanded: {e:?}");
            }
        })?;
    }
    Ok(())
}

fn nav(document: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        dom::by_id::<Element>(document, "navToggle"),
        dom::by_id::<Element>(document, "navMenu"),
    ) else {
        return Ok(());
    };
    let state = Rc::new(Cell::new(NavMenu::default()));
    let apply = {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        move |nav: NavMenu| {
            if let Err(e) = menu.class_list().toggle_with_force("open", nav.is_open()) {
                log::warn!("nav toggle: {e:?}");
            }
            if let Err(e) = toggle.set_attribute("aria-expanded", nav.aria_expanded()) {
                log::warn!("nav aria-expanded: {e:?}");
            }
        }
    };
    {
        let (state, apply) = (state.clone(), apply.clone());
        on(&toggle, "click", move || {
            let mut nav = state.get();
            nav.toggle();
            state.set(nav);
            apply(nav);
        })?;
    }
    let links = menu.query_selector_all("a")?;
    for link in (0..links.length()).filter_map(|i| links.item(i)) {
        let (state, apply) = (state.clone(), apply.clone());
        on(&link, "click", move || {
            let mut nav = state.get();
            nav.link_activated();
            state.set(nav);
            apply(nav);
        })?;
    }
    Ok(())
}

fn copy_email(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(button) = dom::by_id::<Element>(document, "copyEmailBtn") else {
        return Ok(());
    };
    let win = window.clone();
    let email = config.email.clone();
    on(&button, "click", move || {
        let win = win.clone();
        let email = email.clone();
        spawn_local(async move {
            let message = match write_clipboard(&win, &email).await {
                Ok(()) => "Email copied to clipboard!".to_string(),
                Err(e) => {
                    log::warn!("clipboard write failed: {e:?}");
                    format!("Copy failed, my email is {email}")
                }
            };
            if let Err(e) = win.alert_with_message(&message) {
                log::warn!("alert failed: {e:?}");
            }
        });
    })
}

/// `navigator.clipboard.writeText(text)`.
async fn write_clipboard(window: &Window, text: &str) -> Result<(), JsValue> {
    let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())?;
    if clipboard.is_undefined() {
        return Err("clipboard API unavailable".into());
    }
    let write: Function = Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: Promise = write.call1(&clipboard, &text.into())?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn testimonial_scroll(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<TaskHandle>, JsValue> {
    let Some(slider) = document
        .query_selector(".testimonial-slider")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(None);
    };
    let mut carousel = Carousel::new(config.slide_step_px);
    let interval = config.slide_interval_ms;
    let handle = timer::repeat(interval, move || {
        let left = carousel.advance(slider.scroll_width() as f64);
        let opts = ScrollToOptions::new();
        opts.set_left(left);
        opts.set_behavior(ScrollBehavior::Smooth);
        slider.scroll_to_with_scroll_to_options(&opts);
        Some(interval)
    })?;
    Ok(Some(handle))
}

fn playground(document: &Document) -> Result<(), JsValue> {
    let (Some(editor), Some(frame)) = (
        dom::by_id::<HtmlTextAreaElement>(document, "playground-editor"),
        dom::by_id::<HtmlIFrameElement>(document, "playground-frame"),
    ) else {
        return Ok(());
    };
    let pg = Rc::new(RefCell::new(Playground::default()));
    frame.set_attribute("sandbox", SANDBOX)?;
    editor.set_value(pg.borrow().buffer());
    frame.set_srcdoc(pg.borrow().run());

    if let Some(run) = dom::by_id::<Element>(document, "playground-run") {
        let (pg, editor, frame) = (pg.clone(), editor.clone(), frame.clone());
        on(&run, "click", move || {
            let mut pg = pg.borrow_mut();
            pg.edit(&editor.value());
            frame.set_srcdoc(pg.run());
        })?;
    }
    if let Some(reset) = dom::by_id::<Element>(document, "playground-reset") {
        on(&reset, "click", move || {
            let mut pg = pg.borrow_mut();
            let doc = pg.reset().to_string();
            editor.set_value(&doc);
            frame.set_srcdoc(&doc);
        })?;
    }
    Ok(())
}
