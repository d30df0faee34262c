//! Data-driven part of the page: load, render once, then react to clicks,
//! the search box and the Escape key.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::{dom, fetch, timer};
use crate::app::{Effect, Portfolio};
use crate::config::SiteConfig;
use crate::filter::Debounce;
use crate::gallery::ClickIntent;
use crate::modal::ModalKind;
use crate::view::{Action, Node};

type App = Rc<RefCell<Portfolio>>;

/// Reads the optional inline `#site-config` JSON block.
pub fn site_config(document: &Document) -> SiteConfig {
    document
        .get_element_by_id("site-config")
        .and_then(|el| el.text_content())
        .map(|text| SiteConfig::from_json_or_default(&text))
        .unwrap_or_default()
}

/// Loads the data, then renders and wires the galleries. Rendering never
/// starts before the load has settled.
pub fn start(document: Document, config: SiteConfig) {
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let data = fetch::load(&window, &config).await;
        let app: App = Rc::new(RefCell::new(Portfolio::new(data, config.featured_count)));
        if let Err(e) = render(&document, &app.borrow()) {
            log::error!("gallery render failed: {e:?}");
            return;
        }
        if let Err(e) = wire(&document, &app, &config) {
            log::error!("gallery wiring failed: {e:?}");
        }
    });
}

fn render(document: &Document, app: &Portfolio) -> Result<(), JsValue> {
    let g = app.gallery();
    let targets: [(&str, &[Node]); 7] = [
        ("projects-grid", g.projects.as_slice()),
        ("websites-grid", g.websites.as_slice()),
        ("tech-grid", g.tech.as_slice()),
        ("project-filters", g.filters.as_slice()),
        ("featured-grid", g.featured.as_slice()),
        ("testimonials", g.testimonials.as_slice()),
        ("clients-grid", g.clients.as_slice()),
    ];
    for (id, nodes) in targets {
        if let Some(container) = document.get_element_by_id(id) {
            dom::mount(document, &container, nodes)?;
        } else {
            log::debug!("#{id} not on this page, skipping");
        }
    }
    log::info!(
        "rendered {} projects, {} websites",
        g.projects.len(),
        g.websites.len()
    );
    Ok(())
}

fn wire(document: &Document, app: &App, config: &SiteConfig) -> Result<(), JsValue> {
    {
        let app = app.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
            if let Err(e) = on_click(&doc, &app, &ev) {
                log::warn!("click handler: {e:?}");
            }
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            if ev.key() != "Escape" {
                return;
            }
            let closed = app.borrow_mut().modals_mut().escape();
            if !closed.is_empty() {
                sync_modals(&doc, &app.borrow());
            }
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(input) = dom::by_id::<HtmlInputElement>(document, "project-search") {
        let app = app.clone();
        let doc = document.clone();
        let delay = config.search_debounce_ms;
        let pending: Rc<RefCell<Debounce<String>>> = Rc::default();
        let field = input.clone();
        let closure = Closure::wrap(Box::new(move || {
            let ticket = pending.borrow_mut().schedule(field.value());
            let (app, doc, pending) = (app.clone(), doc.clone(), pending.clone());
            let fired = timer::after(delay, move || {
                let Some(query) = pending.borrow_mut().fire(ticket) else {
                    return;
                };
                app.borrow_mut().set_query(&query);
                refilter(&doc, &app.borrow());
            });
            if let Err(e) = fired {
                log::warn!("search debounce: {e:?}");
            }
        }) as Box<dyn FnMut()>);
        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn on_click(doc: &Document, app: &App, ev: &MouseEvent) -> Result<(), JsValue> {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };

    // Overlay itself, i.e. outside the content box.
    if let Some(kind) = ModalKind::from_element_id(&target.id()) {
        if app.borrow_mut().modals_mut().backdrop_click(kind, true) {
            sync_modals(doc, &app.borrow());
        }
        return Ok(());
    }

    if target.closest(".modal-close")?.is_some() {
        let kind = target
            .closest(".modal")?
            .and_then(|m| ModalKind::from_element_id(&m.id()));
        if let Some(kind) = kind {
            app.borrow_mut().modals_mut().close(kind);
            sync_modals(doc, &app.borrow());
        }
        return Ok(());
    }

    let Some(el) = target.closest("[data-action]")? else {
        return Ok(());
    };
    let name = el.get_attribute("data-action").unwrap_or_default();
    let value = el.get_attribute("data-value").unwrap_or_default();
    let Some(action) = Action::decode(&name, &value) else {
        log::debug!("unknown action {name:?}");
        return Ok(());
    };
    if matches!(action, Action::WebsitePreview(_))
        && ClickIntent::from_modifiers(ev.ctrl_key(), ev.meta_key()) == ClickIntent::Navigate
    {
        return Ok(());
    }
    ev.prevent_default();

    let effect = app.borrow_mut().dispatch(&action);
    match effect {
        Effect::ShowModal(view) => {
            if let Some(modal) = doc.get_element_by_id(view.kind.element_id()) {
                if let Some(body) = modal.query_selector(".modal-body")? {
                    dom::mount(doc, &body, std::slice::from_ref(&view.content))?;
                }
            } else {
                log::warn!("#{} missing, cannot show modal", view.kind.element_id());
            }
            sync_modals(doc, &app.borrow());
        }
        Effect::Refilter => refilter(doc, &app.borrow()),
    }
    Ok(())
}

fn sync_modals(doc: &Document, app: &Portfolio) {
    for kind in ModalKind::ALL {
        let Some(modal) = doc.get_element_by_id(kind.element_id()) else {
            continue;
        };
        let visible = app.modals().is_visible(kind);
        let classes = modal.class_list();
        let res = classes
            .toggle_with_force("show", visible)
            .and_then(|_| modal.set_attribute("aria-hidden", if visible { "false" } else { "true" }));
        if let Err(e) = res {
            log::warn!("modal {}: {e:?}", kind.element_id());
        }
    }
}

fn refilter(doc: &Document, app: &Portfolio) {
    let visibility = app.visibility();
    for card in dom::query_all(doc, ".project-card") {
        let id = card.get_attribute("data-id").unwrap_or_default();
        let shown = visibility
            .iter()
            .find(|(pid, _)| *pid == id)
            .map_or(false, |(_, v)| *v);
        dom::set_shown(&card, shown);
    }
    if let Some(bar) = doc.get_element_by_id("project-filters") {
        if let Err(e) = dom::mount(doc, &bar, &app.filter_buttons()) {
            log::warn!("filter buttons: {e:?}");
        }
    }
}
