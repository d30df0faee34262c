use std::cell::Cell;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::{dom, timer};
use crate::config::SiteConfig;
use crate::reveal::{parse_target, parse_width, CountUp, RevealController};

/// Counters (`.counter[data-target]`) and skill bars (`.progress[data-width]`).
pub fn start(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let counters: Vec<(Element, CountUp)> = dom::query_all(document, ".counter")
        .into_iter()
        .filter_map(|el| {
            let raw = el.get_attribute("data-target")?;
            match parse_target(&raw) {
                Some(target) => Some((
                    el,
                    CountUp {
                        target,
                        duration_ms: config.counter_duration_ms,
                    },
                )),
                None => {
                    log::debug!("counter with bad data-target {raw:?} skipped");
                    None
                }
            }
        })
        .collect();
    let bars: Vec<(HtmlElement, f64)> = dom::query_all(document, ".progress")
        .into_iter()
        .filter_map(|el| {
            let width = parse_width(&el.get_attribute("data-width")?)?;
            Some((el.dyn_into::<HtmlElement>().ok()?, width))
        })
        .collect();
    if counters.is_empty() && bars.is_empty() {
        return Ok(());
    }

    let mut controller = RevealController::new(
        counters.len(),
        config.counter_threshold,
        config.skill_divisor,
    );
    let win = window.clone();
    let mut check = move || {
        let Some(vh) = win.inner_height().ok().and_then(|h| h.as_f64()) else {
            return;
        };
        let tops: Vec<f64> = counters
            .iter()
            .map(|(el, _)| el.get_bounding_client_rect().top())
            .collect();
        for i in controller.scan_counters(vh, &tops) {
            let (el, count) = &counters[i];
            if let Err(e) = animate(el.clone(), *count) {
                log::warn!("counter animation: {e:?}");
            }
        }
        for (bar, width) in &bars {
            let top = bar.get_bounding_client_rect().top();
            if controller.skill_bar_visible(vh, top) {
                if let Err(e) = bar.style().set_property("width", &format!("{width}%")) {
                    log::warn!("skill bar width: {e:?}");
                }
            }
        }
    };
    check();

    let closure = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn animate(el: Element, count: CountUp) -> Result<(), JsValue> {
    let suffix = el.get_attribute("data-suffix").unwrap_or_default();
    let started = Cell::new(None::<f64>);
    timer::every_frame(move |ts| {
        let t0 = started.get().unwrap_or(ts);
        started.set(Some(t0));
        let elapsed = ts - t0;
        el.set_text_content(Some(&format!("{}{suffix}", count.display_at(elapsed))));
        !count.is_done(elapsed)
    })?;
    Ok(())
}
