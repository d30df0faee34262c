pub mod app;
pub mod config;
pub mod filter;
pub mod gallery;
pub mod loader;
pub mod modal;
pub mod model;
pub mod particles;
pub mod playground;
pub mod reveal;
pub mod theme;
pub mod typed;
pub mod view;
pub mod widgets;

// Only compile wasm-specific code when targeting wasm32. Everything above is
// plain Rust and is tested on the host.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod controls;
    pub mod dom;
    mod fetch;
    mod page;
    mod reveal;
    pub mod storage;
    pub mod timer;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let config = page::site_config(&document);

        let mut loops = controls::start(&window, &document, &config)?;
        match document.get_element_by_id("particle-canvas") {
            Some(el) => loops.push(canvas::start(el.dyn_into()?, config.area_per_particle)?),
            None => log::debug!("no #particle-canvas, background disabled"),
        }
        reveal::start(&window, &document, &config)?;
        page::start(document, config);

        // Endless loops only stop when the page goes away.
        let on_hide = Closure::wrap(Box::new(move || {
            loops.iter().for_each(timer::TaskHandle::stop);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
        on_hide.forget();
        Ok(())
    }
}
