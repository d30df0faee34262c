use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

/// Stop flag shared with a running loop; the loop checks it on every tick
/// and stops rescheduling itself once set.
#[derive(Clone, Default)]
pub struct TaskHandle {
    stopped: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

type Slot<F: ?Sized> = Rc<RefCell<Option<Closure<F>>>>;

/// Calls `step` on every animation frame with the frame timestamp until it
/// returns `false` or the handle is stopped.
pub fn every_frame(mut step: impl FnMut(f64) -> bool + 'static) -> Result<TaskHandle, JsValue> {
    let handle = TaskHandle::default();
    let running = handle.clone();

    // `f` holds the frame closure so it can re-request itself; the `Option`
    // lets us create the closure first and store it afterwards.
    let f: Slot<dyn FnMut(f64)> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if running.is_stopped() || !step(ts) {
            // The closure cannot drop itself while running; free it next tick.
            let slot = f.clone();
            if let Err(e) = after(0, move || drop(slot.borrow_mut().take())) {
                log::warn!("frame callback release: {e:?}");
            }
            return;
        }
        if let Err(e) = request_frame(&f) {
            log::error!("animation frame request failed: {e:?}");
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g)?;
    Ok(handle)
}

fn request_frame(f: &Slot<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    let slot = f.borrow();
    let cb = slot.as_ref().ok_or("frame callback missing")?;
    window()
        .ok_or("no window")?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}

/// Runs `step` after `first_delay_ms`, then again after whatever delay it
/// returns, until it returns `None` or the handle is stopped.
pub fn repeat(
    first_delay_ms: u32,
    mut step: impl FnMut() -> Option<u32> + 'static,
) -> Result<TaskHandle, JsValue> {
    let handle = TaskHandle::default();
    let running = handle.clone();

    let f: Slot<dyn FnMut()> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let next = if running.is_stopped() { None } else { step() };
        match next {
            Some(delay) => {
                if let Err(e) = schedule(&f, delay) {
                    log::error!("timer request failed: {e:?}");
                }
            }
            None => {
                let slot = f.clone();
                if let Err(e) = after(0, move || drop(slot.borrow_mut().take())) {
                    log::warn!("timer callback release: {e:?}");
                }
            }
        }
    }) as Box<dyn FnMut()>));

    schedule(&g, first_delay_ms)?;
    Ok(handle)
}

fn schedule(f: &Slot<dyn FnMut()>, delay_ms: u32) -> Result<i32, JsValue> {
    let slot = f.borrow();
    let cb = slot.as_ref().ok_or("timer callback missing")?;
    window()
        .ok_or("no window")?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
}

/// One-shot timeout. The closure is freed after it runs.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let cb = Closure::once_into_js(f);
    window()
        .ok_or("no window")?
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms as i32)
}
