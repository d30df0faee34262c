use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::timer::{self, TaskHandle};
use crate::particles::ParticleField;

const PARTICLE_COLOR: &str = "rgba(255, 255, 255, 0.8)";

/// Start the background particle loop on `canvas`.
pub fn start(canvas: HtmlCanvasElement, area_per_particle: f64) -> Result<TaskHandle, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;

    let win = window().ok_or("no window")?;
    let (w, h) = viewport(&win)?;
    fit(&canvas, w, h);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        w,
        h,
        area_per_particle,
        SmallRng::seed_from_u64(seed),
    )));
    log::debug!("particle field: {} particles", field.borrow().particles().len());

    // Resize canvas to fit window and start over with a fresh particle set.
    let resize_closure = {
        let canvas = canvas.clone();
        let field = field.clone();
        Closure::wrap(Box::new(move || {
            let Some(win) = window() else { return };
            match viewport(&win) {
                Ok((w, h)) => {
                    fit(&canvas, w, h);
                    field.borrow_mut().resize(w, h);
                }
                Err(e) => log::warn!("resize ignored: {e:?}"),
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    timer::every_frame(move |_ts| {
        let mut field = field.borrow_mut();
        if let Err(e) = draw(&ctx, &mut field) {
            log::error!("particle frame failed: {e:?}");
            return false;
        }
        true
    })
}

fn draw(ctx: &CanvasRenderingContext2d, field: &mut ParticleField<SmallRng>) -> Result<(), JsValue> {
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w, h);
    field.step();
    ctx.set_fill_style_str(PARTICLE_COLOR);
    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

fn viewport(win: &Window) -> Result<(f64, f64), JsValue> {
    let w = win.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let h = win.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok((w, h))
}

fn fit(canvas: &HtmlCanvasElement, w: f64, h: f64) {
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}
