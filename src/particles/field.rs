//! Canvas ownership and the per-frame render loop for the particle field.
//!
//! The field owns `#particles` exclusively: nothing else draws on it. Each
//! frame steps every particle, draws the dots, then walks every pair for
//! proximity lines - O(n^2), acceptable only because the pool is fixed at
//! 50. On viewport resize the canvas backing store is re-measured and the
//! whole pool is rebuilt from fresh randomness; in-flight motion state is
//! not preserved.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::point::{self, Bounds, Particle};
use crate::dom;
use crate::schedule::FrameLoop;

/// Id of the drawing surface the field owns.
pub const CANVAS_ID: &str = "particles";

/// Dot fill; the link stroke reuses the same blue with a distance-derived
/// alpha.
const DOT_FILL: &str = "rgba(59, 130, 246, 0.5)";
const LINK_RGB: &str = "59, 130, 246";
const LINK_WIDTH: f64 = 1.0;

/// Running field; `stop` ends the frame loop. The resize listener stays
/// bound (harmless once nothing redraws) - page teardown is the real end.
pub struct FieldHandle {
    frames: FrameLoop,
}

impl FieldHandle {
    /// Stop animating after the current frame.
    pub fn stop(&self) {
        self.frames.stop();
    }
}

struct FieldState {
    bounds: Bounds,
    pool: Vec<Particle>,
    rng: SmallRng,
}

impl FieldState {
    /// Re-measure the viewport, resize the backing store, rebuild the pool.
    fn fit(&mut self, canvas: &HtmlCanvasElement, window: &Window) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        self.bounds = Bounds { width, height };
        self.pool = point::spawn_pool(&self.bounds, &mut self.rng);
    }

    fn step(&mut self) {
        for particle in self.pool.iter_mut() {
            particle.step(&self.bounds);
        }
    }
}

/// Start the field on `#particles`. A missing or non-canvas element is a
/// no-op `None`; so is a context the browser refuses to hand out.
pub fn start(document: &Document) -> Result<Option<FieldHandle>, JsValue> {
    let Some(element) = dom::by_id(document, CANVAS_ID) else {
        return Ok(None);
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return Ok(None);
    };
    let Some(window) = dom::window() else {
        return Ok(None);
    };
    let Some(context) = canvas.get_context("2d")? else {
        return Ok(None);
    };
    let Ok(context) = context.dyn_into::<CanvasRenderingContext2d>() else {
        return Ok(None);
    };

    let mut state = FieldState {
        bounds: Bounds {
            width: 0.0,
            height: 0.0,
        },
        pool: Vec::new(),
        rng: SmallRng::seed_from_u64(js_sys::Date::now() as u64),
    };
    state.fit(&canvas, &window);
    let state = Rc::new(RefCell::new(state));

    // Resize discards the pool wholesale and respawns at the new extent.
    let on_resize = {
        let state = state.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = dom::window() {
                state.borrow_mut().fit(&canvas, &window);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let frames = FrameLoop::start(move |_timestamp| {
        let mut state = state.borrow_mut();
        state.step();
        draw(&context, &state);
    });

    Ok(Some(FieldHandle { frames }))
}

fn draw(context: &CanvasRenderingContext2d, state: &FieldState) {
    let Bounds { width, height } = state.bounds;
    context.clear_rect(0.0, 0.0, width, height);

    context.set_fill_style_str(DOT_FILL);
    for particle in &state.pool {
        context.begin_path();
        let _ = context.arc(particle.x, particle.y, particle.radius, 0.0, PI * 2.0);
        context.fill();
    }

    context.set_line_width(LINK_WIDTH);
    for (index, a) in state.pool.iter().enumerate() {
        for b in &state.pool[index + 1..] {
            if let Some(alpha) = point::link_alpha(point::distance(a, b)) {
                context.set_stroke_style_str(&format!("rgba({LINK_RGB}, {alpha})"));
                context.begin_path();
                context.move_to(a.x, a.y);
                context.line_to(b.x, b.y);
                context.stroke();
            }
        }
    }
}
