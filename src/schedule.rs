//! Timed and frame-driven callbacks with explicit cancellation.
//!
//! The browser gives us raw `setTimeout`/`setInterval`/`requestAnimationFrame`
//! chains with no owner; these three wrappers put a handle in front of each
//! so callers can stop what they start. Callback memory is deliberately
//! leaked to the JS side (`Closure::forget`): every user here lives for the
//! page, and a cancelled timer simply never fires again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// One-shot timer. Dropping the handle without cancelling lets it fire.
pub struct Delay {
    id: Cell<Option<i32>>,
}

impl Delay {
    /// Run `callback` once after `ms` milliseconds.
    pub fn start<F: FnOnce() + 'static>(ms: i32, callback: F) -> Result<Delay, JsValue> {
        let Some(window) = dom::window() else {
            return Ok(Delay {
                id: Cell::new(None),
            });
        };
        let closure = Closure::once(callback);
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )?;
        closure.forget();
        Ok(Delay {
            id: Cell::new(Some(id)),
        })
    }

    /// Clear the timer if it has not fired yet.
    pub fn cancel(&self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = dom::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

/// Repeating timer. The callback returns `false` to stop itself; `cancel`
/// stops it from outside.
pub struct Interval {
    id: Rc<Cell<Option<i32>>>,
}

impl Interval {
    /// Run `callback` every `ms` milliseconds until it returns `false` or
    /// the handle is cancelled.
    pub fn start<F: FnMut() -> bool + 'static>(ms: i32, mut callback: F) -> Result<Interval, JsValue> {
        let id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let Some(window) = dom::window() else {
            return Ok(Interval { id });
        };

        let inner = id.clone();
        let closure = Closure::wrap(Box::new(move || {
            if !callback() {
                if let Some(handle) = inner.take() {
                    if let Some(window) = dom::window() {
                        window.clear_interval_with_handle(handle);
                    }
                }
            }
        }) as Box<dyn FnMut()>);

        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )?;
        closure.forget();
        id.set(Some(handle));

        Ok(Interval { id })
    }

    /// Stop the timer; a self-stopped timer cancels to a no-op.
    pub fn cancel(&self) {
        if let Some(handle) = self.id.take() {
            if let Some(window) = dom::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}

/// Self-rescheduling `requestAnimationFrame` loop.
///
/// The closure slot keeps itself alive by holding its own `Rc` (the usual
/// wasm frame-loop shape); `stop` flips the running flag and the chain ends
/// at the next frame.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Drive `tick` once per animation frame, passing the frame timestamp,
    /// until [`FrameLoop::stop`].
    pub fn start<F: FnMut(f64) + 'static>(mut tick: F) -> FrameLoop {
        let running = Rc::new(Cell::new(true));

        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let first = slot.clone();
        let flag = running.clone();
        *first.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !flag.get() {
                return;
            }
            tick(timestamp);
            if let Some(window) = dom::window() {
                let _ = window
                    .request_animation_frame(slot.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(window) = dom::window() {
            let _ = window
                .request_animation_frame(first.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }

        FrameLoop { running }
    }

    /// End the loop after the current frame, if one is in flight.
    pub fn stop(&self) {
        self.running.set(false);
    }
}
