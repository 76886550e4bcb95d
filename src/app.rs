//! Top-level application context.
//!
//! [`App`] owns every live component handle; nothing in the crate keeps
//! module-level mutable state. The one `thread_local` slot below exists
//! only to keep the booted `App` alive for the page's lifetime and to make
//! `boot` idempotent.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::catalog;
use crate::dom;
use crate::nav::{self, NavBinding};
use crate::particles::{self, FieldHandle};
use crate::projects;
use crate::reveal::{self, RevealHandle};
use crate::schedule::Delay;
use crate::typewriter::{self, TypewriterHandle};

/// Delay before the hero tagline starts typing.
pub const TYPEWRITER_START_DELAY_MS: i32 = 1000;

/// Selector for the typewriter's target element.
pub const TYPING_TARGET_SELECTOR: &str = ".typing-text";

/// Everything that stays alive after boot.
pub struct App {
    field: Option<FieldHandle>,
    reveal: Option<RevealHandle>,
    nav: Option<NavBinding>,
    typing_kickoff: Option<Delay>,
    typewriter: Rc<RefCell<Option<TypewriterHandle>>>,
}

impl App {
    /// Initialize every component in the fixed order: projects, particle
    /// field, scroll observer, nav toggle, then the delayed typewriter.
    /// Missing page elements degrade the matching component to a no-op.
    pub fn boot(document: &Document) -> Result<App, JsValue> {
        let rendered = projects::render(document, catalog::catalog())?;
        let field = particles::start(document)?;
        let reveal = Some(reveal::start(document)?);
        let nav = nav::bind(document)?;

        let typewriter: Rc<RefCell<Option<TypewriterHandle>>> = Rc::new(RefCell::new(None));
        let typing_kickoff = {
            let document = document.clone();
            let slot = typewriter.clone();
            Delay::start(TYPEWRITER_START_DELAY_MS, move || {
                let Some(target) = dom::query(&document, TYPING_TARGET_SELECTOR) else {
                    return;
                };
                if let Ok(handle) =
                    typewriter::start(&target, catalog::TAGLINE, typewriter::DEFAULT_INTERVAL_MS)
                {
                    slot.borrow_mut().replace(handle);
                }
            })
            .ok()
        };

        dom::log!(
            "polyfolio {} up: {} cards, field {}",
            crate::VERSION,
            rendered,
            if field.is_some() { "on" } else { "off" }
        );

        Ok(App {
            field,
            reveal,
            nav,
            typing_kickoff,
            typewriter,
        })
    }

    /// Stop every looping or pending behaviour this context owns.
    pub fn shutdown(&mut self) {
        if let Some(field) = self.field.take() {
            field.stop();
        }
        if let Some(reveal) = self.reveal.take() {
            reveal.disconnect();
        }
        if let Some(kickoff) = self.typing_kickoff.take() {
            kickoff.cancel();
        }
        if let Some(typewriter) = self.typewriter.borrow_mut().take() {
            typewriter.cancel();
        }
        self.nav = None;
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Boot once and hold the context for the page's lifetime. Later calls are
/// no-ops.
pub fn boot() -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Ok(());
        }
        *slot = Some(App::boot(&document)?);
        Ok(())
    })
}

/// Tear down the booted context, if any.
pub fn shutdown() {
    APP.with(|slot| {
        if let Some(mut app) = slot.borrow_mut().take() {
            app.shutdown();
        }
    });
}
