//! # Polyfolio
//!
//! Browser runtime for a single-page personal portfolio.
//!
//! ## Overview
//!
//! Polyfolio renders one static page from a built-in catalog of project
//! records and decorates it with a handful of independent effects:
//!
//! - **Project grid** - one card per catalog entry, cascading in with a
//!   per-card reveal delay, each card opening its project link on click
//! - **Particle field** - a full-viewport canvas with 50 drifting points,
//!   wall bounce, and proximity lines between close pairs
//! - **Typewriter** - the hero tagline revealed one character at a time
//! - **Scroll reveal** - elements gain a persistent `active` class the first
//!   time 10% of them enters the viewport; timeline items stagger in
//! - **Navigation toggle** - a mobile menu shown/hidden from an explicit
//!   two-state toggle
//!
//! ## Architecture
//!
//! State and math live in target-independent modules ([`catalog`],
//! [`particles::point`], [`typewriter`], [`reveal`], [`nav`], [`projects`])
//! and are exercised by native unit tests. DOM and canvas wiring is compiled
//! only for `wasm32` and kept behind small owning handles so every timed or
//! looping behaviour can be cancelled.
//!
//! Initialization is a single entry point: the host page calls the exported
//! `boot()` after its structure has loaded. Every element lookup is
//! null-guarded; a missing container degrades that one component to a no-op
//! rather than failing the page.
//!
//! ## Example (pure core)
//!
//! ```rust
//! use polyfolio::particles::point::{link_alpha, Bounds, Particle};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let bounds = Bounds { width: 800.0, height: 600.0 };
//! let mut rng = SmallRng::seed_from_u64(13);
//! let mut p = Particle::spawn(&bounds, &mut rng);
//! p.step(&bounds);
//! assert!(p.x >= 0.0 && p.x <= bounds.width);
//! assert!(link_alpha(150.0).is_none());
//! ```

#![deny(missing_docs)]

pub mod catalog;
pub mod nav;
pub mod particles;
pub mod projects;
pub mod reveal;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod schedule;

/// Polyfolio version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    /// Module initialization: install the panic hook so failures land in the
    /// browser console instead of vanishing.
    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
    }

    /// Page entry point. The host page calls this once after its structural
    /// content has finished loading; repeated calls are ignored.
    #[wasm_bindgen]
    pub fn boot() -> Result<(), JsValue> {
        crate::app::boot()
    }

    /// Tear down every live effect (frame loop, timers, observer). The page
    /// never needs this before unload; it exists for clean teardown and for
    /// host pages that swap content in and out.
    #[wasm_bindgen]
    pub fn shutdown() {
        crate::app::shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION, "0.1.0");
    }
}
