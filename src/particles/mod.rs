//! Ambient particle field: a fixed pool of drifting points on a
//! full-viewport canvas, with proximity lines between close pairs.
//!
//! The motion and link math is target-independent ([`point`]); canvas
//! ownership, the resize-rebuild cycle, and the frame loop are wasm-only
//! ([`field`] via the re-exports below).

pub mod point;

#[cfg(target_arch = "wasm32")]
mod field;

#[cfg(target_arch = "wasm32")]
pub use field::{start, FieldHandle, CANVAS_ID};

pub use point::{link_alpha, spawn_pool, Bounds, Particle, LINK_DISTANCE, POOL_SIZE};
