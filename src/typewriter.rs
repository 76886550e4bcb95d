//! Typewriter effect: reveal a string into an element one character per
//! interval tick.
//!
//! [`Typing`] is the pure reveal state; the wasm-only [`start`] drives it
//! with a repeating timer that stops itself once the full string is shown.
//! A string of `L` characters takes exactly `L` ticks; an empty string is
//! born finished and produces none.

/// Per-character reveal interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: i32 = 50;

/// Class marking the target element while the cursor should blink.
pub const TYPING_CLASS: &str = "typing-cursor";

/// Reveal progress over a fixed string. Counts characters, not bytes, so
/// multi-byte text reveals cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typing {
    text: String,
    shown: usize,
    len: usize,
}

impl Typing {
    /// Start a reveal of `text` with nothing shown yet.
    pub fn new(text: &str) -> Self {
        Typing {
            text: text.to_owned(),
            shown: 0,
            len: text.chars().count(),
        }
    }

    /// Reveal one more character. Returns `false` once everything is shown;
    /// there is no backward deletion and no wrap-around.
    pub fn advance(&mut self) -> bool {
        if self.shown < self.len {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    /// The currently visible prefix.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Whether the full string is shown.
    pub fn is_done(&self) -> bool {
        self.shown == self.len
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{start, TypewriterHandle};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{Typing, TYPING_CLASS};
    use crate::schedule::Interval;
    use wasm_bindgen::JsValue;
    use web_sys::Element;

    /// Cancellation handle for a running reveal. The timer stops on its own
    /// at completion; `cancel` stops it early and leaves the element as-is.
    pub struct TypewriterHandle {
        timer: Interval,
    }

    impl TypewriterHandle {
        /// Stop the reveal where it is.
        pub fn cancel(&self) {
            self.timer.cancel();
        }
    }

    /// Clear `element`, mark it with the typing class, and reveal `text`
    /// into it one character every `interval_ms`.
    pub fn start(
        element: &Element,
        text: &str,
        interval_ms: i32,
    ) -> Result<TypewriterHandle, JsValue> {
        element.set_text_content(Some(""));
        element.class_list().add_1(TYPING_CLASS)?;

        let target = element.clone();
        let mut typing = Typing::new(text);
        let timer = Interval::start(interval_ms, move || {
            if !typing.advance() {
                return false;
            }
            target.set_text_content(Some(typing.visible()));
            !typing.is_done()
        })?;

        Ok(TypewriterHandle { timer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_tick_per_char() {
        let text = "Interest: SLAM, Robotics";
        let mut typing = Typing::new(text);

        let mut ticks = 0;
        while typing.advance() {
            ticks += 1;
        }
        assert_eq!(ticks, text.chars().count());
        assert_eq!(typing.visible(), text);
        assert!(typing.is_done());
    }

    #[test]
    fn test_prefixes_grow_by_one_char() {
        let mut typing = Typing::new("abc");
        assert_eq!(typing.visible(), "");
        typing.advance();
        assert_eq!(typing.visible(), "a");
        typing.advance();
        assert_eq!(typing.visible(), "ab");
        typing.advance();
        assert_eq!(typing.visible(), "abc");
        assert!(!typing.advance());
        assert_eq!(typing.visible(), "abc");
    }

    #[test]
    fn test_empty_string_is_born_done() {
        let mut typing = Typing::new("");
        assert!(typing.is_done());
        assert!(!typing.advance());
        assert_eq!(typing.visible(), "");
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let mut typing = Typing::new("héllo");
        typing.advance();
        typing.advance();
        assert_eq!(typing.visible(), "hé");
        while typing.advance() {}
        assert_eq!(typing.visible(), "héllo");
    }

    #[test]
    fn test_default_interval() {
        assert_eq!(DEFAULT_INTERVAL_MS, 50);
    }
}
