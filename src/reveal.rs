//! Scroll-triggered reveals: a one-shot `active` class the first time an
//! element is 10% visible, with staggered activation for timeline items.
//!
//! Activation never reverses; scrolling an element back out of view leaves
//! its class in place. The observer keeps watching after activation (adding
//! the class again is a no-op), which matches the page's original behaviour.

/// Selector for everything that reveals on first visibility.
pub const REVEAL_SELECTOR: &str = ".section-title, .award-item, .paper-item, .reveal";

/// Class naming the distinguished container whose children stagger in.
pub const TIMELINE_CLASS: &str = "timeline";

/// Selector form of [`TIMELINE_CLASS`].
pub const TIMELINE_SELECTOR: &str = ".timeline";

/// Immediate children of the timeline that activate individually.
pub const TIMELINE_ITEM_SELECTOR: &str = ".timeline-item";

/// Class applied before observation so CSS can stage the hidden state.
pub const REVEAL_CLASS: &str = "reveal";

/// Class that makes a revealed element visible, permanently.
pub const ACTIVE_CLASS: &str = "active";

/// Fraction of an element that must be visible to trigger its reveal.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Activation delay for timeline item `index`: 200ms lead-in, then 300ms
/// between items, so items land at +200, +500, +800, ...
pub fn stagger_delay_ms(index: usize) -> i32 {
    index as i32 * 300 + 200
}

#[cfg(target_arch = "wasm32")]
pub use web::{start, RevealHandle};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::dom;
    use crate::schedule::Delay;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    /// Owns the live observer; `disconnect` stops all future reveals.
    pub struct RevealHandle {
        observer: IntersectionObserver,
    }

    impl RevealHandle {
        /// Stop observing everything. Already-activated elements keep their
        /// class.
        pub fn disconnect(&self) {
            self.observer.disconnect();
        }
    }

    /// Register every reveal target plus the timeline container with a
    /// 10%-visibility observer.
    pub fn start(document: &Document) -> Result<RevealHandle, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(ACTIVE_CLASS);
                    if target.class_list().contains(TIMELINE_CLASS) {
                        stagger_timeline(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for element in dom::query_all(document, REVEAL_SELECTOR) {
            let _ = element.class_list().add_1(REVEAL_CLASS);
            observer.observe(&element);
        }
        if let Some(timeline) = dom::query(document, TIMELINE_SELECTOR) {
            observer.observe(&timeline);
        }

        Ok(RevealHandle { observer })
    }

    /// Activate each timeline item on its own delayed timer. The handles
    /// are dropped: an unowned delay still fires, and nothing ever needs to
    /// cancel a stagger mid-flight.
    fn stagger_timeline(container: &Element) {
        for (index, item) in dom::query_all_within(container, TIMELINE_ITEM_SELECTOR)
            .into_iter()
            .enumerate()
        {
            let _ = Delay::start(stagger_delay_ms(index), move || {
                let _ = item.class_list().add_1(ACTIVE_CLASS);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_schedule() {
        assert_eq!(stagger_delay_ms(0), 200);
        assert_eq!(stagger_delay_ms(1), 500);
        assert_eq!(stagger_delay_ms(2), 800);
    }

    #[test]
    fn test_stagger_is_ascending_with_fixed_gap() {
        for index in 0..16 {
            let gap = stagger_delay_ms(index + 1) - stagger_delay_ms(index);
            assert_eq!(gap, 300);
        }
    }

    #[test]
    fn test_selector_covers_all_reveal_kinds() {
        for class in [".section-title", ".award-item", ".paper-item", ".reveal"] {
            assert!(REVEAL_SELECTOR.contains(class));
        }
        assert!(!REVEAL_SELECTOR.contains(TIMELINE_SELECTOR));
    }

    #[test]
    fn test_threshold_is_ten_percent() {
        assert_eq!(VISIBILITY_THRESHOLD, 0.1);
    }
}
