//! Mobile navigation toggle.
//!
//! Visibility is an explicit two-state value owned by the binding; style
//! application is a function of that state. The DOM is never read back to
//! infer whether the menu is open, so a toggle round trip always lands
//! where it started.

/// Menu visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Menu list is not displayed.
    Hidden,
    /// Menu list is laid out below the header.
    Shown,
}

impl NavState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            NavState::Hidden => NavState::Shown,
            NavState::Shown => NavState::Hidden,
        }
    }

    /// Whether the menu is currently shown.
    pub fn is_shown(self) -> bool {
        self == NavState::Shown
    }
}

/// Inline presentation applied when the menu opens: a full-width flex
/// column pinned below the 80px header, on a semi-opaque blurred backdrop.
pub const OPEN_STYLE: &[(&str, &str)] = &[
    ("display", "flex"),
    ("position", "absolute"),
    ("top", "80px"),
    ("left", "0"),
    ("width", "100%"),
    ("background", "rgba(10, 10, 10, 0.95)"),
    ("backdrop-filter", "blur(10px)"),
    ("flex-direction", "column"),
    ("padding", "20px"),
    ("text-align", "center"),
    ("border-bottom", "1px solid rgba(255,255,255,0.1)"),
];

/// Selector for the menu activation control.
pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";

/// Selector for the navigation list the toggle shows and hides.
pub const NAV_LIST_SELECTOR: &str = ".nav-list";

/// Class toggled on the button itself so CSS can animate it.
pub const BUTTON_ACTIVE_CLASS: &str = "active";

#[cfg(target_arch = "wasm32")]
pub use web::{bind, NavBinding};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::dom;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    /// Live toggle binding; holds the state the click handler flips.
    pub struct NavBinding {
        state: Rc<Cell<NavState>>,
    }

    impl NavBinding {
        /// Current menu state.
        pub fn state(&self) -> NavState {
            self.state.get()
        }
    }

    /// Bind the click handler. Returns `None` (and binds nothing) when the
    /// button or the list is missing from the page.
    pub fn bind(document: &Document) -> Result<Option<NavBinding>, JsValue> {
        let Some(button) = dom::query(document, MENU_BUTTON_SELECTOR) else {
            return Ok(None);
        };
        let Some(list) = dom::query(document, NAV_LIST_SELECTOR) else {
            return Ok(None);
        };
        let Ok(list) = list.dyn_into::<HtmlElement>() else {
            return Ok(None);
        };

        let state = Rc::new(Cell::new(NavState::Hidden));
        let shared = state.clone();
        let button_for_click = button.clone();
        let closure = Closure::wrap(Box::new(move || {
            let next = shared.get().toggled();
            shared.set(next);
            let _ = button_for_click.class_list().toggle(BUTTON_ACTIVE_CLASS);
            apply(&list, next);
        }) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(Some(NavBinding { state }))
    }

    fn apply(list: &HtmlElement, state: NavState) {
        let style = list.style();
        match state {
            NavState::Shown => {
                for (property, value) in OPEN_STYLE {
                    let _ = style.set_property(property, value);
                }
            }
            NavState::Hidden => {
                let _ = style.set_property("display", "none");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let state = NavState::Hidden;
        let shown = state.toggled();
        assert!(shown.is_shown());
        assert_eq!(shown.toggled(), NavState::Hidden);
    }

    #[test]
    fn test_open_style_lays_out_below_header() {
        let get = |name: &str| {
            OPEN_STYLE
                .iter()
                .find(|(property, _)| *property == name)
                .map(|(_, value)| *value)
        };
        assert_eq!(get("display"), Some("flex"));
        assert_eq!(get("position"), Some("absolute"));
        assert_eq!(get("top"), Some("80px"));
        assert_eq!(get("width"), Some("100%"));
        assert_eq!(get("flex-direction"), Some("column"));
    }

    #[test]
    fn test_open_style_never_hides() {
        assert!(OPEN_STYLE
            .iter()
            .all(|(property, value)| !(*property == "display" && *value == "none")));
    }
}
