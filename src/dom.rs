//! Thin, null-guarded access to the page structure.
//!
//! Every lookup returns `Option`; callers degrade to no-ops when an
//! expected container is missing instead of raising anything. The page
//! contract (ids and classes) lives with the components that consume it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList, Window};

/// Console logging for the few startup diagnostics.
macro_rules! log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}
pub(crate) use log;

/// The global window, if any.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page document, if any.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Element by id, or `None`.
pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// First match of a selector, or `None` (selector errors included).
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All document-wide matches of a selector, element-typed.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// All matches of a selector under `root`, element-typed.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    elements
}
