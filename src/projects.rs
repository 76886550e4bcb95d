//! Project grid renderer: one card per catalog record, in catalog order.
//!
//! Cards carry the `reveal` class plus an incremental transition delay so
//! they cascade in when the scroll observer activates them. The whole card
//! is one activation target; clicking anywhere on it opens the record's
//! link in a new browsing context.

/// Id of the grid container the cards render into.
pub const GRID_ID: &str = "projects-grid";

/// Reveal-transition delay for card `index`, in milliseconds.
pub fn reveal_delay_ms(index: usize) -> i32 {
    index as i32 * 100
}

#[cfg(target_arch = "wasm32")]
pub use web::render;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::catalog::Project;
    use crate::dom;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element};

    /// Render `projects` into `#projects-grid`, replacing whatever was
    /// there. A missing grid is a no-op; an empty slice renders zero cards.
    /// Returns the number of cards rendered.
    pub fn render(document: &Document, projects: &[Project]) -> Result<usize, JsValue> {
        let Some(grid) = dom::by_id(document, GRID_ID) else {
            return Ok(0);
        };

        grid.set_inner_html("");
        for (index, project) in projects.iter().enumerate() {
            let card = build_card(document, project, index)?;
            open_link_on_click(&card, project.link)?;
            grid.append_child(&card)?;
        }
        Ok(projects.len())
    }

    fn build_card(document: &Document, project: &Project, index: usize) -> Result<Element, JsValue> {
        let card = document.create_element("article")?;
        card.set_class_name("project-card reveal");
        card.set_attribute(
            "style",
            &format!("transition-delay: {}ms", reveal_delay_ms(index)),
        )?;

        let image_container = document.create_element("div")?;
        image_container.set_class_name("project-image-container");

        let image = document.create_element("img")?;
        image.set_class_name("project-image");
        image.set_attribute("src", project.image)?;
        image.set_attribute("alt", project.title)?;
        image_container.append_child(&image)?;

        let overlay = document.create_element("div")?;
        overlay.set_class_name("project-overlay");
        let icon = document.create_element("i")?;
        icon.set_class_name("fas fa-external-link-alt");
        overlay.append_child(&icon)?;
        image_container.append_child(&overlay)?;
        card.append_child(&image_container)?;

        let info = document.create_element("div")?;
        info.set_class_name("project-info");

        let title = document.create_element("h3")?;
        title.set_class_name("project-title");
        title.set_text_content(Some(project.title));
        info.append_child(&title)?;

        let description = document.create_element("p")?;
        description.set_class_name("project-desc");
        description.set_text_content(Some(project.description));
        info.append_child(&description)?;

        let tags = document.create_element("div")?;
        tags.set_class_name("project-tags");
        for tag in project.tags {
            let badge = document.create_element("span")?;
            badge.set_class_name("tag");
            badge.set_text_content(Some(tag));
            tags.append_child(&badge)?;
        }
        info.append_child(&tags)?;
        card.append_child(&info)?;

        Ok(card)
    }

    /// One click listener per card; each activation issues exactly one open
    /// of this card's link. The `#` placeholder passes through untouched.
    fn open_link_on_click(card: &Element, link: &'static str) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(window) = dom::window() {
                let _ = window.open_with_url_and_target(link, "_blank");
            }
        }) as Box<dyn FnMut()>);
        card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_cascade_100ms_apart() {
        assert_eq!(reveal_delay_ms(0), 0);
        assert_eq!(reveal_delay_ms(1), 100);
        assert_eq!(reveal_delay_ms(2), 200);
    }
}
