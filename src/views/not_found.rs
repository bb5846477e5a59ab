// ============================================================================
// NOT FOUND VIEW - Fallback para cualquier path sin match
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::store::Store;

/// Texto exacto del fallback
pub const NOT_FOUND_TEXT: &str = "There's nothing here!";

/// Renderizar la vista de fallback (contenedor con padding)
pub fn render_not_found(_store: &Store) -> Result<Element, JsValue> {
    let message = ElementBuilder::new("p")?.text(NOT_FOUND_TEXT).build();

    let container = ElementBuilder::new("main")?
        .class("not-found")
        .child(message)?
        .build();

    Ok(container)
}
