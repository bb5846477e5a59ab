// ============================================================================
// HOME VIEW - Vista de la ruta raíz
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::store::Store;

/// Renderizar la vista home (ruta "/")
pub fn render_home(_store: &Store) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h1")?.text("Welcome 👋").build();
    let line = ElementBuilder::new("p")?
        .text("The app shell is up and running.")
        .build();

    let container = ElementBuilder::new("main")?
        .class("home")
        .child(heading)?
        .child(line)?
        .build();

    Ok(container)
}
