// ============================================================================
// SPA SHELL - Punto de entrada WASM
// ============================================================================
// Arquitectura:
// - Router: tabla ordenada (patrón, vista), gana el primer match
// - Store: contenedor de estado estilo Redux, compuesto UNA vez al arranque
// - Views: funciones que renderizan DOM (sin lógica)
// - Dom: helpers para manipulación DOM
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod router;
pub mod store;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (thread_local: WASM corre en un solo hilo)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook primero, para que los panics lleguen a la consola
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 SPA Shell - entorno: {}", CONFIG.environment);

    let root = match dom::get_element_by_id("app") {
        Some(root) => root,
        None => {
            log::warn!("⚠️ No se encontró #app, no hay donde montar la aplicación");
            return Ok(());
        }
    };

    let mut app = App::new(root)?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listener global de popstate para back/forward del navegador.
    // Se registra UNA sola vez en el arranque: los listeners globales se
    // acumulan si se registran más de una vez.
    if let Some(win) = dom::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("↩️ popstate recibido, re-renderizando");
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // forget() mantiene el closure vivo durante toda la sesión
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la aplicación completa
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
