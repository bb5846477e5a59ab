// ============================================================================
// APP - Shell principal de la aplicación
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::mount;
use crate::router::Router;
use crate::store::{self, Store};
use crate::views;

/// Aplicación principal: store + router + nodo raíz
pub struct App {
    store: Rc<Store>,
    router: Router,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada sobre el nodo raíz dado
    pub fn new(root: Element) -> Result<Self, JsValue> {
        // Punto único de composición del store: las slices se registran aquí
        // y nunca después
        let store = store::compose_store();

        // Tabla de rutas ordenada; el wildcard queda siempre al final
        let router = Router::with_fallback("not_found", views::render_not_found)
            .route("home", "/", views::render_home);

        // Re-render automático en cada cambio de estado, batcheado con un
        // Timeout(0) para agrupar ráfagas de dispatches en un solo render
        store.subscribe(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { store, router, root })
    }

    /// Renderizar la vista que corresponde al path actual
    pub fn render(&mut self) -> Result<(), JsValue> {
        let path = Router::current_path();
        let route = self.router.resolve(&path);
        log::info!("🧭 [APP] render: path={} ruta={}", path, route.name());

        let view = (route.view())(&self.store)?;
        mount(&self.root, &view)
    }

    /// Navegar a un path y re-renderizar
    pub fn navigate(&mut self, path: &str) -> Result<(), JsValue> {
        Router::push(path)?;
        self.render()
    }

    /// Acceso al store
    pub fn store(&self) -> &Rc<Store> {
        &self.store
    }
}
