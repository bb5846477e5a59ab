// ============================================================================
// ROUTER - Tabla ordenada de rutas sobre la History API
// ============================================================================
// La tabla se evalúa en orden y gana el primer patrón que hace match. La
// construcción garantiza que el wildcard queda al final, así que resolve()
// es total: un path sin match no puede ocurrir.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;
use crate::store::Store;

/// Firma de las funciones de vista: reciben el store por referencia
pub type ViewFn = fn(&Store) -> Result<Element, JsValue>;

/// Patrón de una regla de navegación
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Match exacto del path completo
    Exact(&'static str),
    /// Match de cualquier path (regla catch-all)
    Wildcard,
}

impl Pattern {
    /// ¿El patrón hace match con el path dado?
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(exact) => *exact == path,
            Pattern::Wildcard => true,
        }
    }
}

/// Una regla de navegación: (patrón, vista)
pub struct Route {
    name: &'static str,
    pattern: Pattern,
    view: ViewFn,
}

impl Route {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn view(&self) -> ViewFn {
        self.view
    }
}

/// Router con tabla ordenada de rutas y fallback wildcard
pub struct Router {
    routes: Vec<Route>,
    fallback: Route,
}

impl Router {
    /// Crear router con su ruta catch-all (se evalúa siempre la última)
    pub fn with_fallback(name: &'static str, view: ViewFn) -> Self {
        Self {
            routes: Vec::new(),
            fallback: Route {
                name,
                pattern: Pattern::Wildcard,
                view,
            },
        }
    }

    /// Registrar una ruta exacta; el orden de registro es el orden de evaluación
    pub fn route(mut self, name: &'static str, path: &'static str, view: ViewFn) -> Self {
        self.routes.push(Route {
            name,
            pattern: Pattern::Exact(path),
            view,
        });
        self
    }

    /// Resolver un path: primer match gana, el wildcard absorbe el resto
    pub fn resolve(&self, path: &str) -> &Route {
        self.routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .unwrap_or(&self.fallback)
    }

    /// Path actual según window.location
    pub fn current_path() -> String {
        dom::window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    /// Empujar una entrada al historial del navegador (sin recargar)
    pub fn push(path: &str) -> Result<(), JsValue> {
        let win = dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
        log::debug!("🧭 [ROUTER] push {}", path);
        win.history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))?;
        Ok(())
    }
}
