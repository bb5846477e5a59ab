// ============================================================================
// DEMO SLICE - Slice de ejemplo del estado
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Action;

/// Nombre de la slice (prefijo de los tags de sus acciones)
pub const SLICE_NAME: &str = "demo";

/// Estado de la slice demo
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoState {
    pub demo: String,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            demo: "this is a demo".to_string(),
        }
    }
}

/// demoAction: acepta cualquier payload, sin validación
#[derive(Clone, Debug)]
pub struct DemoAction {
    pub payload: Value,
}

/// Action creator de demoAction
pub fn demo_action(payload: impl Into<Value>) -> Action {
    Action::Demo(DemoAction {
        payload: payload.into(),
    })
}

/// Reducer de la slice: (estado, acción) -> estado
pub fn reduce(state: DemoState, action: &Action) -> DemoState {
    match action {
        // TODO(demo): definir la mutación real de la slice cuando exista;
        // por ahora la acción se acepta y no cambia nada
        Action::Demo(_action) => state,
        // Cualquier otra acción pasa sin cambios
        _ => state,
    }
}
