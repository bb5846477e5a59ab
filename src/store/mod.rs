// ============================================================================
// STORE - Contenedor de estado estilo Redux
// ============================================================================
// Las slices se registran UNA sola vez en compose_store(); la forma del
// estado queda fija a partir de ahí. dispatch() pasa la acción por el reducer
// raíz de forma síncrona y después notifica a los subscribers.
// ============================================================================

pub mod demo;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub use demo::{demo_action, DemoAction, DemoState};

/// Estado raíz: un campo por slice registrada
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub demo: DemoState,
}

/// Acción etiquetada con su slice de origen
#[derive(Clone, Debug)]
pub enum Action {
    /// Acción implícita de inicialización (se despacha al componer el store)
    Init,
    /// Acciones de la slice demo
    Demo(DemoAction),
}

impl Action {
    /// Tag estable de la acción, prefijado con el nombre de su slice
    pub fn type_tag(&self) -> &'static str {
        match self {
            Action::Init => "@@store/init",
            Action::Demo(_) => "demo/demoAction",
        }
    }
}

/// Reducer raíz: delega el sub-estado de cada slice a su reducer
fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        demo: demo::reduce(state.demo, action),
    }
}

type Subscriber = Rc<dyn Fn()>;

/// Store con mutabilidad interior: estado + subscribers
pub struct Store {
    state: RefCell<AppState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl Store {
    fn new(initial: AppState) -> Self {
        Self {
            state: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot del estado actual
    pub fn get_state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Despachar una acción: reducer raíz síncrono + notificación
    pub fn dispatch(&self, action: Action) {
        let next = reduce(self.state.borrow().clone(), &action);
        log::debug!(
            "📦 [STORE] dispatch {} -> {}",
            action.type_tag(),
            serde_json::to_string(&next).unwrap_or_else(|_| "<estado no serializable>".into())
        );
        *self.state.borrow_mut() = next;
        self.notify();
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

/// Punto único de composición: construye el estado raíz a partir del estado
/// inicial de cada slice y despacha la acción de inicialización
pub fn compose_store() -> Rc<Store> {
    let initial = AppState {
        demo: DemoState::default(),
    };

    let store = Rc::new(Store::new(initial));
    store.dispatch(Action::Init);
    log::info!("🧩 [STORE] store compuesto (slices: {})", demo::SLICE_NAME);

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::cell::Cell;

    #[test]
    fn initial_state_is_the_demo_literal() {
        let store = compose_store();
        assert_eq!(
            store.get_state(),
            AppState {
                demo: DemoState {
                    demo: "this is a demo".to_string()
                }
            }
        );
    }

    #[test]
    fn initial_state_shape_as_json() {
        let store = compose_store();
        assert_eq!(
            serde_json::to_value(store.get_state()).unwrap(),
            json!({ "demo": { "demo": "this is a demo" } })
        );
    }

    #[test]
    fn demo_action_is_a_noop_on_state() {
        let store = compose_store();
        let before = store.get_state();

        store.dispatch(demo_action("x"));
        assert_eq!(store.get_state(), before);

        // cualquier payload, mismo resultado
        store.dispatch(demo_action(json!({ "k": [1, 2, 3] })));
        store.dispatch(demo_action(Value::Null));
        assert_eq!(store.get_state(), before);
    }

    #[test]
    fn init_action_passes_through_unchanged() {
        let store = compose_store();
        let before = store.get_state();
        store.dispatch(Action::Init);
        assert_eq!(store.get_state(), before);
    }

    #[test]
    fn subscribers_are_notified_on_every_dispatch() {
        let store = compose_store();
        let count = Rc::new(Cell::new(0));

        let seen = count.clone();
        store.subscribe(move || seen.set(seen.get() + 1));

        store.dispatch(demo_action("x"));
        store.dispatch(demo_action("y"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn action_tags_carry_the_slice_name() {
        let tag = demo_action("x").type_tag();
        assert_eq!(tag, "demo/demoAction");
        assert!(tag.starts_with(demo::SLICE_NAME));
    }
}
