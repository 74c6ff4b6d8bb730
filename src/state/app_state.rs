// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AuthState, BookState, ToastState};

/// Estado global: los dos contenedores mutables (credenciales y libros) más
/// la cola de toasts. Propiedad exclusiva de la vista de nivel superior.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub books: BookState,
    pub toasts: ToastState,

    // Reactivity: callbacks para re-render completo
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            books: BookState::new(),
            toasts: ToastState::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado que requieren re-render
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
