// ============================================================================
// TOAST STATE - Cola de notificaciones tipo toast
// ============================================================================
// Solo muta la cola y avisa a los subscribers; el pintado en DOM y el
// auto-dismiss viven en la capa de vistas. Así el despachador de errores se
// puede testear en el host sin navegador.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastStatus {
    Error,
    Info,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub status: ToastStatus,
    pub title: String,
    pub description: String,
}

/// Cola ordenada de toasts con notificación de cambios
#[derive(Clone)]
pub struct ToastState {
    toasts: Rc<RefCell<Vec<Toast>>>,
    next_id: Rc<RefCell<u32>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(RefCell::new(0)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Emitir un toast de error
    pub fn error(&self, title: &str, description: &str) {
        self.push(ToastStatus::Error, title, description);
    }

    /// Emitir un toast informativo
    pub fn info(&self, title: &str, description: &str) {
        self.push(ToastStatus::Info, title, description);
    }

    fn push(&self, status: ToastStatus, title: &str, description: &str) {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.toasts.borrow_mut().push(Toast {
            id,
            status,
            title: title.to_string(),
            description: description.to_string(),
        });
        self.notify();
    }

    /// Retirar un toast de la cola
    pub fn dismiss(&self, id: u32) {
        self.toasts.borrow_mut().retain(|toast| toast.id != id);
        self.notify();
    }

    /// Obtener la cola actual
    pub fn get_toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    /// Suscribirse a cambios de la cola
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_assigns_ids() {
        let toasts = ToastState::new();
        toasts.error("401", "[\"unauthorized\"]");
        toasts.info("Refresh", "Please try again");

        let queue = toasts.get_toasts();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].status, ToastStatus::Error);
        assert_eq!(queue[0].title, "401");
        assert_eq!(queue[1].status, ToastStatus::Info);
        assert_ne!(queue[0].id, queue[1].id);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let toasts = ToastState::new();
        toasts.error("403", "forbidden");
        toasts.info("Refresh", "Please try again");

        let first_id = toasts.get_toasts()[0].id;
        toasts.dismiss(first_id);

        let queue = toasts.get_toasts();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].title, "Refresh");
    }

    #[test]
    fn test_subscribers_notified_on_push_and_dismiss() {
        use std::cell::Cell;

        let toasts = ToastState::new();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            toasts.subscribe(move || calls.set(calls.get() + 1));
        }

        toasts.error("500", "boom");
        let id = toasts.get_toasts()[0].id;
        toasts.dismiss(id);

        assert_eq!(calls.get(), 2);
    }
}
