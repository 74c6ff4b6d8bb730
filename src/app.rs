// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::utils::constants::TOAST_DURATION_MS;
use crate::views::{refresh_toasts, render_app};

/// Aplicación principal: posee el estado global y el elemento raíz
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada sobre #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Re-render completo batcheado ante cambios de estado
        state.subscribe_to_changes(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        // La cola de toasts repinta solo su contenedor y programa el
        // auto-dismiss de cada toast nuevo
        {
            let toasts = state.toasts.clone();
            let scheduled: Rc<RefCell<HashSet<u32>>> = Rc::new(RefCell::new(HashSet::new()));

            state.toasts.subscribe(move || {
                refresh_toasts(&toasts);

                let current = toasts.get_toasts();
                let mut scheduled = scheduled.borrow_mut();
                scheduled.retain(|id| current.iter().any(|toast| toast.id == *id));

                for toast in &current {
                    if scheduled.insert(toast.id) {
                        let toasts = toasts.clone();
                        let id = toast.id;
                        Timeout::new(TOAST_DURATION_MS, move || {
                            toasts.dismiss(id);
                        })
                        .forget();
                    }
                }
            });
        }

        Ok(Self { state, root })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}
