// ============================================================================
// TOAST VIEW - Pintado del stack de notificaciones
// ============================================================================
// El contenedor es fijo y se repinta entero en cada cambio de la cola, sin
// pasar por el re-render completo de la app (así el texto tecleado en el
// formulario no se pierde por una notificación).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html, ElementBuilder};
use crate::state::{AppState, ToastState, ToastStatus};

pub const TOAST_ROOT_ID: &str = "toast-root";

/// Crear el contenedor fijo y pintar la cola actual
pub fn render_toast_root(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .id(TOAST_ROOT_ID)?
        .class("toast-root")
        .build();
    render_toasts_into(&root, &state.toasts)?;
    Ok(root)
}

/// Repintar el stack dentro del contenedor fijo (llamado por el subscriber
/// de ToastState)
pub fn refresh_toasts(toasts: &ToastState) {
    if let Some(root) = get_element_by_id(TOAST_ROOT_ID) {
        if let Err(e) = render_toasts_into(&root, toasts) {
            log::error!("❌ Error repintando toasts: {:?}", e);
        }
    }
}

fn render_toasts_into(root: &Element, toasts: &ToastState) -> Result<(), JsValue> {
    set_inner_html(root, "");

    for toast in toasts.get_toasts() {
        let class = match toast.status {
            ToastStatus::Error => "toast toast-error",
            ToastStatus::Info => "toast toast-info",
        };

        let title = ElementBuilder::new("div")?
            .class("toast-title")
            .text(&toast.title)
            .build();
        let description = ElementBuilder::new("div")?
            .class("toast-description")
            .text(&toast.description)
            .build();
        let item = ElementBuilder::new("div")?
            .class(class)
            .child(&title)?
            .child(&description)?
            .build();

        // Click descarta el toast antes del auto-dismiss
        {
            let toasts = toasts.clone();
            let id = toast.id;
            on_click(&item, move |_| {
                toasts.dismiss(id);
            })?;
        }

        append_child(root, &item)?;
    }

    Ok(())
}
