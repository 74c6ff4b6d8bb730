// ============================================================================
// APP VIEW - Layout de nivel superior
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{render_books, render_login, render_toast_root};

/// Renderizar la aplicación completa: panel de autenticación, panel de
/// libros y contenedor de toasts.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let app = ElementBuilder::new("div")?.class("app").build();

    let auth_panel = render_login(state)?;
    let books_panel = render_books(state)?;
    let toast_root = render_toast_root(state)?;

    append_child(&app, &auth_panel)?;
    append_child(&app, &books_panel)?;
    append_child(&app, &toast_root)?;

    Ok(app)
}
