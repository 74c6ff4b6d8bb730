// ============================================================================
// BOOKS VIEW - Disparador de fetch + JSON crudo del catálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_attribute, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::BookViewModel;

/// Renderizar el panel de libros. El disparador y el listado solo aparecen
/// con sesión activa; la lista en sí no se borra en logout, solo se oculta.
pub fn render_books(state: &AppState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("books-panel").build();

    let title = ElementBuilder::new("h1")?
        .class("books-title")
        .text("Get All Books")
        .build();
    append_child(&panel, &title)?;

    if !state.auth.is_logged_in() {
        return Ok(panel);
    }

    // Botón de fetch: refleja el flag de fetch pendiente
    let loading = state.books.get_loading();
    let fetch_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-get-books")
        .text(if loading { "Loading..." } else { "Get Books" })
        .build();
    if loading {
        set_attribute(&fetch_btn, "disabled", "true")?;
    }

    {
        let state = state.clone();
        on_click(&fetch_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                BookViewModel::new().fetch_books(&state).await;
            });
        })?;
    }

    append_child(&panel, &fetch_btn)?;

    // Volcado JSON del catálogo, tal cual llegó del backend
    let books = state.books.get_books();
    let json = serde_json::to_string_pretty(&books).unwrap_or_else(|_| "[]".to_string());

    let pre = ElementBuilder::new("pre")?.class("books-json").build();
    let code = ElementBuilder::new("code")?.text(&json).build();
    append_child(&pre, &code)?;
    append_child(&panel, &pre)?;

    Ok(panel)
}
