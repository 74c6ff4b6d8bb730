// ============================================================================
// BOOK LIBRARY APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: acciones de sesión y catálogo
// - Services: SOLO comunicación API + despacho de errores
// - State: contenedores con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia global de App para poder re-renderizar desde cualquier punto
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Book Library App - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la aplicación
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        }
    });
}
