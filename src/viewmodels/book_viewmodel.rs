// ============================================================================
// BOOK VIEWMODEL - LÓGICA DEL CATÁLOGO
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::services::{handle_api_error, ApiClient, Custom401};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

/// ViewModel del catálogo de libros
pub struct BookViewModel {
    api_client: ApiClient,
}

impl BookViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Fetch del catálogo: en caso de éxito la lista se reemplaza al
    /// completo. Un 401 se desvía a RefreshToken sin toast de error; el resto
    /// de fallos se notifican por el despachador compartido.
    pub async fn fetch_books(&self, state: &AppState) {
        state.books.set_loading(true);
        state.notify_subscribers();

        match self.api_client.get_books().await {
            Ok(books) => {
                log::info!("📚 [BOOKS] Lista reemplazada: {} libros", books.len());
                state.books.set_books(books);
                state.books.set_loading(false);
                state.notify_subscribers();
            }
            Err(err) => {
                log::error!("❌ [BOOKS] Error: {}", err);

                // Política 401 inyectada: delegar la recuperación en el
                // refresh de token en lugar de mostrar un toast
                let custom_401 = Custom401 {
                    enabled: true,
                    on_unauthorized: {
                        let state = state.clone();
                        Rc::new(move || {
                            let state = state.clone();
                            spawn_local(async move {
                                SessionViewModel::new().refresh_token(&state).await;
                            });
                        })
                    },
                };

                handle_api_error(
                    &err,
                    &state.toasts,
                    Some(&state.books.loading),
                    Some(&custom_401),
                );
                state.notify_subscribers();
            }
        }
    }
}

impl Default for BookViewModel {
    fn default() -> Self {
        Self::new()
    }
}
