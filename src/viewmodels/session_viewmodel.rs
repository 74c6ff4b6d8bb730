// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Login / Logout / RefreshToken. Llama al ApiClient, muta el estado y delega
// los fallos en el despachador compartido.
// ============================================================================

use crate::services::{handle_api_error, ApiClient};
use crate::state::AppState;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel {
    api_client: ApiClient,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Login: en caso de éxito las credenciales se reemplazan al completo con
    /// el cuerpo de la respuesta. Un login fallido se reporta siempre (sin
    /// política 401) y deja las credenciales intactas.
    pub async fn login(&self, state: &AppState) {
        state.auth.set_loading(true);
        state.notify_subscribers();

        let input = state.auth.get_input();

        match self.api_client.login(&input).await {
            Ok(credentials) => {
                log::info!("✅ [LOGIN] Sesión iniciada");
                state.auth.set_credentials(credentials);
                state.auth.set_loading(false);
                state.notify_subscribers();
            }
            Err(err) => {
                log::error!("❌ [LOGIN] Error: {}", err);
                handle_api_error(&err, &state.toasts, Some(&state.auth.loading), None);
                state.notify_subscribers();
            }
        }
    }

    /// Logout: credenciales y formulario vuelven a su valor inicial vacío.
    /// Sin llamada de red. La lista de libros no se toca (el panel se oculta).
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 [LOGOUT] Cerrando sesión");
        state.auth.logout();
        state.notify_subscribers();
    }

    /// Refresh del token: si el servicio responde 201, solo se notifica al
    /// usuario que reintente la acción original. El token devuelto NO se
    /// aplica al estado y la llamada original NO se reintenta (limitación
    /// conocida, documentada en DESIGN.md).
    pub async fn refresh_token(&self, state: &AppState) {
        let refresh_token = state.auth.get_credentials().refresh_token;

        match self.api_client.refresh_token(&refresh_token).await {
            Ok(201) => {
                state.toasts.info("Refresh", "Please try again");
            }
            Ok(status) => {
                log::warn!("⚠️ [REFRESH] Respuesta {} (se esperaba 201)", status);
            }
            Err(err) => {
                handle_api_error(&err, &state.toasts, None, None);
            }
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
