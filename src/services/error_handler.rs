// ============================================================================
// ERROR HANDLER - Despacho compartido de llamadas fallidas
// ============================================================================
// Centraliza qué hacer con un ApiError para que los callers no dupliquen la
// lógica de notificación: toast de error, o delegación silenciosa del 401 al
// callback de recuperación cuando el caller optó por ello.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::api_client::ApiError;
use crate::state::ToastState;

/// Política opt-in para desviar un 401 hacia un callback de recuperación en
/// lugar de mostrar una notificación. El refresh del token y el reintento de
/// la llamada original son responsabilidad del callback, no de este módulo.
#[derive(Clone)]
pub struct Custom401 {
    pub enabled: bool,
    pub on_unauthorized: Rc<dyn Fn()>,
}

/// Despachar una llamada fallida.
///
/// - Con payload estructurado y política 401 activa: invoca el callback,
///   limpia el flag pendiente si se pasó y no muestra toast.
/// - Con payload estructurado en el resto de casos: toast de error titulado
///   con el statusCode y descrito por el array `message` serializado. El flag
///   pendiente queda intacto en esta rama (ver DESIGN.md).
/// - Sin payload estructurado: toast con el código de transporte (o el status
///   HTTP) y limpieza del flag pendiente.
pub fn handle_api_error(
    err: &ApiError,
    toasts: &ToastState,
    loading: Option<&Rc<RefCell<bool>>>,
    custom_401: Option<&Custom401>,
) {
    match err {
        ApiError::Server {
            payload: Some(payload),
            ..
        } => {
            let redirect_401 =
                custom_401.map_or(false, |policy| policy.enabled) && payload.status_code == 401;

            if redirect_401 {
                if let Some(policy) = custom_401 {
                    (policy.on_unauthorized)();
                }
                if let Some(flag) = loading {
                    *flag.borrow_mut() = false;
                }
                return;
            }

            let description = serde_json::to_string(&payload.message)
                .unwrap_or_else(|_| payload.error.clone());
            toasts.error(&payload.status_code.to_string(), &description);
        }
        ApiError::Server {
            status,
            payload: None,
        } => {
            toasts.error(
                &status.to_string(),
                &format!("Request failed with status code {}", status),
            );
            if let Some(flag) = loading {
                *flag.borrow_mut() = false;
            }
        }
        ApiError::Transport { code, message } => {
            log::error!("❌ Fallo de transporte: {}", err);
            toasts.error(code, message);
            if let Some(flag) = loading {
                *flag.borrow_mut() = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorResponse;
    use crate::state::ToastStatus;
    use std::cell::Cell;

    fn structured(status: u16, message: &str, error: &str) -> ApiError {
        ApiError::Server {
            status,
            payload: Some(ErrorResponse {
                status_code: status,
                message: vec![message.to_string()],
                error: error.to_string(),
            }),
        }
    }

    fn pending_flag() -> Rc<RefCell<bool>> {
        Rc::new(RefCell::new(true))
    }

    #[test]
    fn test_401_with_policy_invokes_callback_without_toast() {
        let toasts = ToastState::new();
        let loading = pending_flag();
        let invoked = Rc::new(Cell::new(false));

        let policy = Custom401 {
            enabled: true,
            on_unauthorized: {
                let invoked = invoked.clone();
                Rc::new(move || invoked.set(true))
            },
        };

        handle_api_error(
            &structured(401, "unauthorized", "Unauthorized"),
            &toasts,
            Some(&loading),
            Some(&policy),
        );

        assert!(invoked.get());
        assert!(toasts.get_toasts().is_empty());
        assert!(!*loading.borrow());
    }

    #[test]
    fn test_401_without_policy_shows_error_toast() {
        let toasts = ToastState::new();

        handle_api_error(
            &structured(401, "unauthorized", "Unauthorized"),
            &toasts,
            None,
            None,
        );

        let queue = toasts.get_toasts();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].status, ToastStatus::Error);
        assert_eq!(queue[0].title, "401");
    }

    #[test]
    fn test_403_with_policy_still_shows_toast_and_skips_callback() {
        let toasts = ToastState::new();
        let invoked = Rc::new(Cell::new(false));

        let policy = Custom401 {
            enabled: true,
            on_unauthorized: {
                let invoked = invoked.clone();
                Rc::new(move || invoked.set(true))
            },
        };

        handle_api_error(
            &structured(403, "forbidden", "Forbidden"),
            &toasts,
            None,
            Some(&policy),
        );

        assert!(!invoked.get());
        let queue = toasts.get_toasts();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].title, "403");
        assert_eq!(queue[0].description, r#"["forbidden"]"#);
    }

    #[test]
    fn test_disabled_policy_behaves_like_no_policy() {
        let toasts = ToastState::new();
        let invoked = Rc::new(Cell::new(false));

        let policy = Custom401 {
            enabled: false,
            on_unauthorized: {
                let invoked = invoked.clone();
                Rc::new(move || invoked.set(true))
            },
        };

        handle_api_error(
            &structured(401, "unauthorized", "Unauthorized"),
            &toasts,
            None,
            Some(&policy),
        );

        assert!(!invoked.get());
        assert_eq!(toasts.get_toasts().len(), 1);
    }

    #[test]
    fn test_structured_non_401_leaves_pending_flag_set() {
        // La rama con payload estructurado no toca el flag pendiente
        // (ver DESIGN.md)
        let toasts = ToastState::new();
        let loading = pending_flag();

        handle_api_error(
            &structured(400, "email must be an email", "Bad Request"),
            &toasts,
            Some(&loading),
            None,
        );

        assert_eq!(toasts.get_toasts().len(), 1);
        assert!(*loading.borrow());
    }

    #[test]
    fn test_transport_error_clears_pending_flag() {
        let toasts = ToastState::new();
        let loading = pending_flag();

        handle_api_error(
            &ApiError::Transport {
                code: "ERR_NETWORK".to_string(),
                message: "failed to fetch".to_string(),
            },
            &toasts,
            Some(&loading),
            None,
        );

        let queue = toasts.get_toasts();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].title, "ERR_NETWORK");
        assert_eq!(queue[0].description, "failed to fetch");
        assert!(!*loading.borrow());
    }

    #[test]
    fn test_server_error_without_payload_clears_pending_flag() {
        let toasts = ToastState::new();
        let loading = pending_flag();

        handle_api_error(
            &ApiError::Server {
                status: 500,
                payload: None,
            },
            &toasts,
            Some(&loading),
            None,
        );

        let queue = toasts.get_toasts();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].title, "500");
        assert!(!*loading.borrow());
    }
}
