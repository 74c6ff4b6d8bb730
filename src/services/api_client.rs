// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra la URL base
// fija y decodifica el cuerpo JSON de las respuestas 2xx.
// ============================================================================

use std::fmt;

use gloo_net::http::{Request, Response};

use crate::models::{Book, Credentials, ErrorResponse, LoginInput};
use crate::utils::constants::BACKEND_URL;

/// Fallo de una llamada HTTP.
///
/// `Server` llega cuando hubo respuesta con status non-2xx; `payload` es
/// `Some` si el cuerpo parsea como el error estructurado del backend.
/// `Transport` cubre el resto: fallo de red, de construcción del request o
/// de decodificación, con un código corto estable y el mensaje subyacente.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Server {
        status: u16,
        payload: Option<ErrorResponse>,
    },
    Transport {
        code: String,
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server {
                status,
                payload: Some(payload),
            } => write!(f, "HTTP {}: {}", status, payload.error),
            ApiError::Server {
                status,
                payload: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Transport { code, message } => write!(f, "{}: {}", code, message),
        }
    }
}

impl std::error::Error for ApiError {}

fn transport_error(err: gloo_net::Error) -> ApiError {
    let code = match &err {
        gloo_net::Error::JsError(_) => "ERR_NETWORK",
        gloo_net::Error::SerdeError(_) => "ERR_PARSE",
        gloo_net::Error::GlooError(_) => "ERR_REQUEST",
    };
    ApiError::Transport {
        code: code.to_string(),
        message: err.to_string(),
    }
}

async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    // Si el cuerpo no es un ErrorResponse válido, el despachador lo trata
    // como fallo sin payload estructurado
    let payload = response.json::<ErrorResponse>().await.ok();
    ApiError::Server { status, payload }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login contra el servicio de autenticación. El cuerpo 2xx son las
    /// credenciales completas (access + refresh token).
    pub async fn login(&self, input: &LoginInput) -> Result<Credentials, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let request = LoginRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        };

        log::info!("🔐 Iniciando sesión para: {}", input.email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            return Err(server_error(response).await);
        }

        response.json::<Credentials>().await.map_err(transport_error)
    }

    /// Pedir un refresh de token. Devuelve el status HTTP para que el caller
    /// compruebe el 201 del servicio.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<u16, ApiError> {
        let url = format!("{}/auth/refresh-token", self.base_url);
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };

        log::info!("🔄 Solicitando refresh de token");

        let response = Request::post(&url)
            .json(&request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            return Err(server_error(response).await);
        }

        Ok(response.status())
    }

    /// Obtener el catálogo de libros. Las credenciales del navegador viajan
    /// con el request (cookies); los tokens almacenados no se envían como
    /// headers.
    pub async fn get_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/books", self.base_url);

        log::info!("📚 Obteniendo libros");

        let response = Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            return Err(server_error(response).await);
        }

        let books = response.json::<Vec<Book>>().await.map_err(transport_error)?;
        log::info!("✅ {} libros recibidos", books.len());
        Ok(books)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(serde::Serialize)]
struct RefreshTokenRequest {
    refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_codes() {
        let gloo_err = gloo_net::Error::GlooError("request build failed".to_string());
        match transport_error(gloo_err) {
            ApiError::Transport { code, message } => {
                assert_eq!(code, "ERR_REQUEST");
                assert!(message.contains("request build failed"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        match transport_error(gloo_net::Error::SerdeError(serde_err)) {
            ApiError::Transport { code, .. } => assert_eq!(code, "ERR_PARSE"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Server {
            status: 401,
            payload: Some(ErrorResponse {
                status_code: 401,
                message: vec!["unauthorized".to_string()],
                error: "Unauthorized".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");

        let err = ApiError::Transport {
            code: "ERR_NETWORK".to_string(),
            message: "failed to fetch".to_string(),
        };
        assert_eq!(err.to_string(), "ERR_NETWORK: failed to fetch");
    }
}
