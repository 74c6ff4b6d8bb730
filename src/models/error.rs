use serde::{Deserialize, Serialize};

/// Error estructurado que envía el backend en las respuestas non-2xx.
/// Transitorio: lo consume el despachador de errores y no se persiste.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: Vec<String>,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_decode() {
        let err: ErrorResponse = serde_json::from_str(
            r#"{"statusCode":401,"message":["unauthorized"],"error":"Unauthorized"}"#,
        )
        .unwrap();
        assert_eq!(err.status_code, 401);
        assert_eq!(err.message, vec!["unauthorized".to_string()]);
        assert_eq!(err.error, "Unauthorized");
    }
}
