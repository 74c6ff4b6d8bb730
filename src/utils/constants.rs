/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:4000 (por defecto)
/// - Producción: via BACKEND_URL env var (ver build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Tiempo que un toast permanece en pantalla antes del auto-dismiss (ms)
pub const TOAST_DURATION_MS: u32 = 5_000;
