use serde::{Deserialize, Serialize};

/// Par de tokens que representa la sesión. Se reemplaza al completo en cada
/// login y vuelve a su valor vacío en logout.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
}

/// Valores del formulario de login, mutados campo a campo según teclea el usuario.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}
