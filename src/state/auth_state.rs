// ============================================================================
// AUTH STATE - Credenciales de sesión + formulario de login
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Credentials, LoginInput};

/// Estado de autenticación. Las credenciales solo las muta este contenedor.
#[derive(Clone)]
pub struct AuthState {
    pub credentials: Rc<RefCell<Credentials>>,
    pub input: Rc<RefCell<LoginInput>>,
    pub loading: Rc<RefCell<bool>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            credentials: Rc::new(RefCell::new(Credentials::default())),
            input: Rc::new(RefCell::new(LoginInput::default())),
            loading: Rc::new(RefCell::new(false)),
        }
    }

    /// Reemplazar credenciales al completo (nunca merge parcial)
    pub fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.borrow_mut() = credentials;
    }

    /// Obtener credenciales
    pub fn get_credentials(&self) -> Credentials {
        self.credentials.borrow().clone()
    }

    /// Sesión considerada activa ⇔ refresh_token no vacío.
    /// Es la única comprobación de validez: no hay verificación local de
    /// expiración ni de firma.
    pub fn is_logged_in(&self) -> bool {
        !self.credentials.borrow().refresh_token.is_empty()
    }

    /// Establecer flag de login pendiente
    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    /// Obtener flag de login pendiente
    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Actualizar el campo email del formulario
    pub fn set_email(&self, email: String) {
        self.input.borrow_mut().email = email;
    }

    /// Actualizar el campo password del formulario
    pub fn set_password(&self, password: String) {
        self.input.borrow_mut().password = password;
    }

    /// Obtener los valores actuales del formulario
    pub fn get_input(&self) -> LoginInput {
        self.input.borrow().clone()
    }

    /// Logout: credenciales y formulario vuelven a su valor inicial vacío.
    /// Sin llamada de red.
    pub fn logout(&self) {
        *self.credentials.borrow_mut() = Credentials::default();
        *self.input.borrow_mut() = LoginInput::default();
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success_replaces_credentials_wholesale() {
        let auth = AuthState::new();
        auth.set_credentials(Credentials {
            access_token: "T1".to_string(),
            refresh_token: "R1".to_string(),
        });

        let creds = auth.get_credentials();
        assert_eq!(creds.access_token, "T1");
        assert_eq!(creds.refresh_token, "R1");

        // Un segundo login sustituye el par completo
        auth.set_credentials(Credentials {
            access_token: "T2".to_string(),
            refresh_token: "R2".to_string(),
        });
        assert_eq!(
            auth.get_credentials(),
            Credentials {
                access_token: "T2".to_string(),
                refresh_token: "R2".to_string(),
            }
        );
    }

    #[test]
    fn test_logged_in_iff_refresh_token_present() {
        let auth = AuthState::new();
        assert!(!auth.is_logged_in());

        auth.set_credentials(Credentials {
            access_token: "T1".to_string(),
            refresh_token: "R1".to_string(),
        });
        assert!(auth.is_logged_in());

        // Solo cuenta el refresh_token
        auth.set_credentials(Credentials {
            access_token: "T1".to_string(),
            refresh_token: String::new(),
        });
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_logout_resets_credentials_and_input() {
        let auth = AuthState::new();
        auth.set_credentials(Credentials {
            access_token: "T1".to_string(),
            refresh_token: "R1".to_string(),
        });
        auth.set_email("a@b.com".to_string());
        auth.set_password("x".to_string());

        auth.logout();

        assert_eq!(auth.get_credentials(), Credentials::default());
        assert_eq!(auth.get_input(), LoginInput::default());
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_input_mutated_field_by_field() {
        let auth = AuthState::new();
        auth.set_email("a@b.com".to_string());
        assert_eq!(auth.get_input().email, "a@b.com");
        assert!(auth.get_input().password.is_empty());

        auth.set_password("x".to_string());
        assert_eq!(auth.get_input().email, "a@b.com");
        assert_eq!(auth.get_input().password, "x");
    }
}
