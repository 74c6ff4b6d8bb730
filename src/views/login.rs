// ============================================================================
// LOGIN VIEW - Formulario de login o control de logout
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, input_value, on_click, on_input, on_submit, set_attribute,
    set_class_name, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

/// Renderizar el panel de autenticación: formulario si no hay sesión, botón
/// de logout si la hay (la sesión se considera activa cuando el refresh_token
/// no está vacío).
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("auth-panel").build();

    if state.auth.is_logged_in() {
        let logout_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-logout")
            .text("Logout")
            .build();

        {
            let state = state.clone();
            on_click(&logout_btn, move |_| {
                SessionViewModel::new().logout(&state);
            })?;
        }

        append_child(&panel, &logout_btn)?;
        return Ok(panel);
    }

    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    // Input email: muta el campo del estado en cada pulsación. El value se
    // precarga desde el estado para sobrevivir a los re-render completos.
    let email_input = create_element("input")?;
    set_attribute(&email_input, "type", "email")?;
    set_attribute(&email_input, "name", "email")?;
    set_attribute(&email_input, "placeholder", "input email")?;
    set_attribute(&email_input, "value", &state.auth.get_input().email)?;
    set_class_name(&email_input, "form-input");
    {
        let auth = state.auth.clone();
        on_input(&email_input, move |e| {
            if let Some(value) = input_value(&e) {
                auth.set_email(value);
            }
        })?;
    }

    // Input password
    let password_input = create_element("input")?;
    set_attribute(&password_input, "type", "password")?;
    set_attribute(&password_input, "name", "password")?;
    set_attribute(&password_input, "placeholder", "input password")?;
    set_attribute(&password_input, "value", &state.auth.get_input().password)?;
    set_class_name(&password_input, "form-input");
    {
        let auth = state.auth.clone();
        on_input(&password_input, move |e| {
            if let Some(value) = input_value(&e) {
                auth.set_password(value);
            }
        })?;
    }

    // Botón de login: refleja el flag de login pendiente
    let loading = state.auth.get_loading();
    let login_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text(if loading { "Logging in..." } else { "Login" })
        .build();
    if loading {
        set_attribute(&login_btn, "disabled", "true")?;
    }

    // Submit: sin validación local, el backend responde con el error
    // estructurado y el despachador lo convierte en toast
    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();

            let state = state.clone();
            spawn_local(async move {
                SessionViewModel::new().login(&state).await;
            });
        })?;
    }

    append_child(&form, &email_input)?;
    append_child(&form, &password_input)?;
    append_child(&form, &login_btn)?;
    append_child(&panel, &form)?;

    Ok(panel)
}
