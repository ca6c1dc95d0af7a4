//! Login screen
//!
//! Holds the two form fields as local state. Submitting hands the values to
//! the injected [`Authenticator`]; on success the router moves to `main` and
//! clears everything back to and including `welcome`, so back navigation can
//! never return to the login form.

use std::rc::Rc;

use app_core::{AuthOutcome, Authenticator, Credentials};

use crate::components::{
    Alignment, Button, Container, Input, JustifyContent, Spacer, Spacing, Text, ViewNode,
};
use crate::navigation::{NavOptions, Route, Router};
use crate::theme::brand;
use crate::tokens::spacing;
use crate::typography::TypographyVariant;

use super::{not_implemented, EventOutcome, Result, Screen, ScreenError, UiEvent};

/// Route name
pub const ROUTE: &str = "login";
/// Identifier field id
pub const IDENTIFIER_FIELD: &str = "identifier";
/// Password field id
pub const PASSWORD_FIELD: &str = "password";
/// Text change handler shared by both fields
pub const FIELD_CHANGED: &str = "login.field_changed";
/// Submit button handler
pub const SUBMIT: &str = "login.submit";
/// Forgot password link handler
pub const FORGOT_PASSWORD: &str = "login.forgot_password";

/// Login form
pub struct LoginScreen {
    identifier: String,
    password: String,
    authenticator: Rc<dyn Authenticator>,
}

impl LoginScreen {
    /// Create an empty form
    pub fn new(authenticator: Rc<dyn Authenticator>) -> Self {
        Self {
            identifier: String::new(),
            password: String::new(),
            authenticator,
        }
    }

    /// Current form values
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.identifier.clone(), self.password.clone())
    }

    fn submit(&self, router: &mut Router) -> Result<EventOutcome> {
        let outcome = self.authenticator.authenticate(&self.credentials())?;
        if outcome == AuthOutcome::Unverified {
            tracing::warn!("entering main without verified credentials");
        }
        // Drop the whole outer stack; the session may have started at login
        let root = router.stack().root();
        router.navigate(Route::Main, NavOptions::clear_to(root));
        Ok(EventOutcome::Navigated)
    }
}

impl std::fmt::Debug for LoginScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginScreen")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Screen for LoginScreen {
    fn route_name(&self) -> &'static str {
        ROUTE
    }

    fn render(&self) -> ViewNode {
        Container::column()
            .with_justify(JustifyContent::Center)
            .with_align(Alignment::Start)
            .with_padding(Spacing::uniform(spacing::SPACE_XL))
            .child(
                Text::new("Iniciar sesión")
                    .with_variant(TypographyVariant::HeadlineLarge)
                    .bold(),
            )
            .child(Spacer::fixed(spacing::SPACE_SM))
            .child(Text::new("Accede con tu correo electrónico o cédula").with_color(brand::GRAY))
            .child(Spacer::fixed(spacing::SPACE_2XL))
            .child(
                Input::new(IDENTIFIER_FIELD)
                    .with_label("Correo o Cédula")
                    .with_value(self.identifier.clone())
                    .on_change(FIELD_CHANGED),
            )
            .child(Spacer::fixed(spacing::SPACE_LG))
            .child(
                Input::password(PASSWORD_FIELD)
                    .with_label("Contraseña")
                    .with_value(self.password.clone())
                    .on_change(FIELD_CHANGED),
            )
            .child(Spacer::fixed(spacing::SPACE_SM))
            .child(
                Button::text("¿Olvidaste tu contraseña?")
                    .with_text_color(brand::PRIMARY)
                    .align_self(Alignment::End)
                    .on_press(FORGOT_PASSWORD),
            )
            .child(Spacer::fixed(spacing::SPACE_XL))
            .child(Button::primary("Iniciar sesión", brand::PRIMARY).on_press(SUBMIT))
            .into()
    }

    fn handle_event(&mut self, event: &UiEvent, router: &mut Router) -> Result<EventOutcome> {
        match event {
            UiEvent::TextChanged { field, value } => {
                match field.as_str() {
                    IDENTIFIER_FIELD => self.identifier = value.clone(),
                    PASSWORD_FIELD => self.password = value.clone(),
                    other => return Err(ScreenError::UnknownField(other.to_string())),
                }
                Ok(EventOutcome::Handled)
            }
            UiEvent::Press { handler, .. } if handler == SUBMIT => self.submit(router),
            UiEvent::Press { handler, .. } if handler == FORGOT_PASSWORD => {
                Ok(not_implemented(ROUTE, "forgot_password"))
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::MockAuth;
    use app_core::{AcceptAllAuthenticator, AuthError};

    fn at_login() -> Router {
        let mut router = Router::new();
        router.navigate(Route::Login, NavOptions::new());
        router
    }

    #[test]
    fn test_render_fields() {
        let screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let tree = screen.render();

        let identifier = tree.find_input(IDENTIFIER_FIELD).unwrap();
        assert_eq!(identifier.label.as_deref(), Some("Correo o Cédula"));
        assert!(!identifier.is_masked());

        let password = tree.find_input(PASSWORD_FIELD).unwrap();
        assert_eq!(password.label.as_deref(), Some("Contraseña"));
        assert!(password.is_masked());

        assert!(tree.contains_text("¿Olvidaste tu contraseña?"));
        assert!(tree.find_button(SUBMIT).is_some());
    }

    #[test]
    fn test_text_changes_update_state() {
        let mut screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let mut router = at_login();

        screen
            .handle_event(&UiEvent::text_changed(IDENTIFIER_FIELD, "maria@example.com"), &mut router)
            .unwrap();
        screen
            .handle_event(&UiEvent::text_changed(PASSWORD_FIELD, "secreta"), &mut router)
            .unwrap();

        assert_eq!(
            screen.credentials(),
            Credentials::new("maria@example.com", "secreta")
        );
        let tree = screen.render();
        assert_eq!(tree.find_input(PASSWORD_FIELD).unwrap().value, "secreta");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let mut router = at_login();
        let err = screen
            .handle_event(&UiEvent::text_changed("otp", "123"), &mut router)
            .unwrap_err();
        assert!(matches!(err, ScreenError::UnknownField(ref f) if f == "otp"));
    }

    #[test]
    fn test_submit_passes_credentials_and_clears_stack() {
        let mut auth = MockAuth::new();
        auth.expect_authenticate()
            .withf(|c| c.identifier == "1712345678" && c.password == "clave")
            .times(1)
            .returning(|_| Ok(AuthOutcome::Verified));

        let mut screen = LoginScreen::new(Rc::new(auth));
        let mut router = at_login();
        screen
            .handle_event(&UiEvent::text_changed(IDENTIFIER_FIELD, "1712345678"), &mut router)
            .unwrap();
        screen
            .handle_event(&UiEvent::text_changed(PASSWORD_FIELD, "clave"), &mut router)
            .unwrap();

        let outcome = screen.handle_event(&UiEvent::press(SUBMIT), &mut router).unwrap();
        assert_eq!(outcome, EventOutcome::Navigated);
        assert_eq!(router.back_stack(), vec![Route::Main]);
    }

    #[test]
    fn test_empty_submission_is_accepted_by_default() {
        let mut screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let mut router = at_login();
        screen.handle_event(&UiEvent::press(SUBMIT), &mut router).unwrap();
        assert_eq!(router.current_route(), Route::Main);
    }

    #[test]
    fn test_submit_clears_stack_when_started_at_login() {
        let mut screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let mut router = Router::with_start(Route::Login);
        screen.handle_event(&UiEvent::press(SUBMIT), &mut router).unwrap();

        assert_eq!(router.back_stack(), vec![Route::Main]);
        assert!(!router.go_back());
        assert!(!router.stack().contains(Route::Login));
    }

    #[test]
    fn test_auth_failure_stays_on_login() {
        let mut auth = MockAuth::new();
        auth.expect_authenticate()
            .returning(|_| Err(AuthError::InvalidCredentials));

        let mut screen = LoginScreen::new(Rc::new(auth));
        let mut router = at_login();
        let err = screen
            .handle_event(&UiEvent::press(SUBMIT), &mut router)
            .unwrap_err();
        assert!(matches!(err, ScreenError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(router.current_route(), Route::Login);
    }

    #[test]
    fn test_forgot_password_not_implemented() {
        let mut screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let mut router = at_login();
        let outcome = screen
            .handle_event(&UiEvent::press(FORGOT_PASSWORD), &mut router)
            .unwrap();
        assert_eq!(
            outcome,
            EventOutcome::NotImplemented("forgot_password".to_string())
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut screen = LoginScreen::new(Rc::new(AcceptAllAuthenticator));
        let mut router = at_login();
        screen
            .handle_event(&UiEvent::text_changed(PASSWORD_FIELD, "s3cret"), &mut router)
            .unwrap();
        assert!(!format!("{:?}", screen).contains("s3cret"));
    }
}
