//! Welcome screen

use crate::components::{
    Alignment, Button, Container, Image, JustifyContent, Spacer, Spacing, Text, TextAlign,
    ViewNode,
};
use crate::navigation::{NavOptions, Route, Router};
use crate::theme::brand;
use crate::tokens::spacing;
use crate::typography::TypographyVariant;

use super::{not_implemented, EventOutcome, Result, Screen, UiEvent};

/// Route name
pub const ROUTE: &str = "welcome";
/// Login button handler
pub const LOGIN: &str = "welcome.login";
/// Register link handler
pub const REGISTER: &str = "welcome.register";

/// Bundled illustration shown above the title
pub const ILLUSTRATION: &str = "hospital_illustration";

/// Landing screen with entry points to login and registration
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeScreen;

impl Screen for WelcomeScreen {
    fn route_name(&self) -> &'static str {
        ROUTE
    }

    fn render(&self) -> ViewNode {
        Container::column()
            .with_align(Alignment::Center)
            .with_justify(JustifyContent::Center)
            .with_padding(Spacing::uniform(spacing::SPACE_XL))
            .with_background(brand::WHITE)
            .child(Image::new(ILLUSTRATION, "Ilustración de hospital").with_weight(1.0))
            .child(
                Text::new("Bienvenido a Paciente App")
                    .with_variant(TypographyVariant::HeadlineSmall)
                    .bold()
                    .with_align(TextAlign::Center),
            )
            .child(Spacer::fixed(spacing::SPACE_SM))
            .child(
                Text::new(
                    "Gestiona tus citas, resultados y turnos del hospital desde tu teléfono.",
                )
                .with_color(brand::GRAY)
                .with_align(TextAlign::Center),
            )
            .child(Spacer::fixed(spacing::SPACE_2XL))
            .child(Button::primary("Iniciar sesión", brand::PRIMARY).on_press(LOGIN))
            .child(Spacer::fixed(spacing::SPACE_LG))
            .child(
                Button::text("¿No tienes cuenta? Regístrate")
                    .with_text_color(brand::GRAY)
                    .with_text_variant(TypographyVariant::BodyLarge)
                    .on_press(REGISTER),
            )
            .child(Spacer::fixed(spacing::SPACE_XL))
            .into()
    }

    fn handle_event(&mut self, event: &UiEvent, router: &mut Router) -> Result<EventOutcome> {
        match event {
            UiEvent::Press { handler, .. } if handler == LOGIN => {
                router.navigate(Route::Login, NavOptions::new());
                Ok(EventOutcome::Navigated)
            }
            UiEvent::Press { handler, .. } if handler == REGISTER => {
                Ok(not_implemented(ROUTE, "register"))
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_content() {
        let tree = WelcomeScreen.render();
        assert_eq!(
            tree.texts(),
            vec![
                "Bienvenido a Paciente App",
                "Gestiona tus citas, resultados y turnos del hospital desde tu teléfono.",
                "Iniciar sesión",
                "¿No tienes cuenta? Regístrate",
            ]
        );

        let mut assets = Vec::new();
        tree.walk(&mut |node| {
            if let ViewNode::Image(img) = node {
                assets.push(img.asset.clone());
            }
        });
        assert_eq!(assets, vec![ILLUSTRATION]);
    }

    #[test]
    fn test_login_press_navigates() {
        let mut router = Router::new();
        let outcome = WelcomeScreen
            .handle_event(&UiEvent::press(LOGIN), &mut router)
            .unwrap();
        assert_eq!(outcome, EventOutcome::Navigated);
        assert_eq!(router.current_route(), Route::Login);
        assert_eq!(router.back_stack(), vec![Route::Welcome, Route::Login]);
    }

    #[test]
    fn test_register_not_implemented() {
        let mut router = Router::new();
        let outcome = WelcomeScreen
            .handle_event(&UiEvent::press(REGISTER), &mut router)
            .unwrap();
        assert_eq!(outcome, EventOutcome::NotImplemented("register".to_string()));
        assert_eq!(router.current_route(), Route::Welcome);
    }

    #[test]
    fn test_unknown_event_ignored() {
        let mut router = Router::new();
        let outcome = WelcomeScreen
            .handle_event(&UiEvent::text_changed("x", "y"), &mut router)
            .unwrap();
        assert_eq!(outcome, EventOutcome::Ignored);
    }
}
