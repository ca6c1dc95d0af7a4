//! Navigation Flow Integration Tests
//!
//! End-to-end session tests through the shell: welcome, login, the tab graph
//! and back navigation.

use std::rc::Rc;

use app_core::{AuthError, AuthOutcome, Authenticator, Credentials};
use app_ui::navigation::{NavOptions, Route, Router, Tab};
use app_ui::screens::{login, welcome, EventOutcome, ScreenRegistry, ScreenServices, UiEvent};
use mockall::mock;
use nexo_app::{AppConfig, AppShell, ConfigError, ShellError, TAB_SELECT};
use tempfile::TempDir;

mock! {
    Auth {}
    impl Authenticator for Auth {
        fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError>;
    }
}

fn default_shell() -> AppShell {
    AppShell::from_config(&AppConfig::default()).unwrap()
}

fn log_in(shell: &mut AppShell) {
    shell.dispatch(&UiEvent::press(welcome::LOGIN)).unwrap();
    shell
        .dispatch(&UiEvent::text_changed(login::IDENTIFIER_FIELD, "maria@example.com"))
        .unwrap();
    shell
        .dispatch(&UiEvent::text_changed(login::PASSWORD_FIELD, "clave"))
        .unwrap();
    let outcome = shell.dispatch(&UiEvent::press(login::SUBMIT)).unwrap();
    assert_eq!(outcome, EventOutcome::Navigated);
}

fn select(shell: &mut AppShell, tab: &str) -> EventOutcome {
    shell.dispatch(&UiEvent::press_key(TAB_SELECT, tab)).unwrap()
}

/// Login clears welcome and login from the back-stack
#[test]
fn test_login_clears_back_stack() {
    let mut shell = default_shell();
    log_in(&mut shell);

    assert_eq!(shell.current_name(), "home");
    assert_eq!(shell.router().back_stack(), vec![Route::Main]);

    // Back never reveals login or welcome
    for _ in 0..5 {
        shell.back().unwrap();
        assert_eq!(shell.router().current_route(), Route::Main);
    }
    assert!(!shell.back().unwrap());
}

/// Login screen state is released once its entry is cleared
#[test]
fn test_login_instance_released_after_login() {
    let mut shell = default_shell();
    log_in(&mut shell);
    // main's home tab only
    assert_eq!(shell.live_screens(), 1);
}

/// Tab selection and back navigation inside main
#[test]
fn test_tab_graph_navigation() {
    let mut shell = default_shell();
    log_in(&mut shell);

    assert_eq!(select(&mut shell, "citas"), EventOutcome::Navigated);
    assert_eq!(shell.current_name(), "citas");

    assert_eq!(select(&mut shell, "turnos"), EventOutcome::Navigated);
    let tabs = shell.router().tabs().unwrap();
    assert_eq!(tabs.stack().routes(), vec![Tab::Home, Tab::Turns]);

    assert!(shell.back().unwrap());
    assert_eq!(shell.current_name(), "home");
    assert!(!shell.back().unwrap());
}

/// Re-selecting the active tab leaves the stack untouched
#[test]
fn test_reselect_active_tab_is_noop() {
    let mut shell = default_shell();
    log_in(&mut shell);
    select(&mut shell, "notificaciones");

    let depth = shell.router().tabs().unwrap().stack().depth();
    let screens = shell.live_screens();

    assert_eq!(select(&mut shell, "notificaciones"), EventOutcome::Ignored);
    assert_eq!(shell.router().tabs().unwrap().stack().depth(), depth);
    assert_eq!(shell.live_screens(), screens);

    // Going home pops the current tab
    assert_eq!(select(&mut shell, "home"), EventOutcome::Navigated);
    assert_eq!(shell.router().tabs().unwrap().stack().depth(), 1);
}

/// Selecting a tab outside main is refused
#[test]
fn test_tab_select_outside_main_fails() {
    let mut shell = default_shell();
    let err = shell
        .dispatch(&UiEvent::press_key(TAB_SELECT, "citas"))
        .unwrap_err();
    assert!(matches!(err, ShellError::Screen(_)));
    assert_eq!(shell.current_name(), "welcome");
}

/// Credentials typed into the form reach the authenticator
#[test]
fn test_credentials_reach_authenticator() {
    let mut auth = MockAuth::new();
    auth.expect_authenticate()
        .withf(|c| c.identifier == "0102030405" && c.password == "pw")
        .times(1)
        .returning(|_| Ok(AuthOutcome::Verified));

    let services = ScreenServices {
        authenticator: Rc::new(auth),
        ..ScreenServices::default()
    };
    let mut shell = AppShell::new(ScreenRegistry::with_defaults(services), Router::new()).unwrap();

    shell.dispatch(&UiEvent::press(welcome::LOGIN)).unwrap();
    shell
        .dispatch(&UiEvent::text_changed(login::IDENTIFIER_FIELD, "0102030405"))
        .unwrap();
    shell
        .dispatch(&UiEvent::text_changed(login::PASSWORD_FIELD, "pw"))
        .unwrap();
    shell.dispatch(&UiEvent::press(login::SUBMIT)).unwrap();

    assert_eq!(shell.router().current_route(), Route::Main);
}

/// A failed authentication keeps the form and its state
#[test]
fn test_failed_authentication_keeps_form() {
    let mut auth = MockAuth::new();
    auth.expect_authenticate()
        .returning(|_| Err(AuthError::InvalidCredentials));

    let services = ScreenServices {
        authenticator: Rc::new(auth),
        ..ScreenServices::default()
    };
    let mut shell = AppShell::new(ScreenRegistry::with_defaults(services), Router::new()).unwrap();
    shell.dispatch(&UiEvent::press(welcome::LOGIN)).unwrap();
    shell
        .dispatch(&UiEvent::text_changed(login::IDENTIFIER_FIELD, "maria"))
        .unwrap();

    assert!(shell.dispatch(&UiEvent::press(login::SUBMIT)).is_err());
    assert_eq!(shell.current_name(), "login");
    let tree = shell.render().unwrap();
    assert_eq!(tree.find_input(login::IDENTIFIER_FIELD).unwrap().value, "maria");
}

/// Current route always equals the last navigation target
#[test]
fn test_router_current_is_last_target() {
    let targets = [
        Route::Login,
        Route::Welcome,
        Route::Main,
        Route::Main,
        Route::Login,
        Route::Welcome,
    ];
    let mut router = Router::new();
    for (i, target) in targets.iter().enumerate() {
        let options = if i % 2 == 0 {
            NavOptions::new()
        } else {
            NavOptions::clear_to(Route::Welcome)
        };
        router.navigate(*target, options);
        assert_eq!(router.current_route(), *target);
    }
}

/// Start route comes from the configuration file
#[test]
fn test_config_file_sets_start_route() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nexo.json");
    std::fs::write(
        &path,
        r#"{ "start_route": "login", "patient_name": "Jorge Andrade", "show_tab_labels": false }"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();
    let mut shell = AppShell::from_config(&config).unwrap();
    assert_eq!(shell.current_name(), "login");

    shell.dispatch(&UiEvent::press(login::SUBMIT)).unwrap();
    let tree = shell.render().unwrap();
    assert_eq!(tree.texts()[0], "Hola, Jorge");
}

/// A session configured to start at login still cannot go back after login
#[test]
fn test_login_from_configured_start_clears_back_stack() {
    let config = AppConfig::from_json(r#"{ "start_route": "login" }"#).unwrap();
    let mut shell = AppShell::from_config(&config).unwrap();
    assert_eq!(shell.current_name(), "login");

    let outcome = shell.dispatch(&UiEvent::press(login::SUBMIT)).unwrap();
    assert_eq!(outcome, EventOutcome::Navigated);
    assert_eq!(shell.router().back_stack(), vec![Route::Main]);

    assert!(!shell.back().unwrap());
    assert!(!shell.router().stack().contains(Route::Login));
    assert_eq!(shell.live_screens(), 1);
}

/// Each main entry opens its own tab graph at home
#[test]
fn test_second_main_entry_starts_at_home() {
    let mut shell = default_shell();
    log_in(&mut shell);
    select(&mut shell, "turnos");

    let mut router = shell.router().clone();
    router.navigate(Route::Login, NavOptions::new());
    router.navigate(Route::Main, NavOptions::new());
    let mut shell = AppShell::new(ScreenRegistry::with_defaults(ScreenServices::default()), router)
        .unwrap();
    assert_eq!(shell.current_name(), "home");

    // Back to login, then to the first main with its tab intact
    assert!(shell.back().unwrap());
    assert_eq!(shell.current_name(), "login");
    assert!(shell.back().unwrap());
    assert_eq!(shell.current_name(), "turnos");
}

/// Invalid or missing config files are reported
#[test]
fn test_config_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = AppConfig::load(Some(dir.path().join("absent.json").as_path())).unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));

    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "start_route": "citas" }"#).unwrap();
    let invalid = AppConfig::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(invalid, ConfigError::InvalidStartRoute(_)));
}
