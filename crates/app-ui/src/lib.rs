//! User interface for Nexo Paciente
//!
//! This crate provides the UI layer: a serializable view tree, the screens
//! that render into it, the navigation graph that connects them, and the
//! design system primitives they share.
//!
//! # Modules
//!
//! - [`theme`] - Light theme, brand colors and the appointment status table
//! - [`tokens`] - Design tokens (spacing, radius, elevation, sizing)
//! - [`typography`] - Type scale
//! - [`components`] - View tree and component library
//! - [`screens`] - Application screens and the screen registry
//! - [`navigation`] - Routes, back-stacks, the tab graph and the router
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavOptions, Route, Router};
//! use app_ui::screens::{ScreenRegistry, ScreenServices};
//!
//! let registry = ScreenRegistry::with_defaults(ScreenServices::default());
//! let mut router = Router::new();
//!
//! router.navigate(Route::Login, NavOptions::new());
//! let login = registry.build(router.current_name()).unwrap();
//! assert!(login.render().contains_text("Correo o Cédula"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{light_theme, status_display, StatusDisplay, Theme, ThemeColors};

pub use tokens::{elevation, radius, sizing, spacing};

pub use typography::{font_weight, TextStyle, TypographyVariant};

pub use components::{Scaffold, TabBar, TabBarItem, TopBar, ViewNode};

pub use navigation::{
    bottom_nav_routes, Destination, NavOptions, NavRoute, NavigationError, NavigationOutcome,
    NavigationStack, Route, Router, StackEntry, Tab, TabGraph,
};

pub use screens::{
    EventOutcome, Screen, ScreenError, ScreenRegistry, ScreenServices, UiEvent,
};
