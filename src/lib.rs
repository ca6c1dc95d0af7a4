//! Nexo Paciente
//!
//! Application layer on top of [`app_core`] and [`app_ui`]: configuration,
//! tracing setup and the [`shell::AppShell`] that drives a session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;
pub mod shell;

pub use config::{AppConfig, ConfigError};
pub use logging::init_tracing;
pub use shell::{AppShell, ShellError, TAB_SELECT};
