//! Nexo Paciente demo session
//!
//! Walks the app from the welcome screen through login and every tab,
//! printing one JSON line per step with the rendered view tree.

use std::path::PathBuf;

use anyhow::Context;
use app_ui::components::ViewNode;
use app_ui::screens::{appointments, login, welcome, EventOutcome, UiEvent};
use clap::Parser;
use nexo_app::{init_tracing, AppConfig, AppShell, TAB_SELECT};
use serde::Serialize;

/// Nexo Paciente demo session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print each step
    #[arg(long)]
    pretty: bool,
}

enum Step {
    Event(UiEvent),
    Back,
}

/// Result of one step, flattened into the printed line
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum StepOutcome {
    Event(EventOutcome),
    Back { outcome: &'static str },
}

impl StepOutcome {
    fn back() -> Self {
        StepOutcome::Back { outcome: "back" }
    }
}

/// One printed line
#[derive(Debug, Serialize)]
struct StepLine<'a> {
    step: usize,
    route: &'a str,
    #[serde(flatten)]
    outcome: Option<StepOutcome>,
    view: ViewNode,
}

fn tour() -> Vec<Step> {
    vec![
        Step::Event(UiEvent::press(welcome::LOGIN)),
        Step::Event(UiEvent::text_changed(login::IDENTIFIER_FIELD, "maria.perez@example.com")),
        Step::Event(UiEvent::text_changed(login::PASSWORD_FIELD, "demo")),
        Step::Event(UiEvent::press(login::SUBMIT)),
        Step::Event(UiEvent::press_key(TAB_SELECT, "citas")),
        Step::Event(UiEvent::press_key(appointments::ADD_REMINDER, "1")),
        Step::Event(UiEvent::press_key(TAB_SELECT, "turnos")),
        Step::Event(UiEvent::press_key(TAB_SELECT, "notificaciones")),
        Step::Event(UiEvent::press_key(TAB_SELECT, "perfil")),
        Step::Back,
        Step::Back,
    ]
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.log_filter);
    tracing::info!(start = %config.start_route, "Starting Nexo Paciente");

    let mut shell = AppShell::from_config(&config)?;
    let emit = |step: usize, outcome: Option<StepOutcome>, shell: &AppShell| -> anyhow::Result<()> {
        let line = StepLine {
            step,
            route: shell.current_name(),
            outcome,
            view: shell.render()?,
        };
        let text = if args.pretty {
            serde_json::to_string_pretty(&line)?
        } else {
            serde_json::to_string(&line)?
        };
        println!("{}", text);
        Ok(())
    };

    emit(0, None, &shell)?;

    for (i, step) in tour().into_iter().enumerate() {
        let outcome = match step {
            Step::Event(event) => StepOutcome::Event(shell.dispatch(&event)?),
            Step::Back => {
                if !shell.back()? {
                    tracing::info!("back stack exhausted, closing");
                    break;
                }
                StepOutcome::back()
            }
        };
        emit(i + 1, Some(outcome), &shell)?;
    }

    Ok(())
}
