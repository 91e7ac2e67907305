use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use qa_core::{update, AppState, AppViewModel, Effect, Msg, Variant};
use qa_engine::EngineHandle;
use qa_logging::{qa_info, qa_warn};

use super::config::{AppConfig, Cli};
use super::effects::EffectRunner;
use super::logging;
use super::ui;

/// Everything the main loop reacts to, funneled through one channel.
pub(crate) enum AppEvent {
    Core(Msg),
    Help,
    Unknown(String),
    InputClosed,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::resolve(Cli::parse()).context("invalid configuration")?;
    logging::initialize(config.log_destination);
    qa_info!(
        "Starting variant={:?} backend={} timeout={:?}",
        config.variant,
        config.backend_url,
        config.request_timeout
    );

    let (engine, engine_events) =
        EngineHandle::new(config.backend_settings()).context("failed to start backend engine")?;
    let (event_tx, event_rx) = mpsc::channel();
    let runner = EffectRunner::new(engine, engine_events, event_tx.clone());
    spawn_input_reader(event_tx);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", ui::render::banner(config.variant, &config.backend_url))?;
    writeln!(out, "{}", ui::render::help(config.variant))?;

    let mut session = Session::new(config.variant);
    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Core(msg) => runner.enqueue(session.dispatch(msg)),
            AppEvent::Help => writeln!(out, "{}", ui::render::help(config.variant))?,
            AppEvent::Unknown(word) => writeln!(out, "Unknown command /{word}; try /help")?,
            AppEvent::InputClosed => input_closed = true,
            AppEvent::Quit => break,
        }
        for line in session.take_render() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        // Piped input: stay until the last response has been shown.
        if input_closed && !session.has_pending() {
            break;
        }
    }

    qa_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    qa_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let events: Vec<AppEvent> = match ui::input::parse_line(&line) {
                ui::input::Command::Dispatch(msgs) => msgs.into_iter().map(AppEvent::Core).collect(),
                ui::input::Command::Help => vec![AppEvent::Help],
                ui::input::Command::Unknown(word) => vec![AppEvent::Unknown(word)],
                ui::input::Command::Quit => vec![AppEvent::Quit],
            };
            for event in events {
                if event_tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

/// Controller state plus the last snapshot written to the terminal.
struct Session {
    state: AppState,
    rendered: AppViewModel,
}

impl Session {
    fn new(variant: Variant) -> Self {
        let state = AppState::new(variant);
        let rendered = state.view();
        Self { state, rendered }
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    fn has_pending(&self) -> bool {
        let view = self.state.view();
        view.context_phase.is_pending() || view.question_phase.is_pending()
    }

    /// Lines for whatever changed since the last render. An alert is
    /// acknowledged as soon as it has been printed.
    fn take_render(&mut self) -> Vec<String> {
        if !self.state.consume_dirty() {
            return Vec::new();
        }
        let view = self.state.view();
        let lines = ui::render::render(&self.rendered, &view);
        if view.alert.is_some() {
            self.dispatch(Msg::AlertDismissed);
            self.state.consume_dirty();
            self.rendered = self.state.view();
        } else {
            self.rendered = view;
        }
        lines
    }
}
