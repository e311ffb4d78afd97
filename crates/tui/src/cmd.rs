//! # Command Execution Layer
//!
//! This module translates application effects (`Effect`) into imperative
//! commands (`Cmd`) and executes them. It is the boundary where the app's
//! state meets the outside world:
//! - Writing CSV exports to disk
//! - Writing to the system clipboard
//! - Handing a `mailto:` URI to the desktop mail client
//! - Persisting the chosen theme
//!
//! State updates stay pure; every failure here is reported back into the
//! notice log instead of aborting the session.

use std::path::PathBuf;

use roster_engine::actions;
use roster_types::Severity;
use tracing::{debug, warn};

use crate::app::{self, Effect};

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ///
    /// # Example
    /// ```rust,ignore
    /// let cmd = Cmd::ClipboardSet("hello".into());
    /// assert!(matches!(cmd, Cmd::ClipboardSet(text) if text == "hello"));
    /// ```
    ClipboardSet(String),
    /// Render the roster CSV into the given directory.
    SaveCsv(PathBuf),
    /// Open a `mailto:` URI with the system handler.
    OpenMailDraft(String),
    /// Store the theme id in the user preferences.
    PersistTheme(&'static str),
}

/// Convert application [`Effect`]s into [`Cmd`]s.
///
/// Effects that fail before producing a command (an empty roster, for
/// instance) have already been reported through the notice log and yield no
/// command.
pub fn from_effects(app: &mut app::App, effects: Vec<Effect>) -> Vec<Cmd> {
    let mut commands = Vec::new();

    for effect in effects {
        let effect_commands = match effect {
            Effect::SaveCsvRequested => vec![Cmd::SaveCsv(app.export_dir.clone())],
            Effect::CopyCsvRequested => handle_copy_csv_requested(app),
            Effect::MailDraftRequested => handle_mail_draft_requested(app),
            Effect::ThemeChanged(id) => vec![Cmd::PersistTheme(id)],
            Effect::Quit => {
                app.should_quit = true;
                Vec::new()
            }
        };
        commands.extend(effect_commands);
    }

    commands
}

fn handle_copy_csv_requested(app: &app::App) -> Vec<Cmd> {
    actions::render_csv(&app.roster, &app.notices)
        .map(|export| vec![Cmd::ClipboardSet(export.contents)])
        .unwrap_or_default()
}

fn handle_mail_draft_requested(app: &app::App) -> Vec<Cmd> {
    actions::prepare_mail(&app.roster, app.mail_recipient.as_deref(), &app.notices)
        .map(|draft| vec![Cmd::OpenMailDraft(draft.uri)])
        .unwrap_or_default()
}

/// Execute commands in order. Failures are logged and pushed to the notice
/// log; the loop never stops early.
pub fn run_cmds(app: &mut app::App, commands: Vec<Cmd>) {
    for command in commands {
        match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
            Cmd::SaveCsv(dir) => {
                actions::save_csv(&app.roster, &dir, &app.notices);
            }
            Cmd::OpenMailDraft(uri) => execute_open_mail(app, &uri),
            Cmd::PersistTheme(id) => execute_persist_theme(app, id),
        }
    }
}

fn execute_clipboard_set(app: &app::App, text: String) {
    let lines = text.lines().count();
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
        Ok(()) => app.notices.push(
            Severity::Success,
            "CSV copiado",
            format!("{} linhas copiadas para a área de transferência.", lines),
        ),
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            app.notices.push(Severity::Error, "Falha ao copiar", format!("Clipboard error: {e}"));
        }
    }
}

fn execute_open_mail(app: &app::App, uri: &str) {
    debug!(length = uri.len(), "opening mail client");
    if let Err(e) = open::that(uri) {
        warn!(error = %e, "failed to open mail client");
        app.notices.push(
            Severity::Error,
            "Falha ao abrir o email",
            format!("Não foi possível abrir o cliente de email: {e}"),
        );
    }
}

fn execute_persist_theme(app: &app::App, id: &'static str) {
    let Some(preferences) = app.preferences.as_ref() else {
        return;
    };
    if let Err(e) = preferences.set_preferred_theme(Some(id.to_string())) {
        warn!(error = %e, theme = id, "failed to persist theme");
        app.notices.push(Severity::Warning, "Tema não salvo", e.to_string());
    }
}
