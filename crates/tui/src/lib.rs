//! # Roster TUI Library
//!
//! Terminal interface for the compliance-expiration roster. The screen holds
//! the registration form on the left and the roster table on the right, with
//! a notice log and key hints along the bottom.
//!
//! ## Architecture
//!
//! Each UI element (form, roster, notices, hints) is a component that handles
//! keys and renders itself against the shared [`app::App`] state. Components
//! return `Effect`s for anything touching the outside world (files, clipboard,
//! mail client, preferences); `cmd` turns those into commands and runs them.
//!
//! The roster lives only in memory and is gone when the session ends.

mod app;
mod cmd;
mod ui;

use anyhow::Result;

pub use app::AppOptions;
pub use ui::theme::THEME_ENV;

/// Runs the TUI until the operator quits.
///
/// # Errors
///
/// Terminal setup or teardown failures (raw mode, alternate screen) and
/// drawing errors.
///
/// # Example
///
/// ```no_run
/// use roster_tui::{AppOptions, run};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     run(AppOptions::default()).await
/// }
/// ```
pub async fn run(options: AppOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
