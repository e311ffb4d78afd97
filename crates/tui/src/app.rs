//! Application state for the roster TUI.
//!
//! [`App`] owns the in-memory roster, the form and table state and the notice
//! log. Components mutate it in response to keys and return [`Effect`]s for
//! anything that touches the outside world; `cmd` executes those.

use std::cell::RefCell;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use roster_engine::{Clock, InMemoryRoster, Notification, Notifier, RosterPort, RosterView, SystemClock, roster_view};
use roster_types::Severity;
use roster_util::UserPreferences;
use tracing::{debug, info, warn};

use crate::ui::components::form::FormState;
use crate::ui::components::roster::RosterTableState;
use crate::ui::theme::{self, LoadedTheme, Theme, catalog};

/// Maximum number of notices kept in the log.
const NOTICE_LIMIT: usize = 200;

/// Messages delivered to components by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Tick,
    Resize(u16, u16),
}

/// Side effects requested by components and executed by `cmd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SaveCsvRequested,
    CopyCsvRequested,
    MailDraftRequested,
    ThemeChanged(&'static str),
    Quit,
}

/// Which pane receives key events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Form,
    Roster,
}

impl Pane {
    pub fn toggle(self) -> Self {
        match self {
            Pane::Form => Pane::Roster,
            Pane::Roster => Pane::Form,
        }
    }
}

/// A notification as shown in the notice log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub at: DateTime<Local>,
    pub notification: Notification,
}

/// The TUI's notifier: every notification lands in this log.
#[derive(Debug, Default)]
pub struct NoticeLog {
    entries: RefCell<Vec<Notice>>,
}

impl NoticeLog {
    pub fn entries(&self) -> Vec<Notice> {
        self.entries.borrow().clone()
    }

    pub fn latest(&self) -> Option<Notice> {
        self.entries.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn push(&self, severity: Severity, title: impl Into<String>, description: impl Into<String>) {
        self.notify(Notification::new(severity, title, description));
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error | Severity::Warning => warn!(title = %notification.title, description = %notification.description, "notice"),
            Severity::Info | Severity::Success => info!(title = %notification.title, description = %notification.description, "notice"),
        }
        let mut entries = self.entries.borrow_mut();
        entries.push(Notice {
            at: Local::now(),
            notification,
        });
        if entries.len() > NOTICE_LIMIT {
            let overflow = entries.len() - NOTICE_LIMIT;
            entries.drain(..overflow);
        }
    }
}

/// Startup settings resolved by the binary from flags, env and preferences.
#[derive(Debug, Default)]
pub struct AppOptions {
    pub export_dir: PathBuf,
    pub mail_recipient: Option<String>,
    pub theme: Option<String>,
    pub preferences: Option<UserPreferences>,
}

pub struct App<C: Clock = SystemClock> {
    pub roster: InMemoryRoster<C>,
    pub form: FormState,
    pub table: RosterTableState,
    pub notices: NoticeLog,
    pub focus: Pane,
    pub theme: LoadedTheme,
    pub export_dir: PathBuf,
    pub mail_recipient: Option<String>,
    pub preferences: Option<UserPreferences>,
    pub should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(options: AppOptions) -> Self {
        Self::with_roster(InMemoryRoster::new(), options)
    }
}

impl<C: Clock> App<C> {
    pub fn with_roster(roster: InMemoryRoster<C>, options: AppOptions) -> Self {
        let preferred = options.preferences.as_ref().and_then(UserPreferences::preferred_theme);
        let theme = theme::load(options.theme.as_deref(), preferred.as_deref());
        debug!(theme = theme.definition.id, export_dir = %options.export_dir.display(), "app initialized");
        Self {
            roster,
            form: FormState::new(),
            table: RosterTableState::default(),
            notices: NoticeLog::default(),
            focus: Pane::default(),
            theme,
            export_dir: options.export_dir,
            mail_recipient: options.mail_recipient,
            preferences: options.preferences,
            should_quit: false,
        }
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.theme.as_ref()
    }

    /// Status view of the roster as of now.
    pub fn view(&self) -> RosterView {
        roster_view(self.roster.list(), self.roster.clock().now_local())
    }

    /// Switches to the next palette and returns its id for persistence.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = catalog::next(self.theme.definition);
        self.theme = LoadedTheme::from_definition(next);
        next.id
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        if let Msg::Resize(width, height) = msg {
            debug!(width, height, "terminal resized");
        }
        self.table.clamp(self.roster.len());
        Vec::new()
    }
}
