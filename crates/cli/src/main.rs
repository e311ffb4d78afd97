use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use roster_engine::{Clock, SystemClock};
use roster_tui::AppOptions;
use roster_types::format_tax_id_progressive;
use roster_util::path_processing::resolve_export_dir;
use roster_util::{PreferencesPayload, UserPreferences, days_until, status_for};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding where the TUI writes its log file.
const LOG_PATH_ENV: &str = "ROSTER_LOG_PATH";

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Compliance expiration roster")]
struct Cli {
    /// Directory CSV exports are written to.
    #[arg(long, global = true, value_name = "PATH")]
    export_dir: Option<String>,

    /// Address pre-filled in mail drafts.
    #[arg(long = "mail-to", global = true, value_name = "ADDRESS")]
    mail_to: Option<String>,

    /// Color theme (dracula, nord).
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the terminal UI (default).
    Tui,
    /// Print the progressive CPF mask of a value.
    FormatCpf { value: String },
    /// Save the given --export-dir, --mail-to and --theme as defaults and
    /// print the stored preferences. An empty value clears the setting.
    Config,
    /// Print the status tier of an expiration date.
    Status {
        /// Expiration date, yyyy-MM-dd.
        date: NaiveDate,
        /// Reference day instead of today, yyyy-MM-dd.
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_command = Command::Tui;
    let command = cli.command.as_ref().unwrap_or(&default_command);
    init_tracing(matches!(command, Command::Tui));

    match command {
        Command::Tui => run_tui(&cli).await,
        Command::FormatCpf { value } => {
            println!("{}", format_cpf(value)?);
            Ok(())
        }
        Command::Config => {
            let preferences = UserPreferences::new().context("preferences unavailable")?;
            let stored = save_defaults(&cli, &preferences)?;
            println!("{}", describe_preferences(&stored, &preferences));
            Ok(())
        }
        Command::Status { date, today } => {
            println!("{}", describe_status(*date, *today));
            Ok(())
        }
    }
}

fn save_defaults(cli: &Cli, preferences: &UserPreferences) -> Result<PreferencesPayload> {
    let blank_to_none = |value: &String| Some(value.trim().to_string()).filter(|value| !value.is_empty());
    if let Some(dir) = &cli.export_dir {
        preferences.set_export_dir(blank_to_none(dir)).context("failed to save export directory")?;
    }
    if let Some(recipient) = &cli.mail_to {
        preferences
            .set_mail_recipient(blank_to_none(recipient))
            .context("failed to save mail recipient")?;
    }
    if let Some(theme) = &cli.theme {
        preferences.set_preferred_theme(blank_to_none(theme)).context("failed to save theme")?;
    }
    Ok(preferences.snapshot())
}

fn describe_preferences(stored: &PreferencesPayload, preferences: &UserPreferences) -> String {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    format!(
        "file: {}\nexport_dir: {}\nmail_to: {}\ntheme: {}",
        preferences.path().display(),
        show(&stored.export_dir),
        show(&stored.mail_recipient),
        show(&stored.preferred_theme)
    )
}

async fn run_tui(cli: &Cli) -> Result<()> {
    let preferences = UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; using in-memory defaults");
        UserPreferences::ephemeral()
    });
    let export_dir = resolve_export_dir(cli.export_dir.as_deref(), preferences.export_dir().as_deref());
    let mail_recipient = cli.mail_to.clone().or_else(|| preferences.mail_recipient());

    roster_tui::run(AppOptions {
        export_dir,
        mail_recipient,
        theme: cli.theme.clone(),
        preferences: Some(preferences),
    })
    .await
    .context("terminal UI failed")
}

fn format_cpf(value: &str) -> Result<String> {
    match format_tax_id_progressive(value) {
        Some(masked) => Ok(masked),
        None => bail!("CPF must have at most 11 digits: {value}"),
    }
}

fn describe_status(date: NaiveDate, today: Option<NaiveDate>) -> String {
    let now = today
        .map(|day| day.and_time(NaiveTime::MIN))
        .unwrap_or_else(|| SystemClock.now_local());
    let tier = status_for(Some(date), now);
    format!("{} ({} dias)", tier.label(), days_until(date, now))
}

/// Headless commands log to stderr; the TUI logs to a file so the alternate
/// screen stays clean.
fn init_tracing(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !tui {
        let _ = builder.with_writer(std::io::stderr).try_init();
        return;
    }

    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(&path));
    match file {
        Ok(file) => {
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        // Without a log file the TUI runs silent rather than writing over the screen.
        Err(_) => {
            let _ = builder.with_writer(std::io::sink).try_init();
        }
    }
}

fn log_path() -> PathBuf {
    if let Some(path) = std::env::var_os(LOG_PATH_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    dirs_next::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
        .join("tui.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["roster", "--theme", "nord"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.theme.as_deref(), Some("nord"));
    }

    #[test]
    fn format_cpf_masks_and_rejects_extra_digits() {
        assert_eq!(format_cpf("1234567").unwrap(), "123.456.7");
        assert_eq!(format_cpf("12345678901").unwrap(), "123.456.789-01");
        assert!(format_cpf("123456789012").is_err());
    }

    #[test]
    fn status_uses_the_reference_day() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let plus = |days| today + chrono::Days::new(days);
        assert_eq!(describe_status(today, Some(today)), "Próximo ao vencimento (0 dias)");
        assert_eq!(describe_status(plus(31), Some(today)), "Em dia (31 dias)");
        assert_eq!(describe_status(today.pred_opt().unwrap(), Some(today)), "Vencido (-1 dias)");
    }

    #[test]
    fn status_flags_parse_iso_dates() {
        let cli = Cli::try_parse_from(["roster", "status", "2025-02-10", "--today", "2025-01-10"]).unwrap();
        match cli.command {
            Some(Command::Status { date, today }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
                assert_eq!(today, NaiveDate::from_ymd_opt(2025, 1, 10));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_saves_only_the_flags_given() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_preferred_theme(Some("dracula".into())).unwrap();
        let cli = Cli::try_parse_from(["roster", "config", "--export-dir", "~/exports", "--mail-to", " sesmt@example.com "])
            .unwrap();

        let stored = save_defaults(&cli, &preferences).unwrap();
        assert_eq!(stored.export_dir.as_deref(), Some("~/exports"));
        assert_eq!(stored.mail_recipient.as_deref(), Some("sesmt@example.com"));
        assert_eq!(stored.preferred_theme.as_deref(), Some("dracula"));
        assert!(describe_preferences(&stored, &preferences).contains("mail_to: sesmt@example.com"));
    }

    #[test]
    fn config_with_an_empty_value_clears_it() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_mail_recipient(Some("old@example.com".into())).unwrap();
        let cli = Cli::try_parse_from(["roster", "config", "--mail-to", ""]).unwrap();

        let stored = save_defaults(&cli, &preferences).unwrap();
        assert_eq!(stored.mail_recipient, None);
        assert!(describe_preferences(&stored, &preferences).contains("mail_to: -"));
        assert_eq!(preferences.mail_recipient(), None);
    }

    #[test]
    fn saved_defaults_feed_the_next_session() {
        let preferences = UserPreferences::ephemeral();
        let cli = Cli::try_parse_from(["roster", "config", "--export-dir", "/srv/exports"]).unwrap();
        save_defaults(&cli, &preferences).unwrap();

        temp_env::with_var_unset(roster_util::path_processing::EXPORT_DIR_ENV, || {
            let dir = resolve_export_dir(None, preferences.export_dir().as_deref());
            assert_eq!(dir, PathBuf::from("/srv/exports"));
        });
    }

    #[test]
    fn log_path_honors_the_override() {
        temp_env::with_var(LOG_PATH_ENV, Some("/tmp/roster-test.log"), || {
            assert_eq!(log_path(), PathBuf::from("/tmp/roster-test.log"));
        });
    }
}
