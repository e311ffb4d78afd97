//! Page-level handlers that tie the form, the roster and the notifier
//! together.
//!
//! Each handler performs one operator action and reports its outcome through
//! the injected [`Notifier`]. Failures never leave the roster in a partial
//! state.

use std::path::{Path, PathBuf};

use roster_types::CollaboratorId;
use tracing::{info, warn};

use crate::draft::CollaboratorDraft;
use crate::export::{CsvExport, ExportError, MailDraft};
use crate::notifier::{Notification, Notifier};
use crate::roster::RosterPort;
use crate::validation::{ValidationError, validate};

pub const VALIDATION_ERROR_TITLE: &str = "Erro de validação";
pub const EXPORT_ERROR_TITLE: &str = "Nada para exportar";

/// Validates the draft and, when it passes, adds the record and clears the
/// draft. A failing draft is kept as typed so the operator can fix it, and the
/// error is returned for the form to highlight.
pub fn submit(
    draft: &mut CollaboratorDraft,
    roster: &mut impl RosterPort,
    notifier: &impl Notifier,
) -> Result<CollaboratorId, ValidationError> {
    match validate(draft) {
        Ok(record) => {
            let name = record.full_name.clone();
            let id = roster.add(record);
            draft.reset();
            info!(id = %id, size = roster.len(), "collaborator submitted");
            notifier.notify(Notification::success(
                "Colaborador adicionado",
                format!("{name} foi adicionado com sucesso!"),
            ));
            Ok(id)
        }
        Err(error) => {
            info!(field = error.field_label(), %error, "submit rejected");
            notifier.notify(Notification::error(VALIDATION_ERROR_TITLE, error.to_string()));
            Err(error)
        }
    }
}

/// Removes a collaborator. Unknown ids change nothing and stay silent.
pub fn remove(roster: &mut impl RosterPort, id: &CollaboratorId, notifier: &impl Notifier) -> bool {
    let Some(removed) = roster.remove(id) else {
        return false;
    };
    notifier.notify(Notification::success(
        "Colaborador removido",
        format!("{} foi removido da lista.", removed.full_name()),
    ));
    true
}

/// Renders the CSV without writing it anywhere; used for clipboard copies.
pub fn render_csv(roster: &impl RosterPort, notifier: &impl Notifier) -> Option<CsvExport> {
    roster.export_csv().map_err(|error| report_export_error(&error, notifier)).ok()
}

/// Renders the CSV and writes it into `dir`.
pub fn save_csv(roster: &impl RosterPort, dir: &Path, notifier: &impl Notifier) -> Option<PathBuf> {
    let result = roster.export_csv().and_then(|export| export.write_to(dir));
    match result {
        Ok(path) => {
            notifier.notify(Notification::success(
                "CSV baixado",
                format!("Arquivo salvo em {}", path.display()),
            ));
            Some(path)
        }
        Err(error) => {
            report_export_error(&error, notifier);
            None
        }
    }
}

/// Builds the mail draft; launching the mail client is left to the caller.
pub fn prepare_mail(roster: &impl RosterPort, recipient: Option<&str>, notifier: &impl Notifier) -> Option<MailDraft> {
    match roster.export_mail_draft(recipient) {
        Ok(draft) => {
            info!(records = roster.len(), "mail draft prepared");
            notifier.notify(Notification::success(
                "Email preparado",
                "O cliente de email será aberto com os dados dos colaboradores.",
            ));
            Some(draft)
        }
        Err(error) => {
            report_export_error(&error, notifier);
            None
        }
    }
}

fn report_export_error(error: &ExportError, notifier: &impl Notifier) {
    let title = match error {
        ExportError::EmptyRoster { .. } => EXPORT_ERROR_TITLE,
        _ => "Falha na exportação",
    };
    warn!(%error, "export failed");
    notifier.notify(Notification::error(title, error.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::RecordingNotifier;
    use crate::roster::InMemoryRoster;
    use chrono::NaiveDate;
    use roster_types::{DateField, Group, Sector, Severity, Unit};

    fn filled_draft(name: &str) -> CollaboratorDraft {
        let mut draft = CollaboratorDraft::new();
        draft.set_full_name(name);
        draft.set_tax_id("98765432100");
        for field in DateField::REQUIRED {
            draft.set_date(*field, NaiveDate::from_ymd_opt(2026, 1, 1));
        }
        draft.set_unit(Some(Unit::SouthBranch));
        draft.set_group(Some(Group::Operations));
        draft.set_sector(Some(Sector::Civil));
        draft
    }

    #[test]
    fn successful_submit_adds_notifies_and_resets() {
        let mut roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();
        let mut draft = filled_draft("Carla Souza");

        let id = submit(&mut draft, &mut roster, &notifier).expect("added");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(&id).map(|record| record.full_name()), Some("Carla Souza"));
        assert!(draft.is_empty());
        let note = notifier.last().unwrap();
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.title, "Colaborador adicionado");
        assert!(note.description.contains("Carla Souza"));
    }

    #[test]
    fn failed_submit_keeps_the_draft_and_the_roster() {
        let mut roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();
        let mut draft = filled_draft("Carla Souza");
        draft.set_date(DateField::PgroPcmat, None);
        let before = draft.clone();

        assert_eq!(
            submit(&mut draft, &mut roster, &notifier),
            Err(ValidationError::MissingDate(DateField::PgroPcmat))
        );
        assert!(roster.is_empty());
        assert_eq!(draft, before);
        let note = notifier.last().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.title, VALIDATION_ERROR_TITLE);
        assert!(note.description.contains("PGRO/PCMAT"));
    }

    #[test]
    fn submit_returns_the_first_failure() {
        let mut roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();

        assert_eq!(
            submit(&mut CollaboratorDraft::new(), &mut roster, &notifier),
            Err(ValidationError::MissingName)
        );
        let mut draft = filled_draft("Carla Souza");
        draft.set_tax_id("987");
        assert_eq!(submit(&mut draft, &mut roster, &notifier), Err(ValidationError::InvalidTaxId));
        assert_eq!(notifier.len(), 2);
    }

    #[test]
    fn removing_notifies_only_when_something_was_removed() {
        let mut roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();
        let id = submit(&mut filled_draft("A"), &mut roster, &notifier).unwrap();
        notifier.take();

        assert!(!remove(&mut roster, &CollaboratorId::from("nope"), &notifier));
        assert!(notifier.is_empty());
        assert!(remove(&mut roster, &id, &notifier));
        assert_eq!(notifier.last().unwrap().title, "Colaborador removido");
        assert!(roster.is_empty());
    }

    #[test]
    fn exports_of_an_empty_roster_are_refused() {
        let roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();
        let dir = tempfile::tempdir().unwrap();

        assert!(save_csv(&roster, dir.path(), &notifier).is_none());
        assert!(prepare_mail(&roster, None, &notifier).is_none());
        assert!(render_csv(&roster, &notifier).is_none());
        let notes = notifier.entries();
        assert_eq!(notes.len(), 3);
        assert!(notes.iter().all(|note| note.severity == Severity::Error && note.title == EXPORT_ERROR_TITLE));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn save_csv_writes_into_the_directory() {
        let mut roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();
        submit(&mut filled_draft("A"), &mut roster, &notifier).expect("added");

        let dir = tempfile::tempdir().unwrap();
        let path = save_csv(&roster, dir.path(), &notifier).expect("written");
        assert!(path.starts_with(dir.path()));
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"Filial Sul\""));
        assert_eq!(notifier.last().unwrap().title, "CSV baixado");
    }

    #[test]
    fn prepare_mail_returns_the_draft() {
        let mut roster = InMemoryRoster::new();
        let notifier = RecordingNotifier::default();
        submit(&mut filled_draft("A"), &mut roster, &notifier).expect("added");

        let draft = prepare_mail(&roster, Some("x@y.com"), &notifier).expect("draft");
        assert!(draft.uri.starts_with("mailto:x@y.com?"));
        assert_eq!(notifier.last().unwrap().title, "Email preparado");
    }
}
