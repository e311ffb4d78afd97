use chrono::{Days, NaiveDate};
use roster_engine::{
    CSV_COLUMNS, Clock, CollaboratorDraft, FixedClock, InMemoryRoster, RecordingNotifier, RosterPort, ValidationError, actions,
    roster_view,
};
use roster_types::{CollaboratorId, DateField, Group, Sector, Severity, StatusTier, Unit};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date")
}

fn roster() -> InMemoryRoster<FixedClock> {
    InMemoryRoster::with_clock(FixedClock::at_noon(today()))
}

fn draft_for(name: &str, required: NaiveDate) -> CollaboratorDraft {
    let mut draft = CollaboratorDraft::new();
    draft.set_full_name(name);
    draft.set_tax_id("12345678901");
    for field in DateField::REQUIRED {
        draft.set_date(*field, Some(required));
    }
    draft.set_unit(Some(Unit::first()));
    draft.set_group(Some(Group::first()));
    draft.set_sector(Some(Sector::first()));
    draft
}

#[test]
fn ana_silva_end_to_end() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();
    let mut draft = draft_for("Ana Silva", today());

    let id = actions::submit(&mut draft, &mut roster, &notifier).expect("record created");

    let view = roster_view(roster.list(), roster.clock().now_local());
    assert_eq!(view.rows.len(), 1);
    let row = &view.rows[0];
    assert_eq!(row.id, id);
    assert_eq!(row.full_name, "Ana Silva");
    assert_eq!(row.tax_id, "123.456.789-01");
    for field in DateField::REQUIRED {
        let badge = row.badge(*field).expect("badge for every date");
        assert_eq!(badge.tier, StatusTier::ExpiringSoon, "{field:?}");
        assert_eq!(badge.display_date(), "10/01/2025");
    }
    assert_eq!(row.badge(DateField::Nr35).map(|badge| badge.tier), Some(StatusTier::NotProvided));
    assert_eq!(row.worst_tier(), StatusTier::ExpiringSoon);
    assert_eq!(notifier.last().map(|note| note.severity), Some(Severity::Success));
}

#[test]
fn submit_grows_the_roster_by_exactly_one() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();
    let first = actions::submit(&mut draft_for("A", today()), &mut roster, &notifier).expect("first");
    let second = actions::submit(&mut draft_for("A", today()), &mut roster, &notifier).expect("second");
    assert_eq!(roster.len(), 2);
    assert_ne!(first, second);
}

#[test]
fn missing_required_field_names_it_and_leaves_the_roster_alone() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();

    let mut no_name = draft_for("   ", today());
    assert_eq!(actions::submit(&mut no_name, &mut roster, &notifier), Err(ValidationError::MissingName));
    assert_eq!(notifier.last().expect("notified").description, "Nome é obrigatório");

    let mut no_aso = draft_for("Ana", today());
    no_aso.set_date(DateField::OccupationalHealth, None);
    assert_eq!(
        actions::submit(&mut no_aso, &mut roster, &notifier),
        Err(ValidationError::MissingDate(DateField::OccupationalHealth))
    );
    assert_eq!(notifier.last().expect("notified").description, "Data de ASO é obrigatória");

    let mut short_cpf = draft_for("Ana", today());
    short_cpf.set_tax_id("123");
    assert_eq!(actions::submit(&mut short_cpf, &mut roster, &notifier), Err(ValidationError::InvalidTaxId));
    assert!(notifier.last().expect("notified").description.contains("CPF"));

    assert!(roster.is_empty());
    assert_eq!(notifier.len(), 3);
}

#[test]
fn status_tiers_around_today() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();
    let mut draft = draft_for("Ana", today());
    draft.set_date(DateField::Nr10, today().checked_add_days(Days::new(31)));
    draft.set_date(DateField::Nr11, today().checked_sub_days(Days::new(1)));
    draft.set_date(DateField::Nr12, today().checked_add_days(Days::new(30)));
    actions::submit(&mut draft, &mut roster, &notifier).expect("added");

    let view = roster_view(roster.list(), roster.clock().now_local());
    let tier = |field| view.rows[0].badge(field).map(|badge| badge.tier);
    assert_eq!(tier(DateField::Induction), Some(StatusTier::ExpiringSoon));
    assert_eq!(tier(DateField::Nr10), Some(StatusTier::Current));
    assert_eq!(tier(DateField::Nr11), Some(StatusTier::Expired));
    assert_eq!(tier(DateField::Nr12), Some(StatusTier::ExpiringSoon));
    assert_eq!(tier(DateField::Loto), Some(StatusTier::NotProvided));
    assert_eq!(view.rows[0].worst_tier(), StatusTier::Expired);
}

#[test]
fn csv_of_two_records_marks_absent_optional_fields_null() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();
    let mut with_manager = draft_for("Ana Silva", today());
    with_manager.apply(roster_engine::DraftEdit::Text(roster_engine::TextField::Manager, "Carlos".into()));
    actions::submit(&mut with_manager, &mut roster, &notifier).expect("first");
    actions::submit(&mut draft_for("Bruno Costa", today()), &mut roster, &notifier).expect("second");

    let export = roster.export_csv().expect("csv");
    assert_eq!(export.file_name, "colaboradores_10-01-2025.csv");
    let lines: Vec<_> = export.contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split(',').count(), CSV_COLUMNS);

    let manager_column = 8;
    let cells = |line: &str| line.trim_matches('"').split("\",\"").map(str::to_string).collect::<Vec<_>>();
    assert_eq!(cells(lines[1])[manager_column], "Carlos");
    assert_eq!(cells(lines[2])[manager_column], "null");
    assert_eq!(cells(lines[2]).len(), CSV_COLUMNS);
}

#[test]
fn removal_preserves_order_and_ignores_unknown_ids() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();
    let ids: Vec<_> = ["A", "B", "C", "D"]
        .into_iter()
        .map(|name| actions::submit(&mut draft_for(name, today()), &mut roster, &notifier).expect("added"))
        .collect();

    assert!(actions::remove(&mut roster, &ids[1], &notifier));
    assert!(!actions::remove(&mut roster, &CollaboratorId::from("unknown"), &notifier));
    let names: Vec<_> = roster.list().iter().map(|record| record.full_name()).collect();
    assert_eq!(names, ["A", "C", "D"]);
}

#[test]
fn mail_draft_uses_the_clock_for_its_stamp() {
    let mut roster = roster();
    let notifier = RecordingNotifier::default();
    actions::submit(&mut draft_for("Ana Silva", today()), &mut roster, &notifier).expect("added");

    let draft = actions::prepare_mail(&roster, None, &notifier).expect("draft");
    assert_eq!(draft.subject, "Controle de Vencimentos - 10/01/2025");
    assert!(draft.body.contains("\"totalColaboradores\": 1"));
    assert!(draft.body.contains("\"integracao\": \"2025-01-10\""));
    assert!(draft.uri.starts_with("mailto:?subject="));
}
