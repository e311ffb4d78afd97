//! The in-progress collaborator record edited by the form.
//!
//! A [`CollaboratorDraft`] holds every field as the operator typed it. All
//! changes go through [`CollaboratorDraft::apply`], one [`DraftEdit`] per
//! keystroke or selection, so the form can be exercised without a UI.

use chrono::NaiveDate;
use roster_types::{ComplianceDates, ComplianceFlags, DateField, FlagField, Group, Sector, TaxIdInput, Unit};
use tracing::debug;

/// Free-text fields of the form.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TextField {
    FullName,
    TaxId,
    Company,
    CompanyTaxId,
    AlternateCompany,
    Manager,
}

impl TextField {
    pub const ALL: &'static [TextField] = &[
        TextField::FullName,
        TextField::TaxId,
        TextField::Company,
        TextField::CompanyTaxId,
        TextField::AlternateCompany,
        TextField::Manager,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextField::FullName => "Nome Completo",
            TextField::TaxId => "CPF",
            TextField::Company => "Empresa",
            TextField::CompanyTaxId => "CNPJ",
            TextField::AlternateCompany => "Nova Empresa",
            TextField::Manager => "Gestor",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, TextField::FullName | TextField::TaxId)
    }
}

/// One change to the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftEdit {
    Text(TextField, String),
    Unit(Option<Unit>),
    Group(Option<Group>),
    Sector(Option<Sector>),
    Date(DateField, Option<NaiveDate>),
    Flag(FlagField, bool),
    ToggleFlag(FlagField),
    Reset,
}

/// Whether an edit changed the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The edit was refused and the previous value kept (a twelfth CPF digit).
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollaboratorDraft {
    full_name: String,
    tax_id: TaxIdInput,
    company: String,
    company_tax_id: String,
    alternate_company: String,
    manager: String,
    unit: Option<Unit>,
    group: Option<Group>,
    sector: Option<Sector>,
    dates: ComplianceDates,
    flags: ComplianceFlags,
}

impl CollaboratorDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, edit: DraftEdit) -> EditOutcome {
        match edit {
            DraftEdit::Text(TextField::TaxId, raw) => {
                if !self.tax_id.update(&raw) {
                    debug!(attempted = %raw, "rejected CPF edit beyond eleven digits");
                    return EditOutcome::Rejected;
                }
            }
            DraftEdit::Text(field, value) => {
                if let Some(slot) = self.text_slot(field) {
                    *slot = value;
                }
            }
            DraftEdit::Unit(unit) => self.unit = unit,
            DraftEdit::Group(group) => self.group = group,
            DraftEdit::Sector(sector) => self.sector = sector,
            DraftEdit::Date(field, date) => self.dates.set(field, date),
            DraftEdit::Flag(flag, value) => self.flags.set(flag, value),
            DraftEdit::ToggleFlag(flag) => self.flags.toggle(flag),
            DraftEdit::Reset => *self = Self::default(),
        }
        EditOutcome::Applied
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.apply(DraftEdit::Text(TextField::FullName, value.into()));
    }

    /// Feeds raw CPF input through the keystroke mask.
    pub fn set_tax_id(&mut self, raw: impl Into<String>) -> EditOutcome {
        self.apply(DraftEdit::Text(TextField::TaxId, raw.into()))
    }

    pub fn set_unit(&mut self, unit: Option<Unit>) {
        self.apply(DraftEdit::Unit(unit));
    }

    pub fn set_group(&mut self, group: Option<Group>) {
        self.apply(DraftEdit::Group(group));
    }

    pub fn set_sector(&mut self, sector: Option<Sector>) {
        self.apply(DraftEdit::Sector(sector));
    }

    pub fn set_date(&mut self, field: DateField, date: Option<NaiveDate>) {
        self.apply(DraftEdit::Date(field, date));
    }

    pub fn set_flag(&mut self, flag: FlagField, value: bool) {
        self.apply(DraftEdit::Flag(flag, value));
    }

    pub fn reset(&mut self) {
        self.apply(DraftEdit::Reset);
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::TaxId => self.tax_id.as_str(),
            TextField::Company => &self.company,
            TextField::CompanyTaxId => &self.company_tax_id,
            TextField::AlternateCompany => &self.alternate_company,
            TextField::Manager => &self.manager,
        }
    }

    /// Plain text storage; the CPF has none because it is masked.
    fn text_slot(&mut self, field: TextField) -> Option<&mut String> {
        match field {
            TextField::FullName => Some(&mut self.full_name),
            TextField::Company => Some(&mut self.company),
            TextField::CompanyTaxId => Some(&mut self.company_tax_id),
            TextField::AlternateCompany => Some(&mut self.alternate_company),
            TextField::Manager => Some(&mut self.manager),
            TextField::TaxId => None,
        }
    }

    pub fn tax_id_digit_count(&self) -> usize {
        self.tax_id.digit_count()
    }

    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    pub fn group(&self) -> Option<Group> {
        self.group
    }

    pub fn sector(&self) -> Option<Sector> {
        self.sector
    }

    pub fn date(&self, field: DateField) -> Option<NaiveDate> {
        self.dates.get(field)
    }

    pub fn dates(&self) -> &ComplianceDates {
        &self.dates
    }

    pub fn flag(&self, flag: FlagField) -> bool {
        self.flags.is_set(flag)
    }

    pub fn flags(&self) -> &ComplianceFlags {
        &self.flags
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
