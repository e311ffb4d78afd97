//! Collaborator form state: the engine draft plus the per-field text buffers
//! and cursor the terminal needs to edit it.

use std::collections::BTreeMap;

use roster_engine::{CollaboratorDraft, DraftEdit, EditOutcome, TextField, ValidationError};
use roster_types::{DateField, FlagField, Group, Sector, Unit};
use roster_util::{format_date_input_progressive, parse_date_input};
use tracing::debug;

use crate::ui::components::common::TextInputState;

/// One focusable row of the form, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Text(TextField),
    Unit,
    Group,
    Sector,
    Date(DateField),
    Flag(FlagField),
    Submit,
}

impl FormField {
    /// Every field in navigation order.
    pub fn all() -> Vec<FormField> {
        let mut fields: Vec<FormField> = TextField::ALL.iter().copied().map(FormField::Text).collect();
        fields.extend([FormField::Unit, FormField::Group, FormField::Sector]);
        fields.extend(DateField::ALL.iter().copied().map(FormField::Date));
        fields.extend(FlagField::ALL.iter().copied().map(FormField::Flag));
        fields.push(FormField::Submit);
        fields
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Text(field) => field.label(),
            FormField::Unit => "Unidade",
            FormField::Group => "Grupo",
            FormField::Sector => "Setor",
            FormField::Date(field) => field.label(),
            FormField::Flag(flag) => flag.label(),
            FormField::Submit => "Adicionar Colaborador",
        }
    }

    pub fn is_required(self) -> bool {
        match self {
            FormField::Text(field) => field.is_required(),
            FormField::Unit | FormField::Group | FormField::Sector => true,
            FormField::Date(field) => field.is_required(),
            FormField::Flag(_) | FormField::Submit => false,
        }
    }

    /// Whether the field takes typed characters.
    pub fn is_typed(self) -> bool {
        matches!(self, FormField::Text(_) | FormField::Date(_))
    }

    /// The form row a validation failure points at.
    pub fn for_error(error: ValidationError) -> FormField {
        match error {
            ValidationError::MissingName => FormField::Text(TextField::FullName),
            ValidationError::InvalidTaxId => FormField::Text(TextField::TaxId),
            ValidationError::MissingDate(field) => FormField::Date(field),
            ValidationError::MissingUnit => FormField::Unit,
            ValidationError::MissingGroup => FormField::Group,
            ValidationError::MissingSector => FormField::Sector,
        }
    }
}

#[derive(Debug)]
pub struct FormState {
    draft: CollaboratorDraft,
    fields: Vec<FormField>,
    focused: usize,
    text_inputs: BTreeMap<usize, TextInputState>,
    date_inputs: BTreeMap<DateField, TextInputState>,
    /// Field highlighted after the last rejected submit.
    invalid: Option<FormField>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: CollaboratorDraft::new(),
            fields: FormField::all(),
            focused: 0,
            text_inputs: BTreeMap::new(),
            date_inputs: BTreeMap::new(),
            invalid: None,
        }
    }

    pub fn draft(&self) -> &CollaboratorDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CollaboratorDraft {
        &mut self.draft
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focused_field(&self) -> FormField {
        self.fields[self.focused]
    }

    pub fn invalid(&self) -> Option<FormField> {
        self.invalid
    }

    pub fn set_invalid(&mut self, error: Option<ValidationError>) {
        self.invalid = error.map(FormField::for_error);
        if let Some(field) = self.invalid
            && let Some(index) = self.fields.iter().position(|candidate| *candidate == field)
        {
            self.focused = index;
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    /// Text shown for a field, as currently typed.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Text(text) => self.draft.text(text).to_string(),
            FormField::Date(date) => self.date_inputs.get(&date).map(|input| input.input().to_string()).unwrap_or_default(),
            FormField::Unit => self.draft.unit().map(|unit| unit.label().to_string()).unwrap_or_default(),
            FormField::Group => self.draft.group().map(|group| group.label().to_string()).unwrap_or_default(),
            FormField::Sector => self.draft.sector().map(|sector| sector.label().to_string()).unwrap_or_default(),
            FormField::Flag(flag) => (if self.draft.flag(flag) { "[x]" } else { "[ ]" }).to_string(),
            FormField::Submit => String::new(),
        }
    }

    /// Display column of the cursor within the focused typed field.
    pub fn cursor_column(&self) -> Option<u16> {
        match self.focused_field() {
            FormField::Text(TextField::TaxId) => u16::try_from(self.draft.text(TextField::TaxId).chars().count()).ok(),
            FormField::Text(_) => Some(self.text_inputs.get(&self.focused).map(TextInputState::cursor_column).unwrap_or(0)),
            FormField::Date(date) => Some(self.date_inputs.get(&date).map(TextInputState::cursor_column).unwrap_or(0)),
            _ => None,
        }
    }

    /// A date whose text is non-empty but not yet a valid date.
    pub fn is_date_incomplete(&self, field: DateField) -> bool {
        self.date_inputs
            .get(&field)
            .is_some_and(|input| !input.is_empty() && self.draft.date(field).is_none())
    }

    pub fn insert_char(&mut self, c: char) {
        match self.focused_field() {
            FormField::Text(TextField::TaxId) => {
                let candidate = format!("{}{c}", self.draft.text(TextField::TaxId));
                if self.draft.set_tax_id(candidate) == EditOutcome::Rejected {
                    debug!("CPF already has eleven digits");
                }
            }
            FormField::Text(field) => {
                let index = self.focused;
                let input = self.text_inputs.entry(index).or_default();
                input.insert_char(c);
                let value = input.input().to_string();
                self.draft.apply(DraftEdit::Text(field, value));
            }
            FormField::Date(field) => {
                if c.is_ascii_digit() {
                    let current = self.display_value(FormField::Date(field));
                    self.update_date_text(field, format!("{current}{c}"));
                }
            }
            FormField::Flag(flag) if c == ' ' => {
                self.draft.apply(DraftEdit::ToggleFlag(flag));
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field() {
            FormField::Text(TextField::TaxId) => {
                let mut digits = roster_types::digits_only(self.draft.text(TextField::TaxId));
                digits.pop();
                self.draft.set_tax_id(digits);
            }
            FormField::Text(field) => {
                let index = self.focused;
                let input = self.text_inputs.entry(index).or_default();
                input.backspace();
                let value = input.input().to_string();
                self.draft.apply(DraftEdit::Text(field, value));
            }
            FormField::Date(field) => {
                let mut digits = roster_types::digits_only(&self.display_value(FormField::Date(field)));
                digits.pop();
                self.update_date_text(field, digits);
            }
            FormField::Unit => self.draft.set_unit(None),
            FormField::Group => self.draft.set_group(None),
            FormField::Sector => self.draft.set_sector(None),
            FormField::Flag(_) | FormField::Submit => {}
        }
    }

    /// Deletes forward in free-text fields; masked fields only erase from
    /// the end.
    pub fn delete(&mut self) {
        match self.focused_field() {
            FormField::Text(TextField::TaxId) | FormField::Date(_) => self.backspace(),
            FormField::Text(field) => {
                let input = self.text_inputs.entry(self.focused).or_default();
                input.delete();
                let value = input.input().to_string();
                self.draft.apply(DraftEdit::Text(field, value));
            }
            _ => self.backspace(),
        }
    }

    /// Jumps the cursor to the start or end of a free-text field.
    pub fn move_to_edge(&mut self, end: bool) {
        if let FormField::Text(field) = self.focused_field()
            && field != TextField::TaxId
        {
            let input = self.text_inputs.entry(self.focused).or_default();
            if end { input.move_end() } else { input.move_home() }
        }
    }

    /// Cursor movement inside free-text fields, option cycling on choices.
    pub fn move_horizontal(&mut self, step: isize) {
        match self.focused_field() {
            FormField::Text(TextField::TaxId) | FormField::Date(_) => {}
            FormField::Text(_) => {
                let input = self.text_inputs.entry(self.focused).or_default();
                if step < 0 { input.move_left() } else { input.move_right() }
            }
            FormField::Unit => {
                let next = self.draft.unit().map_or_else(|| first_or_last::<Unit>(step), |unit| unit.cycle(step));
                self.draft.set_unit(Some(next));
            }
            FormField::Group => {
                let next = self.draft.group().map_or_else(|| first_or_last::<Group>(step), |group| group.cycle(step));
                self.draft.set_group(Some(next));
            }
            FormField::Sector => {
                let next = self.draft.sector().map_or_else(|| first_or_last::<Sector>(step), |sector| sector.cycle(step));
                self.draft.set_sector(Some(next));
            }
            FormField::Flag(flag) => self.draft.set_flag(flag, step > 0),
            FormField::Submit => {}
        }
    }

    /// Clears every buffer after a successful submit; the draft itself is
    /// reset by the submit action.
    pub fn clear_inputs(&mut self) {
        self.text_inputs.clear();
        self.date_inputs.clear();
        self.invalid = None;
        self.focused = 0;
    }

    /// Discards the draft and every buffer.
    pub fn reset(&mut self) {
        self.draft.reset();
        self.clear_inputs();
    }

    fn update_date_text(&mut self, field: DateField, raw: String) {
        let Some(masked) = format_date_input_progressive(&raw) else {
            return;
        };
        let parsed = parse_date_input(&masked);
        self.draft.set_date(field, parsed);
        self.date_inputs.entry(field).or_default().set_input(masked);
    }
}

trait Choice: Copy + 'static {
    const OPTIONS: &'static [Self];
}

impl Choice for Unit {
    const OPTIONS: &'static [Self] = Unit::ALL;
}

impl Choice for Group {
    const OPTIONS: &'static [Self] = Group::ALL;
}

impl Choice for Sector {
    const OPTIONS: &'static [Self] = Sector::ALL;
}

/// Starting option when nothing is selected yet: first going right, last
/// going left.
fn first_or_last<T: Choice>(step: isize) -> T {
    if step < 0 { T::OPTIONS[T::OPTIONS.len() - 1] } else { T::OPTIONS[0] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn focus(state: &mut FormState, field: FormField) {
        state.focused = state.fields.iter().position(|candidate| *candidate == field).unwrap();
    }

    fn type_text(state: &mut FormState, text: &str) {
        text.chars().for_each(|c| state.insert_char(c));
    }

    #[test]
    fn typing_a_cpf_masks_and_caps_at_eleven_digits() {
        let mut state = FormState::new();
        focus(&mut state, FormField::Text(TextField::TaxId));
        type_text(&mut state, "123456789012");
        assert_eq!(state.display_value(state.focused_field()), "123.456.789-01");
        state.backspace();
        assert_eq!(state.draft().text(TextField::TaxId), "123.456.789-0");
    }

    #[test]
    fn typed_dates_are_masked_and_parsed_once_complete() {
        let mut state = FormState::new();
        focus(&mut state, FormField::Date(DateField::OccupationalHealth));
        type_text(&mut state, "1503");
        assert_eq!(state.display_value(state.focused_field()), "15/03");
        assert!(state.is_date_incomplete(DateField::OccupationalHealth));
        type_text(&mut state, "2026");
        assert_eq!(state.draft().date(DateField::OccupationalHealth), NaiveDate::from_ymd_opt(2026, 3, 15));
        assert!(!state.is_date_incomplete(DateField::OccupationalHealth));
        type_text(&mut state, "9");
        assert_eq!(state.display_value(state.focused_field()), "15/03/2026");
    }

    #[test]
    fn choices_cycle_and_clear() {
        let mut state = FormState::new();
        focus(&mut state, FormField::Group);
        state.move_horizontal(-1);
        assert_eq!(state.draft().group(), Some(Group::Logistics));
        state.move_horizontal(1);
        assert_eq!(state.draft().group(), Some(Group::Maintenance));
        state.backspace();
        assert_eq!(state.draft().group(), None);
    }

    #[test]
    fn free_text_edits_flow_into_the_draft() {
        let mut state = FormState::new();
        type_text(&mut state, "Ana Silva");
        state.move_horizontal(-1);
        state.backspace();
        assert_eq!(state.draft().text(TextField::FullName), "Ana Sila");
    }

    #[test]
    fn home_and_delete_edit_from_the_start() {
        let mut state = FormState::new();
        type_text(&mut state, "xAna");
        state.move_to_edge(false);
        state.delete();
        assert_eq!(state.draft().text(TextField::FullName), "Ana");
        state.move_to_edge(true);
        type_text(&mut state, " Silva");
        assert_eq!(state.draft().text(TextField::FullName), "Ana Silva");
    }

    #[test]
    fn validation_errors_move_focus_to_the_offending_field() {
        let mut state = FormState::new();
        state.set_invalid(Some(ValidationError::MissingDate(DateField::Pcmso)));
        assert_eq!(state.focused_field(), FormField::Date(DateField::Pcmso));
        assert_eq!(state.invalid(), Some(FormField::Date(DateField::Pcmso)));
    }

    #[test]
    fn space_toggles_flags() {
        let mut state = FormState::new();
        focus(&mut state, FormField::Flag(FlagField::Ppe));
        state.insert_char(' ');
        assert!(state.draft().flag(FlagField::Ppe));
        state.insert_char(' ');
        assert!(!state.draft().flag(FlagField::Ppe));
    }
}
