//! Turning a draft into a record.
//!
//! Validation is short-circuiting and runs in a fixed order: name, CPF, the
//! required dates in catalog order, then unit, group and sector. Only the
//! first failure is reported.

use roster_types::{DateField, NewCollaborator, TAX_ID_DIGITS, TaxId};
use roster_util::clean_text_field;
use thiserror::Error;

use crate::draft::{CollaboratorDraft, TextField};

/// The first rule a draft failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nome é obrigatório")]
    MissingName,
    #[error("CPF deve conter {} dígitos", TAX_ID_DIGITS)]
    InvalidTaxId,
    #[error("Data de {} é obrigatória", .0.label())]
    MissingDate(DateField),
    #[error("Unidade é obrigatória")]
    MissingUnit,
    #[error("Grupo é obrigatório")]
    MissingGroup,
    #[error("Setor é obrigatório")]
    MissingSector,
}

impl ValidationError {
    /// Label of the form field the error points at.
    pub fn field_label(&self) -> &'static str {
        match self {
            ValidationError::MissingName => TextField::FullName.label(),
            ValidationError::InvalidTaxId => TextField::TaxId.label(),
            ValidationError::MissingDate(field) => field.label(),
            ValidationError::MissingUnit => "Unidade",
            ValidationError::MissingGroup => "Grupo",
            ValidationError::MissingSector => "Setor",
        }
    }
}

/// Checks `draft` and builds the record it describes.
///
/// Pure: the draft is not modified and no id is assigned.
pub fn validate(draft: &CollaboratorDraft) -> Result<NewCollaborator, ValidationError> {
    let full_name = clean_text_field(draft.text(TextField::FullName)).ok_or(ValidationError::MissingName)?;
    let tax_id = TaxId::parse(draft.text(TextField::TaxId)).ok_or(ValidationError::InvalidTaxId)?;

    if let Some(missing) = DateField::REQUIRED.iter().find(|field| draft.date(**field).is_none()) {
        return Err(ValidationError::MissingDate(*missing));
    }

    let unit = draft.unit().ok_or(ValidationError::MissingUnit)?;
    let group = draft.group().ok_or(ValidationError::MissingGroup)?;
    let sector = draft.sector().ok_or(ValidationError::MissingSector)?;

    Ok(NewCollaborator {
        full_name,
        tax_id,
        company: clean_text_field(draft.text(TextField::Company)),
        company_tax_id: clean_text_field(draft.text(TextField::CompanyTaxId)),
        alternate_company: clean_text_field(draft.text(TextField::AlternateCompany)),
        unit,
        group,
        sector,
        manager: clean_text_field(draft.text(TextField::Manager)),
        dates: draft.dates().clone(),
        flags: draft.flags().clone(),
    })
}
