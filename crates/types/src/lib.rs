//! Shared type definitions for the compliance roster.
//!
//! Everything here is plain data: the collaborator record, the catalogs of
//! compliance dates and flags, the fixed organizational option lists, the CPF
//! newtype and the derived status tier. Behaviour that needs a clock, a store
//! or a notifier lives in `roster-engine`.

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod collaborator;
pub mod options;
pub mod status;
pub mod tax_id;

pub use catalog::{DateField, FlagField};
pub use collaborator::{Collaborator, CollaboratorId, ComplianceDates, ComplianceFlags, NewCollaborator};
pub use options::{Group, Sector, Unit};
pub use status::StatusTier;
pub use tax_id::{TAX_ID_DIGITS, TaxId, TaxIdInput, digits_only, format_tax_id_progressive};

/// How loudly a notification should be presented to the operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}
