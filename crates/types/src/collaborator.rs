//! The collaborator record and its compliance sub-structures.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DateField, FlagField, Group, Sector, TaxId, Unit};

/// Opaque identifier assigned by the roster when a record is added.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollaboratorId(String);

impl CollaboratorId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollaboratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollaboratorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Compliance dates keyed by catalog entry; absent keys are "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDates(BTreeMap<DateField, NaiveDate>);

impl ComplianceDates {
    pub fn get(&self, field: DateField) -> Option<NaiveDate> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: DateField, date: Option<NaiveDate>) {
        match date {
            Some(date) => {
                self.0.insert(field, date);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    /// Every catalog field in order, with its date if present.
    pub fn iter_catalog(&self) -> impl Iterator<Item = (DateField, Option<NaiveDate>)> + '_ {
        DateField::ALL.iter().map(|field| (*field, self.get(*field)))
    }

    pub fn provided_count(&self) -> usize {
        self.0.len()
    }
}

/// Checklist flags; a flag absent from the set is `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFlags(BTreeSet<FlagField>);

impl ComplianceFlags {
    pub fn is_set(&self, flag: FlagField) -> bool {
        self.0.contains(&flag)
    }

    pub fn set(&mut self, flag: FlagField, value: bool) {
        if value {
            self.0.insert(flag);
        } else {
            self.0.remove(&flag);
        }
    }

    pub fn toggle(&mut self, flag: FlagField) {
        let current = self.is_set(flag);
        self.set(flag, !current);
    }
}

/// A validated record that has not been assigned an id yet.
///
/// Only the form's validation produces these; only the roster turns them into
/// a [`Collaborator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCollaborator {
    pub full_name: String,
    pub tax_id: TaxId,
    pub company: Option<String>,
    pub company_tax_id: Option<String>,
    pub alternate_company: Option<String>,
    pub unit: Unit,
    pub group: Group,
    pub sector: Sector,
    pub manager: Option<String>,
    pub dates: ComplianceDates,
    pub flags: ComplianceFlags,
}

impl NewCollaborator {
    /// Attaches the identifier chosen by the roster.
    pub fn into_collaborator(self, id: CollaboratorId) -> Collaborator {
        Collaborator { id, record: self }
    }
}

/// One worker's compliance record as held by the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    id: CollaboratorId,
    #[serde(flatten)]
    record: NewCollaborator,
}

impl Collaborator {
    pub fn id(&self) -> &CollaboratorId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.record.full_name
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.record.tax_id
    }

    pub fn company(&self) -> Option<&str> {
        self.record.company.as_deref()
    }

    pub fn company_tax_id(&self) -> Option<&str> {
        self.record.company_tax_id.as_deref()
    }

    pub fn alternate_company(&self) -> Option<&str> {
        self.record.alternate_company.as_deref()
    }

    pub fn unit(&self) -> Unit {
        self.record.unit
    }

    pub fn group(&self) -> Group {
        self.record.group
    }

    pub fn sector(&self) -> Sector {
        self.record.sector
    }

    pub fn manager(&self) -> Option<&str> {
        self.record.manager.as_deref()
    }

    pub fn dates(&self) -> &ComplianceDates {
        &self.record.dates
    }

    pub fn flags(&self) -> &ComplianceFlags {
        &self.record.flags
    }
}
