//! The session's collection of collaborators.
//!
//! [`RosterPort`] is the collection owner's whole public surface: the form
//! adds through it, the roster view reads through it and removal/export
//! requests are delegated to it. [`InMemoryRoster`] is the only
//! implementation; nothing is persisted.

use std::collections::HashSet;

use roster_types::{Collaborator, CollaboratorId, NewCollaborator};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::export::{self, CsvExport, ExportError, MailDraft};

pub trait RosterPort {
    /// Appends a record, assigning it a fresh identifier.
    fn add(&mut self, record: NewCollaborator) -> CollaboratorId;

    /// Removes the record with `id`; unknown ids are a no-op.
    fn remove(&mut self, id: &CollaboratorId) -> Option<Collaborator>;

    /// Records in insertion order.
    fn list(&self) -> &[Collaborator];

    fn export_csv(&self) -> Result<CsvExport, ExportError>;

    fn export_mail_draft(&self, recipient: Option<&str>) -> Result<MailDraft, ExportError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn get(&self, id: &CollaboratorId) -> Option<&Collaborator> {
        self.list().iter().find(|record| record.id() == id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRoster<C: Clock = SystemClock> {
    records: Vec<Collaborator>,
    issued: HashSet<CollaboratorId>,
    clock: C,
}

impl InMemoryRoster<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> InMemoryRoster<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: Vec::new(),
            issued: HashSet::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// An identifier never handed out by this roster before, even for
    /// records that were since removed.
    fn fresh_id(&mut self) -> CollaboratorId {
        loop {
            let candidate = CollaboratorId::generate();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl<C: Clock> RosterPort for InMemoryRoster<C> {
    fn add(&mut self, record: NewCollaborator) -> CollaboratorId {
        let id = self.fresh_id();
        self.records.push(record.into_collaborator(id.clone()));
        debug!(id = %id, size = self.records.len(), "collaborator added");
        id
    }

    fn remove(&mut self, id: &CollaboratorId) -> Option<Collaborator> {
        let position = self.records.iter().position(|record| record.id() == id);
        let removed = position.map(|index| self.records.remove(index));
        debug!(id = %id, removed = removed.is_some(), size = self.records.len(), "remove requested");
        removed
    }

    fn list(&self) -> &[Collaborator] {
        &self.records
    }

    fn export_csv(&self) -> Result<CsvExport, ExportError> {
        export::csv::export(&self.records, self.clock.today())
    }

    fn export_mail_draft(&self, recipient: Option<&str>) -> Result<MailDraft, ExportError> {
        export::mail::draft(&self.records, self.clock.now(), recipient)
    }
}
