//! Read-only projection of the roster for display.
//!
//! [`roster_view`] is a pure function of the records and "now"; it never
//! mutates the roster. Each date becomes a [`DateBadge`] carrying its status
//! tier.

use chrono::{NaiveDate, NaiveDateTime};
use roster_types::{Collaborator, CollaboratorId, DateField, FlagField, StatusTier};
use roster_util::{format_date_ddmmyyyy, status_for};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBadge {
    pub field: DateField,
    pub date: Option<NaiveDate>,
    pub tier: StatusTier,
}

impl DateBadge {
    /// `dd/MM/yyyy`, or the not-provided label.
    pub fn display_date(&self) -> String {
        self.date
            .map(format_date_ddmmyyyy)
            .unwrap_or_else(|| StatusTier::NotProvided.label().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRow {
    pub id: CollaboratorId,
    pub full_name: String,
    pub tax_id: String,
    pub company: Option<String>,
    pub unit: String,
    pub group: String,
    pub sector: String,
    pub manager: Option<String>,
    pub badges: Vec<DateBadge>,
    pub flags: Vec<(FlagField, bool)>,
}

impl RosterRow {
    fn from_record(record: &Collaborator, now: NaiveDateTime) -> Self {
        let badges = record
            .dates()
            .iter_catalog()
            .map(|(field, date)| DateBadge {
                field,
                date,
                tier: status_for(date, now),
            })
            .collect();
        let flags = FlagField::ALL
            .iter()
            .map(|flag| (*flag, record.flags().is_set(*flag)))
            .collect();
        Self {
            id: record.id().clone(),
            full_name: record.full_name().to_string(),
            tax_id: record.tax_id().masked(),
            company: record.company().map(str::to_string),
            unit: record.unit().label().to_string(),
            group: record.group().label().to_string(),
            sector: record.sector().label().to_string(),
            manager: record.manager().map(str::to_string),
            badges,
            flags,
        }
    }

    pub fn badge(&self, field: DateField) -> Option<&DateBadge> {
        self.badges.iter().find(|badge| badge.field == field)
    }

    /// Most urgent tier among the dates that were provided, or
    /// [`StatusTier::NotProvided`] when none were.
    pub fn worst_tier(&self) -> StatusTier {
        self.badges
            .iter()
            .map(|badge| badge.tier)
            .filter(|tier| *tier != StatusTier::NotProvided)
            .min_by_key(|tier| tier.urgency())
            .unwrap_or(StatusTier::NotProvided)
    }
}

/// Badge counts per tier across the whole roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub expired: usize,
    pub expiring_soon: usize,
    pub current: usize,
    pub not_provided: usize,
}

impl TierSummary {
    fn record(&mut self, tier: StatusTier) {
        match tier {
            StatusTier::Expired => self.expired += 1,
            StatusTier::ExpiringSoon => self.expiring_soon += 1,
            StatusTier::Current => self.current += 1,
            StatusTier::NotProvided => self.not_provided += 1,
        }
    }

    pub fn count(&self, tier: StatusTier) -> usize {
        match tier {
            StatusTier::Expired => self.expired,
            StatusTier::ExpiringSoon => self.expiring_soon,
            StatusTier::Current => self.current,
            StatusTier::NotProvided => self.not_provided,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    pub rows: Vec<RosterRow>,
    pub summary: TierSummary,
}

impl RosterView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header line shown above the table.
    pub fn title(&self) -> String {
        format!("Colaboradores Cadastrados ({})", self.rows.len())
    }
}

pub fn roster_view(records: &[Collaborator], now: NaiveDateTime) -> RosterView {
    let rows: Vec<RosterRow> = records.iter().map(|record| RosterRow::from_record(record, now)).collect();
    let mut summary = TierSummary::default();
    rows.iter().flat_map(|row| row.badges.iter()).for_each(|badge| summary.record(badge.tier));
    RosterView { rows, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_record, with_date};
    use chrono::Days;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(10, 0, 0).unwrap()
    }

    #[test]
    fn rows_follow_insertion_order_and_mask_cpf() {
        let records = vec![
            sample_record("Ana").into_collaborator(CollaboratorId::from("1")),
            sample_record("Bruno").into_collaborator(CollaboratorId::from("2")),
        ];
        let view = roster_view(&records, now());
        assert_eq!(view.rows[0].full_name, "Ana");
        assert_eq!(view.rows[1].full_name, "Bruno");
        assert_eq!(view.rows[0].tax_id, "123.456.789-01");
        assert_eq!(view.title(), "Colaboradores Cadastrados (2)");
    }

    #[test]
    fn badges_cover_every_date_and_absent_ones_are_not_provided() {
        let record = sample_record("Ana").into_collaborator(CollaboratorId::from("1"));
        let view = roster_view(std::slice::from_ref(&record), now());
        let row = &view.rows[0];
        assert_eq!(row.badges.len(), DateField::ALL.len());
        let nr35 = row.badge(DateField::Nr35).unwrap();
        assert_eq!(nr35.tier, StatusTier::NotProvided);
        assert_eq!(nr35.display_date(), "Não informado");
    }

    #[test]
    fn worst_tier_ignores_absent_dates() {
        let today = now().date();
        let record = with_date(sample_record("Ana"), DateField::Nr10, today.checked_sub_days(Days::new(3)).unwrap())
            .into_collaborator(CollaboratorId::from("1"));
        let view = roster_view(std::slice::from_ref(&record), now());
        assert_eq!(view.rows[0].worst_tier(), StatusTier::Expired);
        assert_eq!(view.summary.expired, 1);
        assert_eq!(
            view.summary.count(StatusTier::NotProvided),
            DateField::ALL.len() - DateField::REQUIRED.len() - 1
        );
    }
}
