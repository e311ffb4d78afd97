//! Record builders shared by the unit tests.

use chrono::NaiveDate;
use roster_types::{ComplianceDates, ComplianceFlags, DateField, Group, NewCollaborator, Sector, TaxId, Unit};

pub(crate) fn sample_record(name: &str) -> NewCollaborator {
    let mut dates = ComplianceDates::default();
    let far = NaiveDate::from_ymd_opt(2030, 1, 15);
    for field in DateField::REQUIRED {
        dates.set(*field, far);
    }
    NewCollaborator {
        full_name: name.to_string(),
        tax_id: TaxId::parse("12345678901").expect("eleven digits"),
        company: None,
        company_tax_id: None,
        alternate_company: None,
        unit: Unit::first(),
        group: Group::first(),
        sector: Sector::first(),
        manager: None,
        dates,
        flags: ComplianceFlags::default(),
    }
}

pub(crate) fn with_date(mut record: NewCollaborator, field: DateField, date: NaiveDate) -> NewCollaborator {
    record.dates.set(field, Some(date));
    record
}
