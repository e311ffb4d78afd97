//! CSV export.
//!
//! Column order and header names are fixed: text fields, then every
//! compliance date in catalog order, then every flag. Every data cell is
//! quoted; absent values are the literal `null` and flags are `Sim`/`Não`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use roster_types::{Collaborator, DateField, FlagField};
use roster_util::{csv_cell, csv_line, csv_optional_cell, export_file_path, format_date_ddmmyyyy, format_file_stamp};
use tracing::info;

use super::ExportError;

/// Headers of the leading text columns.
const TEXT_COLUMNS: &[&str] = &[
    "Nome Completo",
    "CPF",
    "Empresa",
    "CNPJ",
    "Nova Empresa",
    "Unidade",
    "Grupo",
    "Setor",
    "Gestor",
];

/// Total number of columns in the export.
pub const CSV_COLUMNS: usize = 9 + DateField::ALL.len() + FlagField::ALL.len();

const YES: &str = "Sim";
const NO: &str = "Não";

/// A rendered CSV export ready to be written or copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
    pub row_count: usize,
}

impl CsvExport {
    /// Writes the export into `dir`, creating the directory if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = export_file_path(dir, &self.file_name).ok_or_else(|| ExportError::InvalidFileName(self.file_name.clone()))?;
        let io_error = |source| ExportError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(io_error)?;
        fs::write(&path, &self.contents).map_err(io_error)?;
        info!(path = %path.display(), rows = self.row_count, "csv export written");
        Ok(path)
    }
}

/// The header line, without a trailing newline.
pub fn csv_header() -> String {
    let headers = TEXT_COLUMNS
        .iter()
        .copied()
        .chain(DateField::ALL.iter().map(|field| field.label()))
        .chain(FlagField::ALL.iter().map(|flag| flag.label()));
    csv_line(headers)
}

fn csv_row(record: &Collaborator) -> String {
    let masked_tax_id = record.tax_id().masked();
    let text_cells = [
        csv_cell(record.full_name()),
        csv_cell(&masked_tax_id),
        csv_optional_cell(record.company()),
        csv_optional_cell(record.company_tax_id()),
        csv_optional_cell(record.alternate_company()),
        csv_cell(record.unit().label()),
        csv_cell(record.group().label()),
        csv_cell(record.sector().label()),
        csv_optional_cell(record.manager()),
    ];
    let date_cells = record
        .dates()
        .iter_catalog()
        .map(|(_, date)| csv_optional_cell(date.map(format_date_ddmmyyyy).as_deref()));
    let flag_cells = FlagField::ALL
        .iter()
        .map(|flag| csv_cell(if record.flags().is_set(*flag) { YES } else { NO }));
    csv_line(text_cells.into_iter().chain(date_cells).chain(flag_cells))
}

/// Header line, a newline, then one line per record joined by newlines.
pub fn render(records: &[Collaborator]) -> String {
    let rows: Vec<String> = records.iter().map(csv_row).collect();
    format!("{}\n{}", csv_header(), rows.join("\n"))
}

/// `colaboradores_<dd-MM-yyyy>.csv`
pub fn file_name(export_date: NaiveDate) -> String {
    format!("colaboradores_{}.csv", format_file_stamp(export_date))
}

pub fn export(records: &[Collaborator], export_date: NaiveDate) -> Result<CsvExport, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyRoster { action: "baixar o CSV" });
    }
    Ok(CsvExport {
        file_name: file_name(export_date),
        contents: render(records),
        row_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_record, with_date};
    use roster_types::CollaboratorId;

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    #[test]
    fn header_has_every_column_in_order() {
        let header = csv_header();
        let columns: Vec<_> = header.split(',').collect();
        assert_eq!(columns.len(), CSV_COLUMNS);
        assert_eq!(CSV_COLUMNS, 32);
        assert_eq!(columns[0], "Nome Completo");
        assert_eq!(columns[9], "Integração");
        assert_eq!(columns[25], "PTA Plataforma");
        assert_eq!(columns[31], "CIPA");
    }

    #[test]
    fn rows_use_sentinels_for_absent_values_and_flags() {
        let mut record = with_date(sample_record("Ana"), DateField::Nr10, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        record.flags.set(FlagField::Ppe, true);
        let csv = render(&[record.into_collaborator(CollaboratorId::from("1"))]);
        let row = csv.lines().nth(1).expect("data row");
        let cells: Vec<_> = row.split("\",\"").collect();
        assert_eq!(cells.len(), CSV_COLUMNS);
        assert_eq!(cells[0], "\"Ana");
        assert_eq!(cells[1], "123.456.789-01");
        assert_eq!(cells[2], "null");
        assert_eq!(cells[9], "15/01/2030");
        assert_eq!(cells[11], "01/12/2025");
        assert_eq!(cells[12], "null");
        assert_eq!(cells[26], "Não");
        assert_eq!(cells[30], "Sim");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut record = sample_record("Ana \"Aninha\" Silva");
        record.manager = Some("O\"Neil".into());
        let csv = render(&[record.into_collaborator(CollaboratorId::from("1"))]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Ana \"\"Aninha\"\" Silva\","));
        assert!(row.contains(",\"O\"\"Neil\","));
    }

    #[test]
    fn empty_roster_is_refused() {
        let error = export(&[], export_date()).unwrap_err();
        assert_eq!(error.to_string(), "Adicione pelo menos um colaborador antes de baixar o CSV.");
    }

    #[test]
    fn file_name_uses_the_export_date() {
        let records = [sample_record("Ana").into_collaborator(CollaboratorId::from("1"))];
        let export = export(&records, export_date()).unwrap();
        assert_eq!(export.file_name, "colaboradores_04-03-2025.csv");
        assert_eq!(export.row_count, 1);
        assert!(!export.contents.ends_with('\n'));
    }

    #[test]
    fn write_to_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let records = [sample_record("Ana").into_collaborator(CollaboratorId::from("1"))];
        let export = export(&records, export_date()).unwrap();
        let path = export.write_to(&dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "colaboradores_04-03-2025.csv");
        assert_eq!(fs::read_to_string(path).unwrap(), export.contents);
    }
}
