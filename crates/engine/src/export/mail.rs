//! Mail draft export.
//!
//! The body is a short greeting followed by a pretty-printed JSON document
//! describing every collaborator and their compliance dates. Dates are ISO
//! strings; absent ones are JSON `null`.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use roster_types::Collaborator;
use roster_util::{format_date_ddmmyyyy, format_date_iso, mailto_uri};
use serde::Serialize;
use serde_json::{Map, Value};

use super::ExportError;

const SUBJECT_PREFIX: &str = "Controle de Vencimentos";
const BODY_PREAMBLE: &str = "Segue abaixo os dados dos colaboradores cadastrados:\n\n";

/// One collaborator as it appears in the mail body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailRecord {
    pub nome_completo: String,
    pub cpf: String,
    pub unidade: String,
    /// Every catalog date keyed by its JSON key, in catalog order.
    pub datas: Map<String, Value>,
}

impl From<&Collaborator> for MailRecord {
    fn from(record: &Collaborator) -> Self {
        let datas = record
            .dates()
            .iter_catalog()
            .map(|(field, date)| {
                let value = date.map(|date| Value::String(format_date_iso(date))).unwrap_or(Value::Null);
                (field.key().to_string(), value)
            })
            .collect();
        Self {
            nome_completo: record.full_name().to_string(),
            cpf: record.tax_id().masked(),
            unidade: record.unit().label().to_string(),
            datas,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MailDocument<'a> {
    data_exportacao: String,
    total_colaboradores: usize,
    colaboradores: &'a [MailRecord],
}

/// Subject and body of the draft, plus the link handed to the mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
    pub uri: String,
}

pub fn draft(records: &[Collaborator], now: DateTime<FixedOffset>, recipient: Option<&str>) -> Result<MailDraft, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyRoster { action: "enviar por email" });
    }

    let mail_records: Vec<MailRecord> = records.iter().map(MailRecord::from).collect();
    let document = MailDocument {
        data_exportacao: now.to_rfc3339_opts(SecondsFormat::Millis, false),
        total_colaboradores: mail_records.len(),
        colaboradores: &mail_records,
    };

    let subject = format!("{SUBJECT_PREFIX} - {}", format_date_ddmmyyyy(now.date_naive()));
    let body = format!("{BODY_PREAMBLE}{}", serde_json::to_string_pretty(&document)?);
    let uri = mailto_uri(recipient, &subject, &body);
    Ok(MailDraft { subject, body, uri })
}
