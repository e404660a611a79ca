use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shared_config::AppConfig;

use crate::client::send_json;

/// One row of an agenda export: a booked day and its half-hour marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub data: String,
    pub horario: String,
}

/// Client for the booking-export web service. Each agenda is read through
/// the same endpoint and distinguished by its agenda code.
pub struct ExportClient {
    client: Client,
    base_url: String,
    company: String,
    code: String,
    key: String,
}

impl ExportClient {
    pub fn new(config: &AppConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.export_base_url.clone(),
            company: config.export_company.clone(),
            code: config.export_code.clone(),
            key: config.export_key.clone(),
        }
    }

    /// Builds the single-quoted `parametro` descriptor the export service expects.
    /// `start` and `end` are `dd/mm/yyyy` dates.
    pub fn descriptor(&self, agenda_code: &str, start: &str, end: &str) -> String {
        format!(
            "{{'empresa':'{company}','codigo':'{code}','chave':'{key}','tipoSaida':'json',\
             'empresaTrabalho':'{company}','dataInicio':'{start}','dataFim':'{end}',\
             'codigoAgenda':'{agenda}','statusAgendaFiltro':''}}",
            company = self.company,
            code = self.code,
            key = self.key,
            start = start,
            end = end,
            agenda = agenda_code,
        )
    }

    pub async fn fetch_agenda_entries(
        &self,
        agenda_code: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<ExportEntry>> {
        debug!("Fetching agenda {} from {} to {}", agenda_code, start, end);

        let request = self
            .client
            .post(&self.base_url)
            .query(&[("parametro", self.descriptor(agenda_code, start, end))]);

        let entries: Vec<ExportEntry> = send_json(request, "Agenda export").await?;
        debug!("Agenda {} returned {} entries", agenda_code, entries.len());

        Ok(entries)
    }
}
