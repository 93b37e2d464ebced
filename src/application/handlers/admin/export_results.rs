//! ExportResultsHandler - dumps the result log as a CSV table.

use std::sync::Arc;

use crate::adapters::export::{to_csv, EXPORT_FILE_NAME};
use crate::domain::session::SessionError;
use crate::ports::ResultLog;

/// A prepared CSV export.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub content: String,
    pub row_count: usize,
}

/// Handler for the admin CSV export.
pub struct ExportResultsHandler {
    log: Arc<dyn ResultLog>,
}

impl ExportResultsHandler {
    pub fn new(log: Arc<dyn ResultLog>) -> Self {
        Self { log }
    }

    pub async fn handle(&self) -> Result<CsvExport, SessionError> {
        let submissions = self.log.all().await?;
        let row_count = submissions.len();

        tracing::info!(rows = row_count, "result log exported");

        Ok(CsvExport {
            file_name: EXPORT_FILE_NAME,
            content: to_csv(&submissions),
            row_count,
        })
    }
}
