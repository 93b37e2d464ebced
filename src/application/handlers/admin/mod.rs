//! Admin handlers - secret gate, results view, CSV export.

mod access;
mod export_results;
mod list_results;

pub use access::{verify_secret, AdminError};
pub use export_results::{CsvExport, ExportResultsHandler};
pub use list_results::{ListResultsHandler, ResultsView};
