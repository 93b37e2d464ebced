//! Administrative export serializers.

pub mod csv;

pub use csv::{to_csv, EXPORT_FILE_NAME};
