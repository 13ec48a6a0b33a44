pub mod csv;
pub mod json;
pub mod xlsx;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::usecase::ports::source::RecordSource;

use self::csv::CsvFileSource;
use self::json::JsonFileSource;
use self::xlsx::XlsxFileSource;

/// Picks a reader for `path` by its extension.
pub fn open_source(path: &Path) -> Result<Arc<dyn RecordSource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => Ok(Arc::new(JsonFileSource::new(path))),
        "csv" => Ok(Arc::new(CsvFileSource::new(path))),
        "xlsx" => Ok(Arc::new(XlsxFileSource::new(path))),
        _ => anyhow::bail!("unsupported dataset format: {}", path.display()),
    }
}
