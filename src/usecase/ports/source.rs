use anyhow::Result;

use crate::domain::entities::record::Record;

/// Somewhere a dataset can be read from in one go.
pub trait RecordSource: Send + Sync {
    fn load(&self) -> Result<Vec<Record>>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}
