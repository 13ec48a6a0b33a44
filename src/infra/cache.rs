use std::sync::Arc;

use anyhow::Result;
use tokio::sync::OnceCell;
use tracing::info;

use crate::domain::entities::record::Record;
use crate::platform::desktop::blocking::run_blocking;
use crate::usecase::ports::source::RecordSource;

/// Loads a [`RecordSource`] on first use and serves the same records afterwards.
///
/// Concurrent first callers wait on a single load. A failed load is not
/// cached, so the next caller tries again.
pub struct CachedSource {
    source: Arc<dyn RecordSource>,
    records: OnceCell<Arc<[Record]>>,
}

impl CachedSource {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            records: OnceCell::new(),
        }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub async fn records(&self) -> Result<Arc<[Record]>> {
        let records = self
            .records
            .get_or_try_init(|| async {
                let source = self.source.clone();
                let loaded = run_blocking(move || source.load()).await??;
                info!(
                    source = %self.source.describe(),
                    records = loaded.len(),
                    "dataset loaded"
                );
                Ok::<_, anyhow::Error>(Arc::<[Record]>::from(loaded))
            })
            .await?;
        Ok(records.clone())
    }
}
