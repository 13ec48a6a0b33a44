use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::query::{PageParams, PagedData, QueryError};
use crate::infra::cache::CachedSource;
use crate::usecase::services::query_engine::run_query;

pub struct QueryService {
    source: Arc<CachedSource>,
}

impl QueryService {
    pub fn new(source: Arc<CachedSource>) -> Self {
        Self { source }
    }

    /// Returns one page of the dataset, loading it first if needed.
    pub async fn get_paged_data(&self, params: &PageParams) -> Result<PagedData, QueryError> {
        let records = self.source.records().await.map_err(|err| {
            warn!(source = %self.source.describe(), "dataset load failed: {err:#}");
            QueryError::Source(format!("{err:#}"))
        })?;

        let result = run_query(&records, params)?;
        debug!(
            page = ?params.page,
            page_size = ?params.page_size,
            order_by = ?params.order_by,
            search = ?params.search,
            total = result.total_count,
            rows = result.data.len(),
            "query served"
        );
        Ok(result)
    }
}
