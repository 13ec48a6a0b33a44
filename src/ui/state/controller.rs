use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::query::{PageParams, PagedData, QueryError, SortSpec};
use crate::domain::entities::record::Record;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [20, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortSpec>,
    pub search: String,
}

impl TableState {
    pub fn to_params(&self) -> PageParams {
        let mut params = PageParams::default()
            .page(i64::try_from(self.page).unwrap_or(i64::MAX))
            .page_size(i64::try_from(self.page_size).unwrap_or(i64::MAX));
        if let Some(sort) = &self.sort {
            params = params.order_by(sort.to_order_by());
        }
        if !self.search.is_empty() {
            params = params.search(self.search.clone());
        }
        params
    }
}

/// A query issued by the controller. Only the newest ticket's result is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    pub params: PageParams,
}

/// Identifies one debounced keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// UI state for the table screen, independent of the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TableController {
    state: TableState,
    total_count: usize,
    data: Vec<Record>,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
    search_generation: u64,
    pending_search: Option<String>,
}

impl TableController {
    pub fn new(default_page_size: usize) -> Self {
        Self {
            state: TableState {
                page: 1,
                page_size: default_page_size.max(1),
                sort: None,
                search: String::new(),
            },
            total_count: 0,
            data: Vec::new(),
            loading: false,
            error: None,
            latest_seq: 0,
            search_generation: 0,
            pending_search: None,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.state.page_size)
    }

    fn issue(&mut self) -> QueryTicket {
        self.latest_seq += 1;
        self.loading = true;
        QueryTicket {
            seq: self.latest_seq,
            params: self.state.to_params(),
        }
    }

    pub fn initial_query(&mut self) -> QueryTicket {
        self.issue()
    }

    pub fn change_page(&mut self, page: usize) -> QueryTicket {
        self.state.page = page.max(1);
        self.issue()
    }

    pub fn change_page_size(&mut self, page_size: usize) -> Result<QueryTicket, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize(0));
        }
        self.state.page_size = page_size;
        self.state.page = 1;
        Ok(self.issue())
    }

    pub fn change_sort(&mut self, sort: Option<SortSpec>) -> QueryTicket {
        self.state.sort = sort;
        self.issue()
    }

    /// Records a keystroke and supersedes any pending one.
    pub fn schedule_search(&mut self, text: impl Into<String>) -> SearchTicket {
        self.search_generation += 1;
        self.pending_search = Some(text.into());
        SearchTicket {
            generation: self.search_generation,
        }
    }

    /// Called when the debounce timer for `ticket` fires.
    pub fn fire_search(&mut self, ticket: SearchTicket) -> Option<QueryTicket> {
        if ticket.generation != self.search_generation {
            return None;
        }
        let search = self.pending_search.take()?;
        self.state.search = search;
        self.state.page = 1;
        Some(self.issue())
    }

    /// Stores a query outcome. Returns `false` when a newer query superseded it.
    pub fn apply_result(&mut self, seq: u64, result: Result<PagedData, String>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(paged) => {
                self.total_count = paged.total_count;
                self.data = paged.data;
                self.error = None;
            }
            Err(message) => {
                self.total_count = 0;
                self.data = Vec::new();
                self.error = Some(message);
            }
        }
        true
    }
}

/// Set once the owning component is gone; async work checks it before writing state.
#[derive(Debug, Clone, Default)]
pub struct TeardownGuard(Arc<AtomicBool>);

impl TeardownGuard {
    pub fn tear_down(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_torn_down(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
