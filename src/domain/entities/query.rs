
use thiserror::Error;

use crate::domain::entities::record::Record;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_ORDER_FIELD: &str = "index";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Active sort on a single column. `direction: None` sorts ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub name: String,
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Some(SortDirection::Asc),
        }
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Some(SortDirection::Desc),
        }
    }

    pub fn is_descending(&self) -> bool {
        self.direction == Some(SortDirection::Desc)
    }

    /// Renders the `"<field> [asc|desc]"` clause accepted by [`OrderBy::parse`].
    pub fn to_order_by(&self) -> String {
        match self.direction {
            Some(direction) => format!("{} {}", self.name, direction.as_str()),
            None => self.name.clone(),
        }
    }
}

/// Parsed `"<field> [asc|desc]"` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn parse(clause: &str) -> Result<Self, QueryError> {
        let mut tokens = clause.split_whitespace();
        let field = tokens
            .next()
            .ok_or_else(|| QueryError::InvalidOrderBy(clause.to_string()))?;
        let direction = match tokens.next() {
            None => SortDirection::Asc,
            Some(token) if token.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(token) if token.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => return Err(QueryError::InvalidOrderBy(clause.to_string())),
        };
        if tokens.next().is_some() {
            return Err(QueryError::InvalidOrderBy(clause.to_string()));
        }

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            field: DEFAULT_ORDER_FIELD.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// Request for one page of the dataset. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub order_by: Option<String>,
    pub search: Option<String>,
}

impl PageParams {
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by = Some(clause.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagedData {
    /// Matches before pagination.
    pub total_count: usize,
    pub data: Vec<Record>,
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(i64),
    #[error("invalid order clause {0:?}, expected \"<field> [asc|desc]\"")]
    InvalidOrderBy(String),
    #[error("failed to load dataset: {0}")]
    Source(String),
}
