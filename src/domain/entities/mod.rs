pub mod column;
pub mod query;
pub mod record;
