pub mod query_engine;
pub mod query_service;
