pub mod mappers;
pub mod query_builder;
pub mod repositories;
