pub mod listing_query_builder;
pub mod rows;
pub mod sea_orm_entity;
pub mod upsert_statement;
pub mod vehicle_query_postgres;
pub mod vehicle_repository_postgres;
