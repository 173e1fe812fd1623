pub mod bank_entity;
pub mod bank_repository_trait;
pub mod bank_schema;
pub mod bank_sql_repository;
