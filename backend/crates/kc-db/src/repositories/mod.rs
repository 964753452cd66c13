pub mod account_repository;
pub mod mapping_repository;
