//! Repository layer mapping inventory rows to domain models

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
