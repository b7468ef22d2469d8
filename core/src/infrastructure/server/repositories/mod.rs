pub mod sqlite_server_repository;

pub use sqlite_server_repository::SqliteServerRepository;
