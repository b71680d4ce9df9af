//! # catalogo-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `catalogo-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `catalogo-app` (for port traits) and `catalogo-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod servicio_repo;
pub mod tipo_servicio_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use servicio_repo::SqliteServicioRepository;
pub use tipo_servicio_repo::SqliteTipoServicioRepository;
