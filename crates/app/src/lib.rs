//! # catalogo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServicioRepository` — create and look up servicios
//!   - `TipoServicioRepository` — CRUD for tipos de servicio
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ServicioService` — create, list, get
//!   - `TipoServicioService` — list, get, add, update, remove
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `catalogo-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
