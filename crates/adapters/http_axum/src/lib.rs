//! # catalogo-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** under `/api` for servicios and tipos de servicio
//! - Wrap every response in the `{ message, data }` envelope
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into status codes (400 / 404 / 500)
//!
//! ## Dependency rule
//! Depends on `catalogo-app` (for port traits and services) and `catalogo-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod router;
pub mod state;
