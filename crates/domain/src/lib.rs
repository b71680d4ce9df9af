//! # catalogo-domain
//!
//! Pure domain model for the catalogo service catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Servicios** (parent service records)
//! - Define **Tipos de servicio** (priced, timed sub-offerings of a servicio)
//! - Define the draft and patch shapes used to create and update them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod servicio;
pub mod tipo_servicio;
