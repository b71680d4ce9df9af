//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatalogoError`] via `#[from]`. Display strings are the human-facing
//! messages returned to API clients.

use crate::id::{ServicioCodigo, TipoServicioCodigo};

/// Base error for every use-case in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CatalogoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Any failure reported by a persistence adapter.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before reaching storage.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Código de tipo de servicio es requerido")]
    MissingCodigoTipo,

    #[error("Código de tipo de servicio inválido")]
    InvalidCodigoTipo(String),

    #[error("Código de servicio es requerido")]
    MissingCodigoServicio,

    #[error("Código de servicio inválido")]
    InvalidCodigoServicio(String),

    #[error("El nombre es requerido")]
    EmptyName,

    #[error("Cuerpo de la solicitud inválido: {0}")]
    MalformedBody(String),
}

/// A referenced record does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// `None` when the requested identifier lies outside the key range.
    #[error("Tipo de servicio no encontrado")]
    TipoServicio(Option<TipoServicioCodigo>),

    /// `None` when the request did not name a servicio at all.
    #[error("Servicio no encontrado")]
    Servicio(Option<ServicioCodigo>),
}
