//! Servicio — a parent service record that tipos de servicio hang off.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogoError, ValidationError};
use crate::id::ServicioCodigo;

/// A stored servicio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servicio {
    pub codigo: ServicioCodigo,
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// A servicio that has not been assigned a `codigo` yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewServicio {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl NewServicio {
    /// Create a builder for constructing a [`NewServicio`].
    #[must_use]
    pub fn builder() -> NewServicioBuilder {
        NewServicioBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::Validation`] when `nombre` is blank.
    pub fn validate(&self) -> Result<(), CatalogoError> {
        if self.nombre.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach the identifier the store assigned.
    #[must_use]
    pub fn with_codigo(self, codigo: ServicioCodigo) -> Servicio {
        Servicio {
            codigo,
            nombre: self.nombre,
            descripcion: self.descripcion,
        }
    }
}

/// Step-by-step builder for [`NewServicio`].
#[derive(Debug, Default)]
pub struct NewServicioBuilder {
    nombre: Option<String>,
    descripcion: Option<String>,
}

impl NewServicioBuilder {
    #[must_use]
    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    #[must_use]
    pub fn descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = Some(descripcion.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewServicio`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::Validation`] if `nombre` is missing or blank.
    pub fn build(self) -> Result<NewServicio, CatalogoError> {
        let servicio = NewServicio {
            nombre: self.nombre.unwrap_or_default(),
            descripcion: self.descripcion,
        };
        servicio.validate()?;
        Ok(servicio)
    }
}
