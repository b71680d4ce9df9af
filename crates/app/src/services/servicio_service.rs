//! Servicio service — use-cases for the parent servicio records.

use catalogo_domain::error::{CatalogoError, NotFoundError};
use catalogo_domain::id::ServicioCodigo;
use catalogo_domain::servicio::{NewServicio, Servicio};

use crate::ports::ServicioRepository;

/// Application service for servicio operations.
pub struct ServicioService<R> {
    repo: R,
}

impl<R: ServicioRepository> ServicioService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new servicio after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, servicio), fields(nombre = %servicio.nombre))]
    pub async fn create_servicio(&self, servicio: NewServicio) -> Result<Servicio, CatalogoError> {
        servicio.validate()?;
        self.repo.create(servicio).await
    }

    /// Look up a servicio by codigo, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::NotFound`] when no servicio with `codigo`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_servicio(&self, codigo: ServicioCodigo) -> Result<Servicio, CatalogoError> {
        self.repo
            .get_by_codigo(codigo)
            .await?
            .ok_or_else(|| NotFoundError::Servicio(Some(codigo)).into())
    }

    /// List all servicios.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_servicios(&self) -> Result<Vec<Servicio>, CatalogoError> {
        self.repo.get_all().await
    }
}
