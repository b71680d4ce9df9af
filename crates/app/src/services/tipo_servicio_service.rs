//! Tipo de servicio service — use-cases for the tipo de servicio catalogue.
//!
//! Every write resolves the referenced servicio first, so a tipo de servicio
//! can never be stored pointing at a servicio that does not exist. Reads
//! always return the servicio fully loaded.

use catalogo_domain::error::{CatalogoError, NotFoundError};
use catalogo_domain::id::{ServicioCodigo, TipoServicioCodigo};
use catalogo_domain::servicio::Servicio;
use catalogo_domain::tipo_servicio::{NewTipoServicio, TipoServicio, TipoServicioPatch};

use crate::ports::{ServicioRepository, TipoServicioRepository};

/// Input for [`TipoServicioService::create_tipo_servicio`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTipoServicio {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub duracion_estimada: Option<f64>,
    pub precio_base: Option<f64>,
    pub servicio_codigo: Option<ServicioCodigo>,
}

/// Input for [`TipoServicioService::update_tipo_servicio`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTipoServicio {
    pub patch: TipoServicioPatch,
    /// When set, the tipo de servicio is moved to this servicio.
    pub servicio_codigo: Option<ServicioCodigo>,
}

/// Application service for tipo de servicio CRUD operations.
pub struct TipoServicioService<TR, SR> {
    repo: TR,
    servicios: SR,
}

impl<TR, SR> TipoServicioService<TR, SR>
where
    TR: TipoServicioRepository,
    SR: ServicioRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: TR, servicios: SR) -> Self {
        Self { repo, servicios }
    }

    /// List all tipos de servicio with their servicio loaded.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_tipos_servicio(&self) -> Result<Vec<TipoServicio>, CatalogoError> {
        self.repo.get_all().await
    }

    /// Look up a tipo de servicio by codigo, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::NotFound`] when no tipo de servicio with
    /// `codigo_tipo` exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_tipo_servicio(
        &self,
        codigo_tipo: TipoServicioCodigo,
    ) -> Result<TipoServicio, CatalogoError> {
        self.repo
            .get_by_codigo(codigo_tipo)
            .await?
            .ok_or_else(|| NotFoundError::TipoServicio(Some(codigo_tipo)).into())
    }

    /// Create a tipo de servicio under an existing servicio.
    ///
    /// Scalar fields are stored exactly as given, including absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::NotFound`] when `servicio_codigo` is absent
    /// or unknown, or a storage error from the repositories.
    #[tracing::instrument(skip(self, input), fields(servicio_codigo = ?input.servicio_codigo))]
    pub async fn create_tipo_servicio(
        &self,
        input: CreateTipoServicio,
    ) -> Result<TipoServicio, CatalogoError> {
        let servicio = self.resolve_servicio(input.servicio_codigo).await?;

        let tipo = NewTipoServicio {
            nombre: input.nombre,
            descripcion: input.descripcion,
            duracion_estimada: input.duracion_estimada,
            precio_base: input.precio_base,
            servicio,
        };
        let created = self.repo.create(tipo).await?;
        tracing::info!(codigo_tipo = %created.codigo_tipo, "tipo de servicio created");
        Ok(created)
    }

    /// Apply a partial update and optionally move the record to another servicio.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::NotFound`] when the tipo de servicio does not
    /// exist (or vanished before the write), or when a supplied
    /// `servicio_codigo` is unknown. Storage errors are propagated.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_tipo_servicio(
        &self,
        codigo_tipo: TipoServicioCodigo,
        input: UpdateTipoServicio,
    ) -> Result<TipoServicio, CatalogoError> {
        let mut tipo = self.get_tipo_servicio(codigo_tipo).await?;

        if let Some(servicio_codigo) = input.servicio_codigo {
            tipo.servicio = self.resolve_servicio(Some(servicio_codigo)).await?;
        }
        input.patch.apply(&mut tipo);

        self.repo
            .update(tipo)
            .await?
            .ok_or_else(|| NotFoundError::TipoServicio(Some(codigo_tipo)).into())
    }

    /// Hard-delete a tipo de servicio.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogoError::NotFound`] when no tipo de servicio with
    /// `codigo_tipo` exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_tipo_servicio(
        &self,
        codigo_tipo: TipoServicioCodigo,
    ) -> Result<(), CatalogoError> {
        self.get_tipo_servicio(codigo_tipo).await?;

        if self.repo.delete(codigo_tipo).await? {
            Ok(())
        } else {
            Err(NotFoundError::TipoServicio(Some(codigo_tipo)).into())
        }
    }

    async fn resolve_servicio(
        &self,
        codigo: Option<ServicioCodigo>,
    ) -> Result<Servicio, CatalogoError> {
        let not_found = || CatalogoError::from(NotFoundError::Servicio(codigo));
        let Some(codigo) = codigo else {
            return Err(not_found());
        };
        self.servicios
            .get_by_codigo(codigo)
            .await?
            .ok_or_else(not_found)
    }
}
