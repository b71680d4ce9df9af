//! Storage port — repository traits for persistence.

use std::future::Future;

use catalogo_domain::error::CatalogoError;
use catalogo_domain::id::{ServicioCodigo, TipoServicioCodigo};
use catalogo_domain::servicio::{NewServicio, Servicio};
use catalogo_domain::tipo_servicio::{NewTipoServicio, TipoServicio};

/// Repository for persisting and querying [`Servicio`]s.
pub trait ServicioRepository {
    /// Insert a new servicio; the store assigns its `codigo`.
    fn create(
        &self,
        servicio: NewServicio,
    ) -> impl Future<Output = Result<Servicio, CatalogoError>> + Send;

    /// Get a servicio by its `codigo`.
    fn get_by_codigo(
        &self,
        codigo: ServicioCodigo,
    ) -> impl Future<Output = Result<Option<Servicio>, CatalogoError>> + Send;

    /// Get all servicios, ordered by `codigo`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Servicio>, CatalogoError>> + Send;
}

/// Repository for persisting and querying [`TipoServicio`]s.
///
/// Every returned [`TipoServicio`] carries its servicio fully loaded.
pub trait TipoServicioRepository {
    /// Insert a new tipo de servicio; the store assigns its `codigo_tipo`.
    fn create(
        &self,
        tipo: NewTipoServicio,
    ) -> impl Future<Output = Result<TipoServicio, CatalogoError>> + Send;

    /// Get a tipo de servicio by its `codigo_tipo`.
    fn get_by_codigo(
        &self,
        codigo_tipo: TipoServicioCodigo,
    ) -> impl Future<Output = Result<Option<TipoServicio>, CatalogoError>> + Send;

    /// Get all tipos de servicio, ordered by `codigo_tipo`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<TipoServicio>, CatalogoError>> + Send;

    /// Overwrite a stored tipo de servicio.
    ///
    /// Returns `None` when no row with that `codigo_tipo` exists any more.
    fn update(
        &self,
        tipo: TipoServicio,
    ) -> impl Future<Output = Result<Option<TipoServicio>, CatalogoError>> + Send;

    /// Delete a tipo de servicio, returning whether a row was removed.
    fn delete(
        &self,
        codigo_tipo: TipoServicioCodigo,
    ) -> impl Future<Output = Result<bool, CatalogoError>> + Send;
}
