//! Shared application state for axum handlers.

use std::sync::Arc;

use catalogo_app::ports::{ServicioRepository, TipoServicioRepository};
use catalogo_app::services::servicio_service::ServicioService;
use catalogo_app::services::tipo_servicio_service::TipoServicioService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<TR, SR> {
    /// Tipo de servicio CRUD service.
    pub tipo_servicio_service: Arc<TipoServicioService<TR, SR>>,
    /// Servicio service.
    pub servicio_service: Arc<ServicioService<SR>>,
}

impl<TR, SR> Clone for AppState<TR, SR> {
    fn clone(&self) -> Self {
        Self {
            tipo_servicio_service: Arc::clone(&self.tipo_servicio_service),
            servicio_service: Arc::clone(&self.servicio_service),
        }
    }
}

impl<TR, SR> AppState<TR, SR>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        tipo_servicio_service: TipoServicioService<TR, SR>,
        servicio_service: ServicioService<SR>,
    ) -> Self {
        Self {
            tipo_servicio_service: Arc::new(tipo_servicio_service),
            servicio_service: Arc::new(servicio_service),
        }
    }
}
