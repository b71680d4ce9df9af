//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod servicios;
#[allow(clippy::missing_errors_doc)]
pub mod tipos_servicio;

use axum::Router;
use axum::routing::get;

use catalogo_app::ports::{ServicioRepository, TipoServicioRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<TR, SR>() -> Router<AppState<TR, SR>>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    Router::new()
        // Servicios
        .route(
            "/servicios",
            get(servicios::list::<TR, SR>).post(servicios::create::<TR, SR>),
        )
        .route("/servicios/{codigo}", get(servicios::get::<TR, SR>))
        // Tipos de servicio
        .route(
            "/tipos-servicio",
            get(tipos_servicio::find_all::<TR, SR>).post(tipos_servicio::add::<TR, SR>),
        )
        .route(
            "/tipos-servicio/{codigo_tipo}",
            get(tipos_servicio::get_one::<TR, SR>)
                .put(tipos_servicio::update::<TR, SR>)
                .patch(tipos_servicio::update::<TR, SR>)
                .delete(tipos_servicio::remove::<TR, SR>),
        )
}
