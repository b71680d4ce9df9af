//! JSON REST handlers for servicios.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use catalogo_app::ports::{ServicioRepository, TipoServicioRepository};
use catalogo_domain::error::ValidationError;
use catalogo_domain::id::ServicioCodigo;
use catalogo_domain::servicio::{NewServicio, Servicio};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a servicio.
#[derive(Deserialize)]
pub struct CreateServicioRequest {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<Servicio>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Envelope<Servicio>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Envelope<Servicio>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

fn parse_codigo(raw: &str) -> Result<ServicioCodigo, ApiError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingCodigoServicio.into());
    }
    raw.parse()
        .map_err(|_| ValidationError::InvalidCodigoServicio(raw.to_string()).into())
}

/// `GET /api/servicios`
pub async fn list<TR, SR>(
    State(state): State<AppState<TR, SR>>,
) -> Result<ListResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let servicios = state.servicio_service.list_servicios().await?;
    Ok(ListResponse::Ok(Json(Envelope::new(
        "Todos los servicios encontrados",
        servicios,
    ))))
}

/// `GET /api/servicios/:codigo`
pub async fn get<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    Path(codigo): Path<String>,
) -> Result<GetResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let codigo = parse_codigo(&codigo)?;
    let servicio = state.servicio_service.get_servicio(codigo).await?;
    Ok(GetResponse::Ok(Json(Envelope::data(servicio))))
}

/// `POST /api/servicios`
pub async fn create<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    payload: Result<Json<CreateServicioRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = NewServicio::builder();
    if let Some(nombre) = req.nombre {
        builder = builder.nombre(nombre);
    }
    if let Some(descripcion) = req.descripcion {
        builder = builder.descripcion(descripcion);
    }

    let servicio = builder.build()?;
    let created = state.servicio_service.create_servicio(servicio).await?;
    Ok(CreateResponse::Created(Json(Envelope::new(
        "Servicio creado",
        created,
    ))))
}
