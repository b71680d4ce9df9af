//! JSON REST handlers for tipos de servicio.
//!
//! The path identifier is validated here, before any service call, so a
//! malformed `codigo_tipo` never reaches storage.

use std::num::{IntErrorKind, ParseIntError};

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer};

use catalogo_app::ports::{ServicioRepository, TipoServicioRepository};
use catalogo_app::services::tipo_servicio_service::{CreateTipoServicio, UpdateTipoServicio};
use catalogo_domain::error::{NotFoundError, ValidationError};
use catalogo_domain::id::{ServicioCodigo, TipoServicioCodigo};
use catalogo_domain::tipo_servicio::{TipoServicio, TipoServicioPatch};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

const LISTED: &str = "Todos los tipos de servicios encontrados";
const CREATED: &str = "Tipo de servicio creado";
const UPDATED: &str = "Tipo de servicio actualizado correctamente";
const DELETED: &str = "Tipo de servicio eliminado exitosamente";

/// Request body for creating a tipo de servicio.
///
/// Every field is optional; only `servicio_codigo` is checked.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTipoServicioRequest {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub duracion_estimada: Option<f64>,
    pub precio_base: Option<f64>,
    pub servicio_codigo: Option<ServicioCodigo>,
}

impl From<CreateTipoServicioRequest> for CreateTipoServicio {
    fn from(req: CreateTipoServicioRequest) -> Self {
        Self {
            nombre: req.nombre,
            descripcion: req.descripcion,
            duracion_estimada: req.duracion_estimada,
            precio_base: req.precio_base,
            servicio_codigo: req.servicio_codigo,
        }
    }
}

/// Request body for updating a tipo de servicio.
///
/// Absent fields are left untouched, `null` clears a field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTipoServicioRequest {
    #[serde(default, deserialize_with = "present")]
    pub nombre: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub descripcion: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub duracion_estimada: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub precio_base: Option<Option<f64>>,
    pub servicio_codigo: Option<ServicioCodigo>,
}

impl From<UpdateTipoServicioRequest> for UpdateTipoServicio {
    fn from(req: UpdateTipoServicioRequest) -> Self {
        Self {
            patch: TipoServicioPatch {
                nombre: req.nombre,
                descripcion: req.descripcion,
                duracion_estimada: req.duracion_estimada,
                precio_base: req.precio_base,
            },
            servicio_codigo: req.servicio_codigo,
        }
    }
}

/// Marks a field as supplied, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<TipoServicio>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Envelope<TipoServicio>>),
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
    Created(Json<Envelope<TipoServicio>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Envelope<()>>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_codigo_tipo(raw: &str) -> Result<TipoServicioCodigo, ApiError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingCodigoTipo.into());
    }
    raw.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            NotFoundError::TipoServicio(None).into()
        }
        _ => ValidationError::InvalidCodigoTipo(raw.to_string()).into(),
    })
}

/// `GET /api/tipos-servicio`
pub async fn find_all<TR, SR>(
    State(state): State<AppState<TR, SR>>,
) -> Result<ListResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let tipos = state.tipo_servicio_service.list_tipos_servicio().await?;
    Ok(ListResponse::Ok(Json(Envelope::new(LISTED, tipos))))
}

/// `GET /api/tipos-servicio/:codigo_tipo`
pub async fn get_one<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    Path(codigo_tipo): Path<String>,
) -> Result<GetResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let codigo_tipo = parse_codigo_tipo(&codigo_tipo)?;
    let tipo = state
        .tipo_servicio_service
        .get_tipo_servicio(codigo_tipo)
        .await?;
    Ok(GetResponse::Ok(Json(Envelope::data(tipo))))
}

/// `POST /api/tipos-servicio`
pub async fn add<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    payload: Result<Json<CreateTipoServicioRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state
        .tipo_servicio_service
        .create_tipo_servicio(req.into())
        .await?;
    Ok(CreateResponse::Created(Json(Envelope::new(CREATED, created))))
}

/// `PUT|PATCH /api/tipos-servicio/:codigo_tipo`
pub async fn update<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    Path(codigo_tipo): Path<String>,
    payload: Result<Json<UpdateTipoServicioRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let codigo_tipo = parse_codigo_tipo(&codigo_tipo)?;
    let Json(req) = payload?;
    let updated = state
        .tipo_servicio_service
        .update_tipo_servicio(codigo_tipo, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(Envelope::new(UPDATED, updated))))
}

/// `DELETE /api/tipos-servicio/:codigo_tipo`
pub async fn remove<TR, SR>(
    State(state): State<AppState<TR, SR>>,
    Path(codigo_tipo): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    TR: TipoServicioRepository + Send + Sync + 'static,
    SR: ServicioRepository + Send + Sync + 'static,
{
    let codigo_tipo = parse_codigo_tipo(&codigo_tipo)?;
    state
        .tipo_servicio_service
        .delete_tipo_servicio(codigo_tipo)
        .await?;
    Ok(DeleteResponse::Ok(Json(Envelope::message(DELETED))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_distinguish_absent_from_null_in_update_body() {
        let req: UpdateTipoServicioRequest =
            serde_json::from_str(r#"{ "nombre": "Corte", "descripcion": null }"#).unwrap();

        assert_eq!(req.nombre, Some(Some("Corte".to_string())));
        assert_eq!(req.descripcion, Some(None));
        assert_eq!(req.precio_base, None);
        assert_eq!(req.servicio_codigo, None);
    }

    #[test]
    fn should_accept_empty_create_body() {
        let req: CreateTipoServicioRequest = serde_json::from_str("{}").unwrap();
        assert!(req.servicio_codigo.is_none());
        assert!(req.nombre.is_none());
    }

    #[test]
    fn should_reject_non_numeric_codigo_tipo() {
        assert!(parse_codigo_tipo("abc").is_err());
        assert!(parse_codigo_tipo("   ").is_err());
        assert_eq!(parse_codigo_tipo("12").unwrap(), TipoServicioCodigo::new(12));
    }

    #[test]
    fn should_treat_out_of_range_codigo_tipo_as_not_found() {
        let err = parse_codigo_tipo("99999999999999999999").unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = parse_codigo_tipo("12a").unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
