//! Tipo de servicio — a priced, timed sub-offering of a [`Servicio`].
//!
//! Every scalar attribute is nullable: the catalogue stores exactly what the
//! client sent and does not require any of them. The only hard invariant is
//! that a tipo de servicio always points at an existing servicio, which the
//! application layer checks before every write.

use serde::{Deserialize, Serialize};

use crate::id::TipoServicioCodigo;
use crate::servicio::Servicio;

/// A stored tipo de servicio with its servicio loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipoServicio {
    pub codigo_tipo: TipoServicioCodigo,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    /// Estimated duration in minutes.
    pub duracion_estimada: Option<f64>,
    pub precio_base: Option<f64>,
    pub servicio: Servicio,
}

/// A tipo de servicio that has not been assigned a `codigo_tipo` yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTipoServicio {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub duracion_estimada: Option<f64>,
    pub precio_base: Option<f64>,
    pub servicio: Servicio,
}

impl NewTipoServicio {
    /// Attach the identifier the store assigned.
    #[must_use]
    pub fn with_codigo(self, codigo_tipo: TipoServicioCodigo) -> TipoServicio {
        TipoServicio {
            codigo_tipo,
            nombre: self.nombre,
            descripcion: self.descripcion,
            duracion_estimada: self.duracion_estimada,
            precio_base: self.precio_base,
            servicio: self.servicio,
        }
    }
}

/// Partial replacement of the scalar attributes.
///
/// The outer `Option` says whether the field was supplied at all, the inner
/// one carries the new (possibly null) value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipoServicioPatch {
    pub nombre: Option<Option<String>>,
    pub descripcion: Option<Option<String>>,
    pub duracion_estimada: Option<Option<f64>>,
    pub precio_base: Option<Option<f64>>,
}

impl TipoServicioPatch {
    /// Overwrite every supplied field on `target`, leaving the rest intact.
    pub fn apply(self, target: &mut TipoServicio) {
        if let Some(nombre) = self.nombre {
            target.nombre = nombre;
        }
        if let Some(descripcion) = self.descripcion {
            target.descripcion = descripcion;
        }
        if let Some(duracion_estimada) = self.duracion_estimada {
            target.duracion_estimada = duracion_estimada;
        }
        if let Some(precio_base) = self.precio_base {
            target.precio_base = precio_base;
        }
    }
}
