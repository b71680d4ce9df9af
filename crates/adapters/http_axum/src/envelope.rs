//! The `{ message, data }` JSON object every endpoint responds with.

use serde::Serialize;

/// Response body shared by all API endpoints.
///
/// Either field is omitted from the JSON when absent.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// A message together with a payload.
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A bare payload without message.
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// A bare message without payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }
}
