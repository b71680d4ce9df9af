//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier as assigned by the store.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier (`codigo`) of a [`Servicio`](crate::servicio::Servicio).
    ServicioCodigo
);

define_id!(
    /// Identifier (`codigo_tipo`) of a [`TipoServicio`](crate::tipo_servicio::TipoServicio).
    TipoServicioCodigo
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_numeric_text() {
        let codigo: TipoServicioCodigo = "42".parse().unwrap();
        assert_eq!(codigo.get(), 42);
    }

    #[test]
    fn should_ignore_surrounding_whitespace_when_parsing() {
        let codigo: ServicioCodigo = " 7 ".parse().unwrap();
        assert_eq!(codigo, ServicioCodigo::new(7));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        assert!(TipoServicioCodigo::from_str("abc").is_err());
        assert!(TipoServicioCodigo::from_str("1.5").is_err());
        assert!(TipoServicioCodigo::from_str("").is_err());
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&ServicioCodigo::new(3)).unwrap();
        assert_eq!(json, "3");

        let parsed: ServicioCodigo = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, ServicioCodigo::new(3));
    }

    #[test]
    fn should_display_inner_value() {
        assert_eq!(TipoServicioCodigo::new(-1).to_string(), "-1");
    }
}
