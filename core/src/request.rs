//! Typed request records, decoded once at the boundary.

use crate::{
    error::{MockError, MockResult},
    types::Folio,
};
use serde::{de::DeserializeOwned, Deserialize};

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const MIN_CREDENTIAL_LEN: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl TokenRequest {
    pub fn validate(&self) -> MockResult<()> {
        for (field, value) in [("username", &self.username), ("password", &self.password)] {
            if value.chars().count() < MIN_CREDENTIAL_LEN {
                return Err(MockError::invalid(
                    field,
                    format!("must be at least {MIN_CREDENTIAL_LEN} characters"),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub motivo:          String,
    pub nombre:          String,
    pub direccion:       String,
    pub numero_contacto: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactivateRequest {
    pub folio: String,
}

impl ReactivateRequest {
    pub fn folio(&self) -> MockResult<Folio> {
        Folio::parse(&self.folio)
    }
}

/// Decode a JSON body; any shape or type mismatch is a validation error.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> MockResult<T> {
    if body.is_empty() {
        return Err(MockError::invalid("body", "request body is empty"));
    }
    serde_json::from_slice(body).map_err(|e| MockError::invalid("body", e.to_string()))
}

/// `X-API-Key` must be present and exactly `expected_len` characters.
/// The value itself is never checked.
pub fn check_api_key(header: Option<&str>, expected_len: usize) -> MockResult<()> {
    match header {
        None => Err(MockError::invalid("X-API-Key", "header is required")),
        Some(key) if key.chars().count() != expected_len => Err(MockError::invalid(
            "X-API-Key",
            format!("must be exactly {expected_len} characters"),
        )),
        Some(_) => Ok(()),
    }
}
