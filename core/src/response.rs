//! Response assembly — pairs an outcome with its (possibly absent)
//! entity in the declared JSON shape, plus the HTTP status code.
//!
//! Simulated failure is a normal response: `success: false` travels
//! with a 200/201 status and the entity field serialized as `null`.

use crate::{error::MockError, types::Folio};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

pub const CODE_INTERNAL: u16 = 7000;
pub const CODE_VALIDATION: u16 = 7001;
pub const CODE_NOT_FOUND: u16 = 7002;

/// A fully-assembled reply: status code plus serializable body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<B> {
    pub status: u16,
    pub body:   B,
}

impl<B> Reply<B> {
    pub fn ok(body: B) -> Self {
        Self { status: STATUS_OK, body }
    }

    pub fn created(body: B) -> Self {
        Self { status: STATUS_CREATED, body }
    }
}

// ── Auth ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBody {
    pub token:      String,
    #[serde(serialize_with = "iso_millis")]
    pub expires_at: DateTime<Utc>,
    pub token_type: &'static str,
}

// ── Frigos ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportCreatedBody {
    pub success: bool,
    pub reporte: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStatusBody {
    pub success: bool,
    pub estado:  Option<&'static str>,
}

// ── GioPhone ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub nombre:      String,
    pub datos:       u64,
    pub uso_datos:   u64,
    pub minutos:     u64,
    pub uso_minutos: u64,
    pub sms:         u64,
    pub uso_sms:     u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerBody {
    pub success: bool,
    pub balance: Option<f64>,
    pub plan:    Option<Plan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolioBody {
    pub success: bool,
    pub folio:   Option<Folio>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Billing {
    pub nombre:            String,
    pub saldo:             f64,
    pub fecha_corte:       NaiveDate,
    pub fecha_vencimiento: NaiveDate,
    pub direccion:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingBody {
    pub success:     bool,
    pub facturacion: Option<Billing>,
}

// ── Errors ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code:    u16,
    pub message: String,
}

/// Error envelope: `{success:false, <field>:null, errors:[...]}`.
/// `field` is the endpoint's entity field; internal errors carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub fields: &'static [&'static str],
    pub errors: Vec<ErrorDetail>,
}

impl Serialize for ErrorBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        map.serialize_entry("success", &false)?;
        for field in self.fields {
            map.serialize_entry(field, &())?;
        }
        map.serialize_entry("errors", &self.errors)?;
        map.end()
    }
}

/// Assemble the error reply for `err` on an endpoint whose entity
/// fields are `fields`.
pub fn error_reply(err: &MockError, fields: &'static [&'static str]) -> Reply<ErrorBody> {
    const NO_FIELDS: &[&str] = &[];
    let (code, message, fields) = match err {
        MockError::InvalidInput { .. } => (CODE_VALIDATION, err.to_string(), fields),
        MockError::NotFound { .. } => (CODE_NOT_FOUND, err.to_string(), fields),
        MockError::Serialization(_) | MockError::Other(_) => {
            (CODE_INTERNAL, "Internal Server Error".to_string(), NO_FIELDS)
        }
    };
    Reply {
        status: err.status(),
        body:   ErrorBody {
            fields,
            errors: vec![ErrorDetail { code, message }],
        },
    }
}

fn iso_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
