//! Frigos — cold-storage incident reports.
//!
//! Creation has no key yet, so it runs on an unseeded stream and is
//! pinned by customer name. Lookup is seeded from the report number.

use crate::{
    outcome::OutcomePolicy,
    request::ReportRequest,
    response::{ReportCreatedBody, ReportStatusBody},
    rng::MockRng,
    types::{ReportNumber, RequestKey},
};

pub const REPORT_NUMBER_LEN: usize = 5;

/// Status vocabulary. Order is part of the reproducibility contract.
pub const REPORT_STATUSES: [&str; 11] = [
    "abierto",
    "cerrado",
    "en revisión",
    "en espera de respuesta",
    "en proceso",
    "resuelto",
    "cancelado",
    "pendiente de revisión",
    "pendiente de respuesta",
    "pendiente de resolución",
    "pendiente de cierre",
];

/// Draw order: outcome, then report number (only on success).
pub fn create_report(
    policy: &OutcomePolicy,
    request: &ReportRequest,
    rng: &mut MockRng,
) -> ReportCreatedBody {
    let key = RequestKey::CustomerName(request.nombre.clone());
    let outcome = policy.decide(&key, rng);
    let reporte = outcome
        .succeeded
        .then(|| rng.numeric_string(REPORT_NUMBER_LEN));

    if let Some(number) = &reporte {
        log::info!("frigos: report {number} raised (motivo={:?})", request.motivo);
    }

    ReportCreatedBody {
        success: outcome.succeeded,
        reporte,
    }
}

/// Draw order: outcome, then status. The status is drawn even on
/// failure so the stream position never depends on the outcome.
pub fn report_status(
    policy: &OutcomePolicy,
    report: ReportNumber,
    rng: &mut MockRng,
) -> ReportStatusBody {
    let outcome = policy.decide(&RequestKey::Report(report), rng);
    let status = *rng.pick_one(&REPORT_STATUSES);

    ReportStatusBody {
        success: outcome.succeeded,
        estado:  outcome.gate(status),
    }
}
