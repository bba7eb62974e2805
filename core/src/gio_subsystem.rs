//! GioPhone — phone carrier customer service.
//!
//! Every operation is seeded from the MSISDN and draws the outcome
//! first. Draw order inside each synthesizer is fixed; changing it
//! changes every value a client has already seen for a number.

use crate::{
    config::BalanceOnFailure,
    error::{MockError, MockResult},
    name_generator::NameGenerator,
    outcome::OutcomePolicy,
    response::{Billing, BillingBody, CustomerBody, FolioBody, Plan},
    rng::MockRng,
    types::{Folio, Msisdn, RequestKey, FOLIO_MAX, FOLIO_MIN},
};
use chrono::{Days, NaiveDate};

pub const PLAN_LEVEL_MIN: u64 = 1;
pub const PLAN_LEVEL_MAX: u64 = 5;

pub const DATA_MB_BASE: u64 = 500;
pub const MINUTES_BASE: u64 = 1_000;
pub const SMS_BASE: u64 = 200;

pub const BALANCE_MAX: f64 = 10_000.0;
pub const BALANCE_STEP: f64 = 0.5;

pub const BILLING_LOOKBACK_DAYS: u64 = 15;
pub const BILLING_DUE_DAYS: u64 = 30;

/// Draw order: level, uso_datos, uso_minutos, uso_sms.
pub fn synthesize_plan(rng: &mut MockRng) -> Plan {
    let level = rng.int_in_range(PLAN_LEVEL_MIN, PLAN_LEVEL_MAX);
    let factor = 1u64 << level;

    let datos = DATA_MB_BASE * factor;
    let minutos = MINUTES_BASE * factor;
    let sms = SMS_BASE * factor;

    let uso_datos = rng.int_in_range(0, datos);
    let uso_minutos = rng.int_in_range(0, minutos);
    let uso_sms = rng.int_in_range(0, sms);

    Plan {
        nombre: format!("Plan Max {level} Plus"),
        datos,
        uso_datos,
        minutos,
        uso_minutos,
        sms,
        uso_sms,
    }
}

/// Pesos in [0, 10000] on a 0.50 grid.
pub fn synthesize_balance(rng: &mut MockRng) -> f64 {
    rng.float_in_range(0.0, BALANCE_MAX, BALANCE_STEP)
}

pub fn synthesize_folio(rng: &mut MockRng) -> MockResult<Folio> {
    Folio::from_value(rng.int_in_range(FOLIO_MIN, FOLIO_MAX))
}

/// Draw order: nombre, saldo, fecha_corte, direccion.
pub fn synthesize_billing(rng: &mut MockRng, today: NaiveDate) -> MockResult<Billing> {
    let nombre = NameGenerator::generate_full_name(rng);
    let saldo = synthesize_balance(rng);
    let fecha_corte = rng.recent_date(BILLING_LOOKBACK_DAYS, today);
    let fecha_vencimiento = fecha_corte
        .checked_add_days(Days::new(BILLING_DUE_DAYS))
        .ok_or_else(|| MockError::Other(anyhow::anyhow!("due date overflow from {fecha_corte}")))?;
    let direccion = NameGenerator::generate_address(rng);

    Ok(Billing {
        nombre,
        saldo,
        fecha_corte,
        fecha_vencimiento,
        direccion,
    })
}

/// `GET /gio/cliente/{msisdn}`. The plan is always drawn so the
/// balance sits at the same stream position regardless of outcome.
pub fn customer(
    policy: &OutcomePolicy,
    msisdn: Msisdn,
    balance_on_failure: BalanceOnFailure,
    rng: &mut MockRng,
) -> CustomerBody {
    let outcome = policy.decide(&RequestKey::Msisdn(msisdn), rng);
    let plan = synthesize_plan(rng);
    let balance = synthesize_balance(rng);

    let balance = match (outcome.succeeded, balance_on_failure) {
        (true, _) | (false, BalanceOnFailure::Populated) => Some(balance),
        (false, BalanceOnFailure::Omitted) => None,
    };

    CustomerBody {
        success: outcome.succeeded,
        balance,
        plan: outcome.gate(plan),
    }
}

/// `PUT /gio/bloquear/{msisdn}`.
pub fn block_line(
    policy: &OutcomePolicy,
    msisdn: Msisdn,
    rng: &mut MockRng,
) -> MockResult<FolioBody> {
    let outcome = policy.decide(&RequestKey::Msisdn(msisdn), rng);
    let folio = if outcome.succeeded {
        Some(synthesize_folio(rng)?)
    } else {
        None
    };
    if let Some(folio) = folio {
        log::info!("gio: line {msisdn} blocked, folio {folio}");
    }
    Ok(FolioBody {
        success: outcome.succeeded,
        folio,
    })
}

/// `POST /gio/reactivar/{msisdn}`. The submitted block folio is only
/// checked structurally; nothing records which folios were issued.
pub fn reactivate_line(
    policy: &OutcomePolicy,
    msisdn: Msisdn,
    block_folio: Folio,
    rng: &mut MockRng,
) -> MockResult<FolioBody> {
    let outcome = policy.decide(&RequestKey::Msisdn(msisdn), rng);
    let folio = if outcome.succeeded {
        Some(synthesize_folio(rng)?)
    } else {
        None
    };
    if let Some(folio) = folio {
        log::info!("gio: line {msisdn} reactivated (block folio {block_folio}), folio {folio}");
    }
    Ok(FolioBody {
        success: outcome.succeeded,
        folio,
    })
}

/// `GET /gio/facturacion/{msisdn}`.
pub fn billing(
    policy: &OutcomePolicy,
    msisdn: Msisdn,
    today: NaiveDate,
    rng: &mut MockRng,
) -> MockResult<BillingBody> {
    let outcome = policy.decide(&RequestKey::Msisdn(msisdn), rng);
    let facturacion = if outcome.succeeded {
        Some(synthesize_billing(rng, today)?)
    } else {
        None
    };
    Ok(BillingBody {
        success: outcome.succeeded,
        facturacion,
    })
}
