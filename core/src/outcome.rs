//! Outcome policy — decides whether a simulated operation succeeds.
//!
//! RULE: exactly one `boolean(p)` draw per request, and it is always
//! the first draw on the request's stream. `p` is the probability of
//! success: 0.0 for a pinned key, the configured rate otherwise.

use crate::{
    config::MockConfig,
    rng::MockRng,
    types::{Msisdn, ReportNumber, RequestKey},
};
use serde::Serialize;

pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub succeeded: bool,
}

impl Outcome {
    /// Keep `value` only when the operation succeeded.
    pub fn gate<T>(&self, value: T) -> Option<T> {
        self.succeeded.then_some(value)
    }
}

/// Keys hard-wired to fail, one per mock domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedOverrides {
    pub report:        ReportNumber,
    pub msisdn:        Msisdn,
    pub customer_name: String,
}

impl PinnedOverrides {
    pub fn is_pinned(&self, key: &RequestKey) -> bool {
        match key {
            RequestKey::Report(r) => *r == self.report,
            RequestKey::Msisdn(m) => *m == self.msisdn,
            RequestKey::CustomerName(n) => *n == self.customer_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutcomePolicy {
    success_probability: f64,
    pins:                PinnedOverrides,
}

impl OutcomePolicy {
    pub fn new(success_probability: f64, pins: PinnedOverrides) -> Self {
        Self {
            success_probability: success_probability.clamp(0.0, 1.0),
            pins,
        }
    }

    pub fn from_config(config: &MockConfig) -> crate::error::MockResult<Self> {
        Ok(Self::new(config.success_probability, config.pinned_overrides()?))
    }

    /// Success bias for `key`.
    pub fn success_bias(&self, key: &RequestKey) -> f64 {
        if self.pins.is_pinned(key) {
            0.0
        } else {
            self.success_probability
        }
    }

    pub fn decide(&self, key: &RequestKey, rng: &mut MockRng) -> Outcome {
        let bias = self.success_bias(key);
        let succeeded = rng.boolean(bias);
        log::debug!("outcome {key}: bias={bias} succeeded={succeeded}");
        Outcome { succeeded }
    }
}
