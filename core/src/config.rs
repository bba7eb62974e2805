use crate::{
    clock::MockClock,
    error::MockResult,
    outcome::{PinnedOverrides, DEFAULT_SUCCESS_PROBABILITY},
    types::{Msisdn, ReportNumber},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";
pub const DEFAULT_KEY_LENGTH: usize = 356;

/// What `GET /gio/cliente/{msisdn}` does with `balance` when the
/// lookup outcome failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BalanceOnFailure {
    /// Balance stays populated; only `plan` is nulled.
    #[default]
    Populated,
    /// Balance is nulled together with `plan`.
    Omitted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub bind_addr:            String,
    /// Probability that an unpinned request succeeds.
    pub success_probability:  f64,
    pub pinned_report:        u64,
    pub pinned_msisdn:        String,
    pub pinned_customer_name: String,
    /// Exact length required of the `X-API-Key` header.
    pub api_key_length:       usize,
    pub token_length:         usize,
    /// Upper bound for token expiry, in seconds from issuance.
    pub token_ttl_max_secs:   u64,
    pub balance_on_failure:   BalanceOnFailure,
    /// When set, dates are synthesized relative to this day instead of today.
    pub reference_date:       Option<NaiveDate>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_addr:            DEFAULT_BIND_ADDR.into(),
            success_probability:  DEFAULT_SUCCESS_PROBABILITY,
            pinned_report:        99_999,
            pinned_msisdn:        "525554094045".into(),
            pinned_customer_name: "Test".into(),
            api_key_length:       DEFAULT_KEY_LENGTH,
            token_length:         DEFAULT_KEY_LENGTH,
            token_ttl_max_secs:   24 * 60 * 60,
            balance_on_failure:   BalanceOnFailure::Populated,
            reference_date:       None,
        }
    }
}

impl MockConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    /// In tests, use MockConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with a pinned reference date, so date fields reproduce.
    pub fn default_test() -> Self {
        Self {
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 20),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.success_probability) {
            anyhow::bail!(
                "success_probability must be within [0, 1], got {}",
                self.success_probability
            );
        }
        if self.api_key_length == 0 || self.token_length == 0 {
            anyhow::bail!("api_key_length and token_length must be > 0");
        }
        self.pinned_overrides()?;
        Ok(())
    }

    pub fn pinned_overrides(&self) -> MockResult<PinnedOverrides> {
        Ok(PinnedOverrides {
            report:        ReportNumber::new(self.pinned_report)?,
            msisdn:        Msisdn::parse(&self.pinned_msisdn)?,
            customer_name: self.pinned_customer_name.clone(),
        })
    }

    pub fn clock(&self) -> MockClock {
        match self.reference_date {
            Some(date) => MockClock::fixed_on(date),
            None => MockClock::System,
        }
    }
}
