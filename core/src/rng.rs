//! Deterministic random number generation.
//!
//! RULE: Nothing in the mock engine may call a process-wide RNG.
//! Every request builds its own MockRng, seeded from the request key,
//! and threads it by `&mut` through the outcome policy and synthesizers.
//!
//! For a fixed seed, the same sequence of calls (same order, same
//! arguments) yields the same sequence of results on every platform
//! and every run. Reordering draws changes every downstream value.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::types::RequestKey;

/// A per-request RNG stream.
pub struct MockRng {
    inner: Pcg64Mcg,
}

impl MockRng {
    /// Reproducible stream derived from a request key.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Non-reproducible stream seeded from OS entropy.
    pub fn unseeded() -> Self {
        Self {
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    /// The stream for a request: seeded when its key seeds, unseeded
    /// otherwise (see `RequestKey::seed`).
    pub fn for_key(key: &RequestKey) -> Self {
        match key.seed() {
            Some(seed) => Self::seeded(seed),
            None => Self::unseeded(),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability `bias_toward_true`.
    /// A bias of 0.0 never returns true; 1.0 always does.
    pub fn boolean(&mut self, bias_toward_true: f64) -> bool {
        self.next_f64() < bias_toward_true
    }

    /// Uniform integer in the inclusive range [min, max].
    pub fn int_in_range(&mut self, min: u64, max: u64) -> u64 {
        assert!(min <= max, "min must be <= max");
        let span = max - min;
        if span == u64::MAX {
            return self.inner.next_u64();
        }
        min + self.next_u64_below(span + 1)
    }

    /// Uniform float on the grid `min + k * step`, never exceeding `max`.
    pub fn float_in_range(&mut self, min: f64, max: f64, step: f64) -> f64 {
        assert!(step > 0.0, "step must be > 0");
        assert!(min <= max, "min must be <= max");
        let steps = ((max - min) / step).floor() as u64;
        let k = self.int_in_range(0, steps);
        min + k as f64 * step
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick_one<'a, T>(&mut self, values: &'a [T]) -> &'a T {
        let index = self.next_u64_below(values.len() as u64) as usize;
        &values[index]
    }

    /// `[A-Za-z0-9]{length}`.
    pub fn alphanumeric_string(&mut self, length: usize) -> String {
        (&mut self.inner)
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    /// `[0-9]{length}`, leading zeros allowed.
    pub fn numeric_string(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(b'0' + self.next_u64_below(10) as u8))
            .collect()
    }

    /// A date in [reference - max_days_ago, reference].
    pub fn recent_date(&mut self, max_days_ago: u64, reference: NaiveDate) -> NaiveDate {
        let days_ago = self.int_in_range(0, max_days_ago);
        reference - Duration::days(days_ago as i64)
    }

    /// An instant strictly after `reference`, at most `max_seconds_ahead` later.
    pub fn soon_datetime(
        &mut self,
        max_seconds_ahead: u64,
        reference: DateTime<Utc>,
    ) -> DateTime<Utc> {
        let ahead = self.int_in_range(1, max_seconds_ahead.max(1));
        reference + Duration::seconds(ahead as i64)
    }
}
