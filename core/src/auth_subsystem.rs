//! Auth — token issuance. No key, no seed: tokens are never reproducible.

use crate::{response::TokenBody, rng::MockRng};
use chrono::{DateTime, Utc};

pub const TOKEN_TYPE: &str = "Bearer";

/// Credentials are only shape-checked by the caller; any pair is accepted.
pub fn issue_token(
    token_length: usize,
    ttl_max_secs: u64,
    now: DateTime<Utc>,
    rng: &mut MockRng,
) -> TokenBody {
    TokenBody {
        token:      rng.alphanumeric_string(token_length),
        expires_at: rng.soon_datetime(ttl_max_secs, now),
        token_type: TOKEN_TYPE,
    }
}
