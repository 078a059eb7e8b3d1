//! Replay guard for clicks.
//!
//! A click is identified by `(campaign, publisher, fingerprint)`. The first
//! click of a triple is accepted and its timestamp stored; a repeat is
//! accepted again only once `FRAUD_WINDOW_SECS` have elapsed since the last
//! accepted one. Rejected clicks leave the stored timestamp untouched.

use soroban_sdk::{Address, Env, String};

use crate::{storage, FRAUD_WINDOW_SECS};

/// Returns `true` if the click is fresh and records it, `false` on replay.
pub fn record_click_fingerprint(
    env: &Env,
    campaign_id: u32,
    publisher: &Address,
    fingerprint: &String,
    now: u64,
) -> bool {
    if let Some(last_seen) = storage::click_last_seen(env, campaign_id, publisher, fingerprint) {
        if now.saturating_sub(last_seen) < FRAUD_WINDOW_SECS {
            return false;
        }
    }
    storage::set_click_last_seen(env, campaign_id, publisher, fingerprint, now);
    true
}
