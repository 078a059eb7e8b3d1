//! Developer payouts: on-demand claims and the batched daily sweep.

use soroban_sdk::{Address, Env};

use crate::types::DeveloperProfile;
use crate::{escrow, events, identity, storage, Error, PAYOUT_INTERVAL_SECS};

/// Pay the caller everything they have earned so far.
pub fn claim(env: &Env, caller: &Address) -> Result<u64, Error> {
    let mut developer = identity::require_developer(env, caller)?;
    if developer.pending_payout == 0 {
        return Err(Error::NothingToClaim);
    }
    let platform = storage::load_config(env)?;
    let now = env.ledger().timestamp();

    let amount = settle(&mut developer, now);
    storage::save_developer(env, &developer, false);
    escrow::release(env, &platform.token, caller, amount);

    events::emit_payout_sent(env, caller.clone(), amount, false);
    Ok(amount)
}

/// Pay up to `max_batch` developers whose earnings have waited at least one
/// payout interval. Developers are visited in registration order.
///
/// Returns how many developers were paid.
pub fn trigger_scheduled(env: &Env, max_batch: u32) -> Result<u32, Error> {
    let platform = storage::load_config(env)?;
    let now = env.ledger().timestamp();
    let mut processed: u32 = 0;

    for slot in 0..storage::developer_count(env) {
        if processed >= max_batch {
            break;
        }
        let Some(address) = storage::developer_at(env, slot) else {
            continue;
        };
        let Some(mut developer) = storage::load_developer(env, &address) else {
            continue;
        };
        if !is_due(&developer, now) {
            continue;
        }

        let amount = settle(&mut developer, now);
        storage::save_developer(env, &developer, false);
        escrow::release(env, &platform.token, &address, amount);
        events::emit_payout_sent(env, address, amount, true);
        processed += 1;
    }

    Ok(processed)
}

/// Whether the scheduled sweep should pay `developer` at `now`.
pub fn is_due(developer: &DeveloperProfile, now: u64) -> bool {
    developer.pending_payout > 0
        && now.saturating_sub(developer.last_payout_at) >= PAYOUT_INTERVAL_SECS
}

/// Zero the pending payout and return what it was.
fn settle(developer: &mut DeveloperProfile, now: u64) -> u64 {
    let amount = developer.pending_payout;
    developer.pending_payout = 0;
    developer.last_payout_at = now;
    developer.updated_at = now;
    amount
}
