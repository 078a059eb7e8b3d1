//! # Reward Engine
//!
//! Moves value from a campaign's escrowed budget to a developer's pending
//! payout and keeps the developer's reputation in step.
//!
//! Functions here mutate the records they are handed; persisting the campaign
//! state and the developer profile is left to the caller, which owns the
//! surrounding read-modify-write cycle. Hoster totals are the exception: the
//! engine loads and saves the owning hoster itself, since no caller holds it.
//!
//! A reward that would push `spent` past `budget` is not an error. The
//! campaign is stopped instead, the debit is dropped, and the call carries on.

use soroban_sdk::{log, Env};

use crate::types::{CampaignConfig, CampaignState, CampaignStatus, DeveloperProfile};
use crate::{
    events, storage, Error, FRAUD_PENALTY, GENUINE_BONUS, MAX_REPUTATION, MIN_REPUTATION,
};

/// Result of a single [`reward_publisher`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardOutcome {
    /// The campaign was not active; nothing happened.
    Skipped,
    /// The budget could not cover the reward; the campaign is now stopped.
    Halted,
    /// The campaign was debited and the developer credited.
    Paid,
}

/// `current + delta`, clamped to the reputation bounds.
pub fn clamp_reputation(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(MIN_REPUTATION), i64::from(MAX_REPUTATION)) as u32
}

pub fn adjust_reputation(profile: &mut DeveloperProfile, delta: i32) {
    profile.reputation = clamp_reputation(profile.reputation, delta);
}

/// Record one fraudulent interaction against `profile`.
pub fn flag_fraud(profile: &mut DeveloperProfile) {
    profile.fraud_count = profile.fraud_count.saturating_add(1);
    adjust_reputation(profile, -FRAUD_PENALTY);
}

/// Add `amount` to the developer's earnings.
///
/// Genuine credits raise reputation; non-genuine ones are paid but counted
/// as fraud.
pub fn credit_developer(
    developer: &mut DeveloperProfile,
    amount: u64,
    genuine: bool,
    now: u64,
) -> Result<(), Error> {
    developer.pending_payout = developer
        .pending_payout
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    developer.lifetime_earnings = developer
        .lifetime_earnings
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    if genuine {
        adjust_reputation(developer, GENUINE_BONUS);
    } else {
        flag_fraud(developer);
    }
    developer.updated_at = now;
    Ok(())
}

/// Charge `amount` to the campaign.
///
/// Returns `false` and stops the campaign when the budget cannot cover it;
/// `spent` is left untouched in that case. A sum past `u64::MAX` is past any
/// budget and halts the same way.
pub fn debit_campaign(
    env: &Env,
    config: &CampaignConfig,
    state: &mut CampaignState,
    amount: u64,
    now: u64,
) -> bool {
    match state.spent.checked_add(amount) {
        Some(next) if next <= config.budget => {
            state.spent = next;
            state.updated_at = now;
            true
        }
        _ => {
            halt_campaign(env, config, state, now);
            false
        }
    }
}

/// Pay `developer` `amount` out of the campaign's budget.
pub fn reward_publisher(
    env: &Env,
    config: &CampaignConfig,
    state: &mut CampaignState,
    developer: &mut DeveloperProfile,
    amount: u64,
    genuine: bool,
) -> Result<RewardOutcome, Error> {
    if state.status != CampaignStatus::Active {
        return Ok(RewardOutcome::Skipped);
    }
    let now = env.ledger().timestamp();
    if !debit_campaign(env, config, state, amount, now) {
        return Ok(RewardOutcome::Halted);
    }
    credit_developer(developer, amount, genuine, now)?;

    if let Some(mut hoster) = storage::load_hoster(env, &config.owner) {
        hoster.total_spent = hoster
            .total_spent
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        hoster.updated_at = now;
        storage::save_hoster(env, &hoster, false);
    }

    events::emit_publisher_rewarded(env, config.id, developer.address.clone(), amount);
    Ok(RewardOutcome::Paid)
}

fn halt_campaign(env: &Env, config: &CampaignConfig, state: &mut CampaignState, now: u64) {
    log!(
        env,
        "campaign {} halted: spent {} of budget {}",
        config.id,
        state.spent,
        config.budget
    );
    state.status = CampaignStatus::Stopped;
    state.updated_at = now;

    if let Some(mut hoster) = storage::load_hoster(env, &config.owner) {
        hoster.active_campaigns = hoster.active_campaigns.saturating_sub(1);
        hoster.updated_at = now;
        storage::save_hoster(env, &hoster, false);
    }

    events::emit_campaign_halted(env, config.id, state.spent, config.budget);
}
