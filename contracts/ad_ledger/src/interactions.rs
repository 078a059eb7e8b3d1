//! Impression and click accounting.
//!
//! Both entry points load the campaign state and the developer profile once,
//! mutate them in memory, and write both back before returning. Developer
//! counters are always persisted, including when the reward is withheld
//! because the click was replayed or the budget ran out.

use soroban_sdk::{log, Address, Env, String};

use crate::identity::{self, require_non_empty};
use crate::rewards::{self, RewardOutcome};
use crate::types::{CampaignConfig, CampaignState, CampaignStatus, PricingModel};
use crate::{events, fraud, storage, Error, CPM_UNIT};

/// Count one impression served by `publisher`.
///
/// CPM campaigns accrue impressions and pay `rate` each time 1000 have
/// accumulated; the remainder carries over to later calls. CPC campaigns
/// only count.
pub fn record_impression(
    env: &Env,
    campaign_id: u32,
    publisher: &Address,
) -> Result<Option<RewardOutcome>, Error> {
    let (config, mut state) = load_active(env, campaign_id)?;
    let mut developer = identity::require_developer(env, publisher)?;
    let now = env.ledger().timestamp();

    state.impressions = state.impressions.checked_add(1).ok_or(Error::Overflow)?;
    state.updated_at = now;
    developer.impressions = developer
        .impressions
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    developer.updated_at = now;

    let mut outcome = None;
    if config.pricing_model == PricingModel::Cpm {
        state.impression_buffer += 1;
        if state.impression_buffer >= CPM_UNIT {
            state.impression_buffer -= CPM_UNIT;
            outcome = Some(rewards::reward_publisher(
                env,
                &config,
                &mut state,
                &mut developer,
                config.rate,
                true,
            )?);
        }
    }

    storage::save_campaign_state(env, campaign_id, &state);
    storage::save_developer(env, &developer, false);
    Ok(outcome)
}

/// Count one click and reward it unless it replays a recent one.
///
/// Returns `false` for a replayed click. The replay is penalised on the
/// developer's profile and the call still succeeds, so the penalty sticks.
pub fn record_click(
    env: &Env,
    campaign_id: u32,
    publisher: &Address,
    fingerprint: &String,
) -> Result<bool, Error> {
    require_non_empty(fingerprint)?;
    let (config, mut state) = load_active(env, campaign_id)?;
    if config.pricing_model != PricingModel::Cpc {
        return Err(Error::NotCpcCampaign);
    }
    let mut developer = identity::require_developer(env, publisher)?;
    let now = env.ledger().timestamp();

    developer.clicks = developer.clicks.checked_add(1).ok_or(Error::Overflow)?;
    developer.updated_at = now;

    if !fraud::record_click_fingerprint(env, campaign_id, publisher, fingerprint, now) {
        log!(env, "replayed click on campaign {}", campaign_id);
        rewards::flag_fraud(&mut developer);
        storage::save_developer(env, &developer, false);
        events::emit_click_rejected(env, campaign_id, publisher.clone(), fingerprint.clone());
        return Ok(false);
    }

    state.clicks = state.clicks.checked_add(1).ok_or(Error::Overflow)?;
    state.updated_at = now;
    rewards::reward_publisher(env, &config, &mut state, &mut developer, config.rate, true)?;

    storage::save_campaign_state(env, campaign_id, &state);
    storage::save_developer(env, &developer, false);
    Ok(true)
}

fn load_active(env: &Env, campaign_id: u32) -> Result<(CampaignConfig, CampaignState), Error> {
    let (config, state) = storage::load_campaign_pair(env, campaign_id)?;
    if state.status != CampaignStatus::Active {
        return Err(Error::CampaignNotActive);
    }
    Ok((config, state))
}
