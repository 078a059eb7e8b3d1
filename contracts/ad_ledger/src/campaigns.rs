//! Campaign creation and owner-driven status changes.

use soroban_sdk::{Address, Env};

use crate::identity::{self, require_non_empty};
use crate::types::{Campaign, CampaignConfig, CampaignParams, CampaignState, CampaignStatus};
use crate::{escrow, events, storage, Error, MIN_RATE};

/// Open a new campaign funded from `caller`'s balance.
///
/// Every check runs before the first write: argument validation, then the
/// attached amount against the budget, then the hoster profile lookup.
pub fn create_campaign(
    env: &Env,
    caller: &Address,
    params: CampaignParams,
    attached: u64,
) -> Result<u32, Error> {
    require_non_empty(&params.title)?;
    require_non_empty(&params.category)?;
    require_non_empty(&params.target_url)?;
    if params.rate < MIN_RATE {
        return Err(Error::InvalidRate);
    }
    if attached < params.budget {
        return Err(Error::InsufficientFunds);
    }

    let mut hoster = identity::require_hoster(env, caller)?;
    let platform = storage::load_config(env)?;

    hoster.total_budget = hoster
        .total_budget
        .checked_add(params.budget)
        .ok_or(Error::Overflow)?;
    hoster.active_campaigns = hoster
        .active_campaigns
        .checked_add(1)
        .ok_or(Error::Overflow)?;

    let now = env.ledger().timestamp();
    let id = storage::next_campaign_id(env)?;
    let config = CampaignConfig {
        id,
        owner: caller.clone(),
        title: params.title,
        description: params.description,
        category: params.category,
        target_url: params.target_url,
        creative_uri: params.creative_uri,
        pricing_model: params.pricing_model,
        rate: params.rate,
        budget: params.budget,
        created_at: now,
    };
    storage::save_new_campaign(env, &config, &CampaignState::fresh(now));

    hoster.updated_at = now;
    storage::save_hoster(env, &hoster, false);

    escrow::lock(env, &platform.token, caller, params.budget);

    events::emit_campaign_created(env, id, caller.clone(), config.rate, config.budget);
    Ok(id)
}

/// Move a campaign to `next`. Only the owner may do this.
///
/// Entering `Stopped` releases one of the owner's active-campaign slots and
/// leaving it takes one back, so `active_campaigns` tracks non-stopped
/// campaigns.
pub fn update_status(
    env: &Env,
    caller: &Address,
    campaign_id: u32,
    next: CampaignStatus,
) -> Result<Campaign, Error> {
    let (config, mut state) = storage::load_campaign_pair(env, campaign_id)?;
    if config.owner != *caller {
        return Err(Error::NotCampaignOwner);
    }

    let previous = state.status;
    let now = env.ledger().timestamp();

    if previous != next {
        let stopping = next == CampaignStatus::Stopped;
        let resuming = previous == CampaignStatus::Stopped;
        if stopping || resuming {
            let mut hoster = identity::require_hoster(env, caller)?;
            hoster.active_campaigns = if stopping {
                hoster.active_campaigns.saturating_sub(1)
            } else {
                hoster
                    .active_campaigns
                    .checked_add(1)
                    .ok_or(Error::Overflow)?
            };
            hoster.updated_at = now;
            storage::save_hoster(env, &hoster, false);
        }
    }

    state.status = next;
    state.updated_at = now;
    storage::save_campaign_state(env, campaign_id, &state);

    events::emit_status_changed(env, campaign_id, next);
    Ok(Campaign::from_parts(config, state))
}
