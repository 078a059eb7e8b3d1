//! # Auction Selector & Stats Aggregator
//!
//! Read-only views over the campaign store. Every scan walks ids from the
//! newest down, so ties and pagination both favour recently created
//! campaigns. Category-scoped scans walk the per-category slot index instead of
//! visiting every campaign.

use soroban_sdk::{Env, String, Vec};

use crate::types::{Campaign, CampaignStatus, PlatformStats};
use crate::{storage, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

/// Highest-rate active campaign in `category`.
///
/// On equal rates the most recently created campaign wins.
pub fn request_ad(env: &Env, category: &String) -> Option<Campaign> {
    let mut best: Option<Campaign> = None;

    for slot in (0..storage::category_len(env, category)).rev() {
        let Some(id) = storage::category_campaign_at(env, category, slot) else {
            continue;
        };
        let Ok(campaign) = storage::load_campaign(env, id) else {
            continue;
        };
        if campaign.status != CampaignStatus::Active {
            continue;
        }
        let better = match &best {
            Some(current) => campaign.rate > current.rate,
            None => true,
        };
        if better {
            best = Some(campaign);
        }
    }

    best
}

/// Newest-first page of campaigns matching the optional filters.
///
/// `offset` counts matches, not ids. A `limit` of 0 selects the default page
/// size; larger values are capped.
pub fn list_campaigns(
    env: &Env,
    offset: u32,
    limit: u32,
    category: Option<String>,
    status: Option<CampaignStatus>,
) -> Vec<Campaign> {
    let limit = match limit {
        0 => DEFAULT_PAGE_LIMIT,
        n => n.min(MAX_PAGE_LIMIT),
    };

    let mut selected = Vec::new(env);
    let mut skipped: u32 = 0;
    // Returns `true` once the page is full.
    let mut take = |id: u32| -> bool {
        let Ok(campaign) = storage::load_campaign(env, id) else {
            return false;
        };
        if status.is_some_and(|wanted| campaign.status != wanted) {
            return false;
        }
        if skipped < offset {
            skipped += 1;
            return false;
        }
        selected.push_back(campaign);
        selected.len() >= limit
    };

    match &category {
        Some(category) => {
            for slot in (0..storage::category_len(env, category)).rev() {
                if storage::category_campaign_at(env, category, slot).is_some_and(&mut take) {
                    break;
                }
            }
        }
        None => {
            for id in (1..=storage::campaign_count(env)).rev() {
                if take(id) {
                    break;
                }
            }
        }
    }

    selected
}

/// Aggregate counters over every profile and campaign.
pub fn platform_stats(env: &Env) -> PlatformStats {
    let total_campaigns = storage::campaign_count(env);
    let mut stats = PlatformStats {
        hosters: storage::hoster_count(env),
        developers: storage::developer_count(env),
        total_campaigns,
        ..PlatformStats::default()
    };

    for id in (1..=total_campaigns).rev() {
        let Ok((config, state)) = storage::load_campaign_pair(env, id) else {
            continue;
        };
        if state.status == CampaignStatus::Active {
            stats.active_campaigns += 1;
        }
        stats.total_budget = stats.total_budget.saturating_add(config.budget);
        stats.total_spent = stats.total_spent.saturating_add(state.spent);
        stats.total_impressions = stats.total_impressions.saturating_add(state.impressions);
        stats.total_clicks = stats.total_clicks.saturating_add(state.clicks);
    }

    stats
}
