//! # Types
//!
//! Shared data structures used across all modules of the ad ledger.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A [`Campaign`] is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`]: written once at creation; never mutated.
//! - [`CampaignState`]: written on every impression, click and status change.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for convenience.
//!
//! ### Status machine
//!
//! ```text
//! Active ◄──► Paused
//!   │  ▲        │
//!   ▼  │        ▼
//!  Stopped ◄────┘
//! ```
//!
//! Owners may move a campaign between any two states. The ledger itself only
//! ever drives `Active ──► Stopped`, when a reward would overdraw the budget.

use soroban_sdk::{contracttype, Address, String};

/// How a campaign pays its publishers.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PricingModel {
    /// Cost per click: `rate` is paid for every accepted click.
    Cpc,
    /// Cost per mille: `rate` is paid once per 1000 impressions.
    Cpm,
}

/// Lifecycle state of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Serving ads and accepting interactions.
    Active,
    /// Temporarily halted by its owner.
    Paused,
    /// Halted by its owner or by budget exhaustion.
    Stopped,
}

/// Arguments supplied by a hoster when opening a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignParams {
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_url: String,
    /// Reference to the creative asset held in external blob storage.
    pub creative_uri: String,
    pub pricing_model: PricingModel,
    /// Payout per click (CPC) or per 1000 impressions (CPM), in token units.
    pub rate: u64,
    /// Amount escrowed for the whole campaign, in token units.
    pub budget: u64,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u32,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_url: String,
    pub creative_uri: String,
    pub pricing_model: PricingModel,
    pub rate: u64,
    pub budget: u64,
    pub created_at: u64,
}

/// Mutable campaign counters, rewritten on every interaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub spent: u64,
    pub status: CampaignStatus,
    pub impressions: u64,
    pub clicks: u64,
    /// Impressions accrued towards the next CPM payout. Always below 1000.
    pub impression_buffer: u32,
    pub updated_at: u64,
}

impl CampaignState {
    /// State of a freshly created campaign.
    pub fn fresh(now: u64) -> Self {
        Self {
            spent: 0,
            status: CampaignStatus::Active,
            impressions: 0,
            clicks: 0,
            impression_buffer: 0,
            updated_at: now,
        }
    }
}

/// Full representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from
/// the split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential id, starting at 1.
    pub id: u32,
    /// Hoster that funded the campaign.
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_url: String,
    pub creative_uri: String,
    pub pricing_model: PricingModel,
    pub rate: u64,
    /// Escrowed amount. `spent` never exceeds it.
    pub budget: u64,
    pub spent: u64,
    pub status: CampaignStatus,
    pub impressions: u64,
    pub clicks: u64,
    pub impression_buffer: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Self {
            id: config.id,
            owner: config.owner,
            title: config.title,
            description: config.description,
            category: config.category,
            target_url: config.target_url,
            creative_uri: config.creative_uri,
            pricing_model: config.pricing_model,
            rate: config.rate,
            budget: config.budget,
            spent: state.spent,
            status: state.status,
            impressions: state.impressions,
            clicks: state.clicks,
            impression_buffer: state.impression_buffer,
            created_at: config.created_at,
            updated_at: state.updated_at,
        }
    }

    /// Budget not yet paid out.
    pub fn remaining_budget(&self) -> u64 {
        self.budget.saturating_sub(self.spent)
    }
}

/// Advertiser profile.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HosterProfile {
    pub address: Address,
    pub name: String,
    pub business_name: String,
    pub categories: String,
    /// Sum of every budget this hoster has escrowed.
    pub total_budget: u64,
    /// Sum of every reward debited from this hoster's campaigns.
    pub total_spent: u64,
    pub active_campaigns: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Publisher profile.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeveloperProfile {
    pub address: Address,
    pub name: String,
    pub website: String,
    pub categories: String,
    /// Trust score in `[0, 100]`; starts at 50.
    pub reputation: u32,
    pub impressions: u64,
    pub clicks: u64,
    /// Earned but not yet paid out.
    pub pending_payout: u64,
    pub lifetime_earnings: u64,
    /// Gates scheduled payouts to one per payout interval.
    pub last_payout_at: u64,
    pub fraud_count: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Platform-wide settings written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub name: String,
    pub owner: Address,
    /// Token contract used for escrow and payouts.
    pub token: Address,
}

/// Aggregated platform metrics returned by `get_platform_stats`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlatformStats {
    pub hosters: u32,
    pub developers: u32,
    pub total_campaigns: u32,
    pub active_campaigns: u32,
    pub total_budget: u64,
    pub total_spent: u64,
    pub total_impressions: u64,
    pub total_clicks: u64,
}
