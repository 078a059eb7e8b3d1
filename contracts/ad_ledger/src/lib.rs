//! # Ad Ledger Contract
//!
//! Escrow-backed advertising ledger. Hosters (advertisers) lock a budget into a
//! campaign; developers (publishers) serve the campaign's ads and are credited
//! per click or per thousand impressions out of that budget; earnings are paid
//! out on demand or by a daily batched sweep.
//!
//! | Phase         | Entry Point(s)                                          |
//! |---------------|---------------------------------------------------------|
//! | Bootstrap     | [`AdLedger::init`]                                      |
//! | Registration  | `register_hoster`, `register_developer`                 |
//! | Campaigns     | `create_campaign`, `update_campaign_status`             |
//! | Interactions  | `record_impression`, `record_click`                     |
//! | Payouts       | `claim_developer_earnings`, `trigger_scheduled_payouts` |
//! | Queries       | `get_campaign`, `list_campaigns`, `request_ad`          |
//! |               | `get_platform_stats`, `get_config`                      |
//! |               | `get_hoster_profile`, `get_developer_profile`           |
//!
//! ## Architecture
//!
//! Each component lives in its own module: `identity`, `campaigns`, `fraud`,
//! `rewards`, `interactions`, `payouts` and `queries`. Storage access is fully
//! delegated to `storage`. This file contains only
//! the public entry points, caller authentication and the error type.
//!
//! ## Atomicity
//!
//! Every entry point either returns `Ok` with all of its writes applied or
//! returns an [`Error`], in which case the host discards every write and
//! token transfer made during the call.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

pub mod events;
mod campaigns;
mod escrow;
mod fraud;
mod identity;
mod interactions;
mod payouts;
mod queries;
mod rewards;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use rewards::RewardOutcome;
pub use types::{
    Campaign, CampaignParams, CampaignStatus, DeveloperProfile, HosterProfile, PlatformConfig,
    PlatformStats, PricingModel,
};

// ── Protocol constants ───────────────────────────────────────────────

/// Smallest accepted campaign rate.
pub const MIN_RATE: u64 = 1;
/// Minimum ledger seconds between two rewarded clicks of the same
/// (campaign, publisher, fingerprint) triple.
pub const FRAUD_WINDOW_SECS: u64 = 60;
/// Minimum ledger seconds between two scheduled payouts to one developer.
pub const PAYOUT_INTERVAL_SECS: u64 = 86_400;
/// Impressions per CPM payout.
pub const CPM_UNIT: u32 = 1_000;

pub const INITIAL_REPUTATION: u32 = 50;
pub const MIN_REPUTATION: u32 = 0;
pub const MAX_REPUTATION: u32 = 100;
/// Reputation gained per genuine reward.
pub const GENUINE_BONUS: i32 = 2;
/// Reputation lost per fraudulent interaction.
pub const FRAUD_PENALTY: i32 = 10;

/// Developers paid per `trigger_scheduled_payouts` call when unspecified.
pub const DEFAULT_PAYOUT_BATCH: u32 = 25;
pub const DEFAULT_PAGE_LIMIT: u32 = 12;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidArgument = 3,
    InvalidRate = 4,
    InsufficientFunds = 5,
    NotCampaignOwner = 6,
    CampaignNotFound = 7,
    HosterNotFound = 8,
    DeveloperNotFound = 9,
    CampaignNotActive = 10,
    NotCpcCampaign = 11,
    NothingToClaim = 12,
    Overflow = 13,
}

/// Coarse classification of [`Error`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed argument; rejected before any lookup.
    Validation,
    /// Caller does not own the resource.
    Authorization,
    /// Campaign or profile absent.
    NotFound,
    /// Attached value does not cover the declared budget.
    InsufficientFunds,
    /// Operation not valid for the current state.
    State,
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self {
            Error::InvalidArgument | Error::InvalidRate => ErrorKind::Validation,
            Error::NotCampaignOwner => ErrorKind::Authorization,
            Error::CampaignNotFound | Error::HosterNotFound | Error::DeveloperNotFound => {
                ErrorKind::NotFound
            }
            Error::InsufficientFunds => ErrorKind::InsufficientFunds,
            Error::AlreadyInitialized
            | Error::NotInitialized
            | Error::CampaignNotActive
            | Error::NotCpcCampaign
            | Error::NothingToClaim
            | Error::Overflow => ErrorKind::State,
        }
    }
}

#[contract]
pub struct AdLedger;

#[contractimpl]
impl AdLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the platform.
    ///
    /// Must be called exactly once immediately after deployment.
    /// `token` is the settlement token used for escrow and payouts.
    pub fn init(env: Env, owner: Address, name: String, token: Address) -> Result<(), Error> {
        owner.require_auth();
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        identity::require_non_empty(&name)?;

        let config = PlatformConfig {
            name: name.clone(),
            owner: owner.clone(),
            token: token.clone(),
        };
        storage::save_config(&env, &config);
        events::emit_platform_ready(&env, name, owner, token);
        Ok(())
    }

    /// Return the platform configuration.
    pub fn get_config(env: Env) -> Result<PlatformConfig, Error> {
        storage::load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────

    /// Create or update the caller's advertiser profile.
    pub fn register_hoster(
        env: Env,
        caller: Address,
        name: String,
        business_name: String,
        categories: String,
    ) -> Result<HosterProfile, Error> {
        caller.require_auth();
        identity::register_hoster(&env, &caller, name, business_name, categories)
    }

    /// Create or update the caller's publisher profile.
    pub fn register_developer(
        env: Env,
        caller: Address,
        name: String,
        website: String,
        categories: String,
    ) -> Result<DeveloperProfile, Error> {
        caller.require_auth();
        identity::register_developer(&env, &caller, name, website, categories)
    }

    pub fn get_hoster_profile(env: Env, address: Address) -> Result<HosterProfile, Error> {
        identity::require_hoster(&env, &address)
    }

    pub fn get_developer_profile(env: Env, address: Address) -> Result<DeveloperProfile, Error> {
        identity::require_developer(&env, &address)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a campaign and escrow its budget.
    ///
    /// `attached` is the amount the caller is prepared to transfer; it must
    /// cover `params.budget`, and exactly the budget is moved into escrow.
    /// Returns the new campaign id.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        params: CampaignParams,
        attached: u64,
    ) -> Result<u32, Error> {
        caller.require_auth();
        campaigns::create_campaign(&env, &caller, params, attached)
    }

    /// Pause, resume or stop a campaign. Owner only.
    pub fn update_campaign_status(
        env: Env,
        caller: Address,
        campaign_id: u32,
        status: CampaignStatus,
    ) -> Result<Campaign, Error> {
        caller.require_auth();
        campaigns::update_status(&env, &caller, campaign_id, status)
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    // ─────────────────────────────────────────────────────────
    // Interactions
    // ─────────────────────────────────────────────────────────

    /// Record an impression served by `publisher`.
    ///
    /// Returns `true` if this impression completed a CPM unit and the
    /// publisher was paid for it.
    pub fn record_impression(
        env: Env,
        campaign_id: u32,
        publisher: Address,
    ) -> Result<bool, Error> {
        publisher.require_auth();
        let outcome = interactions::record_impression(&env, campaign_id, &publisher)?;
        Ok(outcome == Some(RewardOutcome::Paid))
    }

    /// Record a click on a CPC campaign.
    ///
    /// Returns `false` when the click replays one seen within the fraud
    /// window; the publisher is penalised and nothing is paid.
    pub fn record_click(
        env: Env,
        campaign_id: u32,
        publisher: Address,
        fingerprint: String,
    ) -> Result<bool, Error> {
        publisher.require_auth();
        interactions::record_click(&env, campaign_id, &publisher, &fingerprint)
    }

    // ─────────────────────────────────────────────────────────
    // Payouts
    // ─────────────────────────────────────────────────────────

    /// Withdraw the caller's pending earnings. Returns the amount paid.
    pub fn claim_developer_earnings(env: Env, caller: Address) -> Result<u64, Error> {
        caller.require_auth();
        payouts::claim(&env, &caller)
    }

    /// Pay developers whose earnings have waited a full payout interval.
    ///
    /// Permissionless. Returns the number of developers paid.
    pub fn trigger_scheduled_payouts(env: Env, max_batch: Option<u32>) -> Result<u32, Error> {
        payouts::trigger_scheduled(&env, max_batch.unwrap_or(DEFAULT_PAYOUT_BATCH))
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Pick the ad to serve for `category`, or `None` if nothing is active.
    pub fn request_ad(env: Env, category: String) -> Option<Campaign> {
        queries::request_ad(&env, &category)
    }

    /// Newest-first page of campaigns, optionally filtered.
    pub fn list_campaigns(
        env: Env,
        offset: u32,
        limit: u32,
        category: Option<String>,
        status: Option<CampaignStatus>,
    ) -> Vec<Campaign> {
        queries::list_campaigns(&env, offset, limit, category, status)
    }

    pub fn get_platform_stats(env: Env) -> PlatformStats {
        queries::platform_stats(&env)
    }
}
