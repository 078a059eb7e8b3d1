//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type             | Description                         |
//! |------------------|------------------|-------------------------------------|
//! | `Config`         | `PlatformConfig` | Name, owner and settlement token    |
//! | `CampaignCount`  | `u32`            | Last issued campaign id             |
//! | `HosterCount`    | `u32`            | Number of registered hosters        |
//! | `DeveloperCount` | `u32`            | Number of registered developers     |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                          | Type               | Description                   |
//! |------------------------------|--------------------|-------------------------------|
//! | `CampConfig(id)`             | `CampaignConfig`   | Immutable campaign settings   |
//! | `CampState(id)`              | `CampaignState`    | Mutable campaign counters     |
//! | `CategoryLen(name)`          | `u32`              | Campaigns filed under `name`  |
//! | `CategoryAt(name, slot)`     | `u32`              | Campaign id in slot `slot`    |
//! | `Hoster(addr)`               | `HosterProfile`    | Advertiser profile            |
//! | `Developer(addr)`            | `DeveloperProfile` | Publisher profile             |
//! | `DeveloperAt(slot)`          | `Address`          | Publisher in signup slot      |
//! | `Click(id, addr, fp)`        | `u64`              | Last accepted click timestamp |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Indexes are one entry per slot plus a length, so appending never rewrites
//! earlier slots and no single entry grows with the number of records.
//!
//! ## Config and State
//!
//! Impressions are the highest-frequency write in the system. `CampaignState`
//! is a handful of integers, while `CampaignConfig` carries every string the
//! hoster supplied. An impression rewrites only the small entry.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::{
    Campaign, CampaignConfig, CampaignState, DeveloperProfile, HosterProfile, PlatformConfig,
};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Platform configuration (Instance).
    Config,
    /// Last issued campaign id (Instance).
    CampaignCount,
    /// Registered hoster count (Instance).
    HosterCount,
    /// Registered developer count (Instance).
    DeveloperCount,
    /// Immutable campaign configuration keyed by id (Persistent).
    CampConfig(u32),
    /// Mutable campaign state keyed by id (Persistent).
    CampState(u32),
    /// Number of campaigns filed under a category (Persistent).
    CategoryLen(String),
    /// Campaign id at a slot of a category index, creation order (Persistent).
    CategoryAt(String, u32),
    /// Hoster profile keyed by address (Persistent).
    Hoster(Address),
    /// Developer profile keyed by address (Persistent).
    Developer(Address),
    /// Developer address at a registration slot (Persistent).
    DeveloperAt(u32),
    /// Last accepted click for (campaign, publisher, fingerprint) (Persistent).
    Click(u32, Address, String),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &PlatformConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Load the platform configuration, failing before `init`.
pub fn load_config(env: &Env) -> Result<PlatformConfig, Error> {
    let config: PlatformConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

// ─────────────────────────────────────────────────────────
// Counters
// ─────────────────────────────────────────────────────────

/// Number of campaigns ever created, which is also the highest id issued.
pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Increment the campaign counter and return the new id.
/// Ids start at 1; 0 is never issued.
pub fn next_campaign_id(env: &Env) -> Result<u32, Error> {
    bump_instance(env);
    let next = campaign_count(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    Ok(next)
}

pub fn hoster_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::HosterCount)
        .unwrap_or(0)
}

fn increment_hoster_count(env: &Env) {
    bump_instance(env);
    let count = hoster_count(env).saturating_add(1);
    env.storage().instance().set(&DataKey::HosterCount, &count);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn get_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ─────────────────────────────────────────────────────────
// Campaigns
// ─────────────────────────────────────────────────────────

/// Save both entries of a new campaign and index it under its category.
pub fn save_new_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    set_persistent(env, &DataKey::CampConfig(config.id), config);
    set_persistent(env, &DataKey::CampState(config.id), state);

    let slot = category_len(env, &config.category);
    set_persistent(
        env,
        &DataKey::CategoryAt(config.category.clone(), slot),
        &config.id,
    );
    set_persistent(
        env,
        &DataKey::CategoryLen(config.category.clone()),
        &slot.saturating_add(1),
    );
}

/// Load the immutable config and mutable state of a campaign.
pub fn load_campaign_pair(env: &Env, id: u32) -> Result<(CampaignConfig, CampaignState), Error> {
    let config: CampaignConfig =
        get_persistent(env, &DataKey::CampConfig(id)).ok_or(Error::CampaignNotFound)?;
    let state: CampaignState =
        get_persistent(env, &DataKey::CampState(id)).ok_or(Error::CampaignNotFound)?;
    Ok((config, state))
}

/// Load the full `Campaign` by combining config and state.
pub fn load_campaign(env: &Env, id: u32) -> Result<Campaign, Error> {
    let (config, state) = load_campaign_pair(env, id)?;
    Ok(Campaign::from_parts(config, state))
}

/// Save only the mutable campaign state.
pub fn save_campaign_state(env: &Env, id: u32, state: &CampaignState) {
    set_persistent(env, &DataKey::CampState(id), state);
}

/// Number of campaigns ever filed under `category`.
pub fn category_len(env: &Env, category: &String) -> u32 {
    get_persistent(env, &DataKey::CategoryLen(category.clone())).unwrap_or(0)
}

/// Campaign id at `slot` of the `category` index. Slots ascend by creation.
pub fn category_campaign_at(env: &Env, category: &String, slot: u32) -> Option<u32> {
    get_persistent(env, &DataKey::CategoryAt(category.clone(), slot))
}

// ─────────────────────────────────────────────────────────
// Profiles
// ─────────────────────────────────────────────────────────

pub fn load_hoster(env: &Env, address: &Address) -> Option<HosterProfile> {
    get_persistent(env, &DataKey::Hoster(address.clone()))
}

/// Persist a hoster profile. `is_new` counts the signup.
pub fn save_hoster(env: &Env, profile: &HosterProfile, is_new: bool) {
    set_persistent(env, &DataKey::Hoster(profile.address.clone()), profile);
    if is_new {
        increment_hoster_count(env);
    }
}

pub fn load_developer(env: &Env, address: &Address) -> Option<DeveloperProfile> {
    get_persistent(env, &DataKey::Developer(address.clone()))
}

/// Persist a developer profile. `is_new` appends it to the signup index.
pub fn save_developer(env: &Env, profile: &DeveloperProfile, is_new: bool) {
    set_persistent(env, &DataKey::Developer(profile.address.clone()), profile);
    if is_new {
        let slot = developer_count(env);
        set_persistent(env, &DataKey::DeveloperAt(slot), &profile.address);
        bump_instance(env);
        env.storage()
            .instance()
            .set(&DataKey::DeveloperCount, &slot.saturating_add(1));
    }
}

pub fn developer_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DeveloperCount)
        .unwrap_or(0)
}

/// Developer address at registration `slot`.
pub fn developer_at(env: &Env, slot: u32) -> Option<Address> {
    get_persistent(env, &DataKey::DeveloperAt(slot))
}

// ─────────────────────────────────────────────────────────
// Click fingerprints
// ─────────────────────────────────────────────────────────

pub fn click_last_seen(
    env: &Env,
    campaign_id: u32,
    publisher: &Address,
    fingerprint: &String,
) -> Option<u64> {
    get_persistent(
        env,
        &DataKey::Click(campaign_id, publisher.clone(), fingerprint.clone()),
    )
}

pub fn set_click_last_seen(
    env: &Env,
    campaign_id: u32,
    publisher: &Address,
    fingerprint: &String,
    timestamp: u64,
) {
    set_persistent(
        env,
        &DataKey::Click(campaign_id, publisher.clone(), fingerprint.clone()),
        &timestamp,
    );
}
