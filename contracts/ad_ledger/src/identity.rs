//! # Identity Registry
//!
//! Manages the two participant profiles of the ledger:
//!
//! ```text
//! Hoster     : advertiser; funds and owns campaigns
//! Developer  : publisher; serves ads and earns rewards
//! ```
//!
//! ## Storage layout
//!
//! - `DataKey::Hoster(addr)`    → `HosterProfile`
//! - `DataKey::Developer(addr)` → `DeveloperProfile`
//! - `DataKey::DeveloperAt(n)`  → `Address`, the n-th developer to register
//!
//! ## Rules
//!
//! - A profile is created on first registration and updated in place on every
//!   later one; `created_at` and all ledger-maintained counters survive updates.
//! - An address may hold both profiles at once.
//! - New developers start with `last_payout_at = now`, so they are not eligible
//!   for a scheduled payout until one full interval has passed.

use soroban_sdk::{Address, Env, String};

use crate::types::{DeveloperProfile, HosterProfile};
use crate::{events, storage, Error, INITIAL_REPUTATION};

// ─────────────────────────────────────────────────────────
// Registration
// ─────────────────────────────────────────────────────────

/// Create or update the hoster profile of `caller`.
///
/// Emits a `hoster` event.
pub fn register_hoster(
    env: &Env,
    caller: &Address,
    name: String,
    business_name: String,
    categories: String,
) -> Result<HosterProfile, Error> {
    require_non_empty(&name)?;
    let now = env.ledger().timestamp();

    let existing = storage::load_hoster(env, caller);
    let is_new = existing.is_none();
    let mut profile = existing.unwrap_or_else(|| HosterProfile {
        address: caller.clone(),
        name: name.clone(),
        business_name: business_name.clone(),
        categories: categories.clone(),
        total_budget: 0,
        total_spent: 0,
        active_campaigns: 0,
        created_at: now,
        updated_at: now,
    });

    profile.name = name;
    profile.business_name = business_name;
    profile.categories = categories;
    profile.updated_at = now;

    storage::save_hoster(env, &profile, is_new);
    events::emit_hoster_registered(env, caller.clone(), is_new);
    Ok(profile)
}

/// Create or update the developer profile of `caller`.
///
/// Emits a `developer` event.
pub fn register_developer(
    env: &Env,
    caller: &Address,
    name: String,
    website: String,
    categories: String,
) -> Result<DeveloperProfile, Error> {
    require_non_empty(&name)?;
    let now = env.ledger().timestamp();

    let existing = storage::load_developer(env, caller);
    let is_new = existing.is_none();
    let mut profile = existing.unwrap_or_else(|| DeveloperProfile {
        address: caller.clone(),
        name: name.clone(),
        website: website.clone(),
        categories: categories.clone(),
        reputation: INITIAL_REPUTATION,
        impressions: 0,
        clicks: 0,
        pending_payout: 0,
        lifetime_earnings: 0,
        last_payout_at: now,
        fraud_count: 0,
        created_at: now,
        updated_at: now,
    });

    profile.name = name;
    profile.website = website;
    profile.categories = categories;
    profile.updated_at = now;

    storage::save_developer(env, &profile, is_new);
    events::emit_developer_registered(env, caller.clone(), is_new);
    Ok(profile)
}

// ─────────────────────────────────────────────────────────
// Guards
// ─────────────────────────────────────────────────────────

/// Load the hoster profile of `address` or fail with `HosterNotFound`.
pub fn require_hoster(env: &Env, address: &Address) -> Result<HosterProfile, Error> {
    storage::load_hoster(env, address).ok_or(Error::HosterNotFound)
}

/// Load the developer profile of `address` or fail with `DeveloperNotFound`.
pub fn require_developer(env: &Env, address: &Address) -> Result<DeveloperProfile, Error> {
    storage::load_developer(env, address).ok_or(Error::DeveloperNotFound)
}

/// Reject empty required text arguments.
#[inline]
pub fn require_non_empty(value: &String) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}
