#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, CampaignStatus, DeveloperProfile};
use crate::{CPM_UNIT, MAX_REPUTATION, MIN_REPUTATION};

/// A campaign never spends more than it escrowed.
pub fn assert_spent_within_budget(campaign: &Campaign) {
    assert!(
        campaign.spent <= campaign.budget,
        "campaign {} spent {} of budget {}",
        campaign.id,
        campaign.spent,
        campaign.budget
    );
}

/// Spending moves in whole multiples of the rate.
pub fn assert_spent_is_rate_multiple(campaign: &Campaign) {
    assert_eq!(
        campaign.spent % campaign.rate,
        0,
        "campaign {} spent {} at rate {}",
        campaign.id,
        campaign.spent,
        campaign.rate
    );
}

/// The CPM buffer never holds a full unit.
pub fn assert_buffer_below_unit(campaign: &Campaign) {
    assert!(
        campaign.impression_buffer < CPM_UNIT,
        "campaign {} buffer {}",
        campaign.id,
        campaign.impression_buffer
    );
}

/// Reputation stays inside its bounds.
pub fn assert_reputation_bounded(developer: &DeveloperProfile) {
    assert!(
        (MIN_REPUTATION..=MAX_REPUTATION).contains(&developer.reputation),
        "reputation {} out of range",
        developer.reputation
    );
}

/// Lifetime earnings cover everything still pending.
pub fn assert_pending_within_lifetime(developer: &DeveloperProfile) {
    assert!(
        developer.pending_payout <= developer.lifetime_earnings,
        "pending {} exceeds lifetime {}",
        developer.pending_payout,
        developer.lifetime_earnings
    );
}

/// A campaign that could still afford a reward was not halted by the
/// ledger. Only meaningful for campaigns whose owner never stopped them.
pub fn assert_halt_justified(campaign: &Campaign) {
    if campaign.status == CampaignStatus::Stopped {
        assert!(
            campaign.remaining_budget() < campaign.rate,
            "campaign {} stopped with {} left at rate {}",
            campaign.id,
            campaign.remaining_budget(),
            campaign.rate
        );
    }
}

/// Campaign ids are sequential starting from 1.
pub fn assert_sequential_ids(campaigns: &[Campaign]) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(
            campaign.id,
            i as u32 + 1,
            "expected id {}, got {}",
            i + 1,
            campaign.id
        );
    }
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_spent_within_budget(campaign);
    assert_spent_is_rate_multiple(campaign);
    assert_buffer_below_unit(campaign);
}

/// Run all stateless developer invariants.
pub fn assert_all_developer_invariants(developer: &DeveloperProfile) {
    assert_reputation_bounded(developer);
    assert_pending_within_lifetime(developer);
}
