use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::CampaignStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformReady {
    pub name: String,
    pub owner: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileRegistered {
    pub address: Address,
    /// `true` on first registration, `false` on a profile update.
    pub created: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u32,
    pub owner: Address,
    pub rate: u64,
    pub budget: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStatusChanged {
    pub campaign_id: u32,
    pub status: CampaignStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublisherRewarded {
    pub campaign_id: u32,
    pub publisher: Address,
    pub amount: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignHalted {
    pub campaign_id: u32,
    pub spent: u64,
    pub budget: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClickRejected {
    pub campaign_id: u32,
    pub publisher: Address,
    pub fingerprint: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutSent {
    pub developer: Address,
    pub amount: u64,
    /// `true` when sent by `trigger_scheduled_payouts`.
    pub scheduled: bool,
}

pub fn emit_platform_ready(env: &Env, name: String, owner: Address, token: Address) {
    let topics = (symbol_short!("ready"),);
    env.events().publish(topics, PlatformReady { name, owner, token });
}

pub fn emit_hoster_registered(env: &Env, address: Address, created: bool) {
    let topics = (symbol_short!("hoster"), address.clone());
    env.events()
        .publish(topics, ProfileRegistered { address, created });
}

pub fn emit_developer_registered(env: &Env, address: Address, created: bool) {
    let topics = (symbol_short!("developer"), address.clone());
    env.events()
        .publish(topics, ProfileRegistered { address, created });
}

pub fn emit_campaign_created(env: &Env, campaign_id: u32, owner: Address, rate: u64, budget: u64) {
    let topics = (symbol_short!("created"), campaign_id);
    let data = CampaignCreated {
        campaign_id,
        owner,
        rate,
        budget,
    };
    env.events().publish(topics, data);
}

pub fn emit_status_changed(env: &Env, campaign_id: u32, status: CampaignStatus) {
    let topics = (symbol_short!("status"), campaign_id);
    env.events()
        .publish(topics, CampaignStatusChanged { campaign_id, status });
}

pub fn emit_publisher_rewarded(env: &Env, campaign_id: u32, publisher: Address, amount: u64) {
    let topics = (symbol_short!("reward"), campaign_id);
    let data = PublisherRewarded {
        campaign_id,
        publisher,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_halted(env: &Env, campaign_id: u32, spent: u64, budget: u64) {
    let topics = (symbol_short!("halted"), campaign_id);
    let data = CampaignHalted {
        campaign_id,
        spent,
        budget,
    };
    env.events().publish(topics, data);
}

pub fn emit_click_rejected(env: &Env, campaign_id: u32, publisher: Address, fingerprint: String) {
    let topics = (symbol_short!("fraud"), campaign_id);
    let data = ClickRejected {
        campaign_id,
        publisher,
        fingerprint,
    };
    env.events().publish(topics, data);
}

pub fn emit_payout_sent(env: &Env, developer: Address, amount: u64, scheduled: bool) {
    let topics = (symbol_short!("payout"), developer.clone());
    let data = PayoutSent {
        developer,
        amount,
        scheduled,
    };
    env.events().publish(topics, data);
}
