extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    CampaignCreated, CampaignHalted, CampaignStatusChanged, ClickRejected, PayoutSent,
    ProfileRegistered, PublisherRewarded,
};
use crate::{AdLedger, AdLedgerClient, CampaignParams, CampaignStatus, PricingModel};

fn setup() -> (Env, AdLedgerClient<'static>, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(AdLedger, ());
    let client = AdLedgerClient::new(&env, &contract_id);

    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);
    let minter = token::StellarAssetClient::new(&env, &sac.address());

    let owner = Address::generate(&env);
    client.init(&owner, &String::from_str(&env, "DeAds"), &sac.address());
    (env, client, minter)
}

fn register(env: &Env, client: &AdLedgerClient<'static>) -> (Address, Address) {
    let hoster = Address::generate(env);
    let developer = Address::generate(env);
    let name = String::from_str(env, "name");
    let category = String::from_str(env, "games");
    client.register_hoster(&hoster, &name, &name, &category);
    client.register_developer(&developer, &name, &name, &category);
    (hoster, developer)
}

fn open_cpc(
    env: &Env,
    client: &AdLedgerClient<'static>,
    minter: &token::StellarAssetClient<'static>,
    hoster: &Address,
    rate: u64,
    budget: u64,
) -> u32 {
    minter.mint(hoster, &i128::from(budget));
    let params = CampaignParams {
        title: String::from_str(env, "Launch"),
        description: String::from_str(env, ""),
        category: String::from_str(env, "games"),
        target_url: String::from_str(env, "https://acme.example"),
        creative_uri: String::from_str(env, ""),
        pricing_model: PricingModel::Cpc,
        rate,
        budget,
    };
    client.create_campaign(hoster, &params, &budget)
}

#[test]
fn test_developer_registered_event() {
    let (env, client, _) = setup();
    let developer = Address::generate(&env);
    let name = String::from_str(&env, "Dev");
    client.register_developer(&developer, &name, &name, &name);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("developer").into_val(&env),
        developer.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let data: ProfileRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, ProfileRegistered { address: developer.clone(), created: true });

    client.register_developer(&developer, &name, &name, &name);
    let last_event = env.events().all().last().expect("No events found");
    let data: ProfileRegistered = last_event.2.try_into_val(&env).unwrap();
    assert!(!data.created);
}

#[test]
fn test_campaign_created_event() {
    let (env, client, minter) = setup();
    let (hoster, _) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 500);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("created").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, CampaignCreated {
        campaign_id: id,
        owner: hoster,
        rate: 10,
        budget: 500,
    });
}

#[test]
fn test_status_changed_event() {
    let (env, client, minter) = setup();
    let (hoster, _) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 500);
    client.update_campaign_status(&hoster, &id, &CampaignStatus::Paused);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("status").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let data: CampaignStatusChanged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, CampaignStatusChanged { campaign_id: id, status: CampaignStatus::Paused });
}

#[test]
fn test_publisher_rewarded_event() {
    let (env, client, minter) = setup();
    let (hoster, developer) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 500);
    client.record_click(&id, &developer, &String::from_str(&env, "fp"));

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("reward").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let data: PublisherRewarded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, PublisherRewarded { campaign_id: id, publisher: developer, amount: 10 });
}

#[test]
fn test_click_rejected_event() {
    let (env, client, minter) = setup();
    let (hoster, developer) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 500);
    let fingerprint = String::from_str(&env, "fp");
    client.record_click(&id, &developer, &fingerprint);
    client.record_click(&id, &developer, &fingerprint);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("fraud").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let data: ClickRejected = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, ClickRejected { campaign_id: id, publisher: developer, fingerprint });
}

#[test]
fn test_campaign_halted_event() {
    let (env, client, minter) = setup();
    let (hoster, developer) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 15);
    client.record_click(&id, &developer, &String::from_str(&env, "a"));
    client.record_click(&id, &developer, &String::from_str(&env, "b"));

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("halted").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let data: CampaignHalted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, CampaignHalted { campaign_id: id, spent: 10, budget: 15 });
}

#[test]
fn test_payout_sent_event() {
    let (env, client, minter) = setup();
    let (hoster, developer) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 500);
    client.record_click(&id, &developer, &String::from_str(&env, "fp"));
    client.claim_developer_earnings(&developer);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("payout").into_val(&env),
        developer.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let data: PayoutSent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, PayoutSent { developer: developer.clone(), amount: 10, scheduled: false });
}

#[test]
fn test_scheduled_payout_event() {
    let (env, client, minter) = setup();
    let (hoster, developer) = register(&env, &client);
    let id = open_cpc(&env, &client, &minter, &hoster, 10, 500);
    client.record_click(&id, &developer, &String::from_str(&env, "fp"));
    env.ledger().set_timestamp(crate::PAYOUT_INTERVAL_SECS);
    client.trigger_scheduled_payouts(&None);

    let last_event = env.events().all().last().expect("No events found");
    let data: PayoutSent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, PayoutSent { developer, amount: 10, scheduled: true });
}
