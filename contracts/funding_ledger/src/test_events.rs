extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{BalanceWithdrawn, ContributionAccepted};
use crate::testutils::{MockPriceFeed, MockPriceFeedClient};
use crate::{FundingLedger, FundingLedgerClient};

const PRICE_2000_USD: i128 = 200_000_000_000;
const TENTH_COIN: i128 = 1_000_000;

fn setup() -> (Env, FundingLedgerClient<'static>, Address, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);
    let token_admin = token::StellarAssetClient::new(&env, &sac.address());

    let feed_id = env.register(MockPriceFeed, ());
    let feed = MockPriceFeedClient::new(&env, &feed_id);
    feed.init(&PRICE_2000_USD, &8u32, &4u32);

    let ledger_id = env.register(FundingLedger, ());
    let ledger = FundingLedgerClient::new(&env, &ledger_id);
    ledger.init(&owner, &feed_id, &sac.address());

    (env, ledger, owner, token_admin)
}

#[test]
fn test_contribution_accepted_event() {
    let (env, ledger, _owner, token_admin) = setup();
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &TENTH_COIN);

    ledger.contribute(&contributor, &TENTH_COIN);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("contrib"), contributor)
    assert_eq!(last_event.0, ledger.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        contributor.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ContributionAccepted struct. 0.1 coin at $2000 is $200 at
    // 18-decimal fixed point.
    let event_data: ContributionAccepted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionAccepted {
            contributor: contributor.clone(),
            amount: TENTH_COIN,
            fiat_value: 200_000_000_000_000_000_000,
        }
    );
}

#[test]
fn test_balance_withdrawn_event() {
    let (env, ledger, owner, token_admin) = setup();
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &(2 * TENTH_COIN));

    ledger.contribute(&contributor, &TENTH_COIN);
    ledger.contribute(&contributor, &TENTH_COIN);
    ledger.withdraw(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("withdrawn"), owner)
    assert_eq!(last_event.0, ledger.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        owner.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: BalanceWithdrawn struct with the full swept amount and the
    // two history entries the repeat contributor produced.
    let event_data: BalanceWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        BalanceWithdrawn {
            owner: owner.clone(),
            amount: 2 * TENTH_COIN,
            entries_cleared: 2,
        }
    );
}
