//! Funding ledger contract: accepts native-asset contributions that clear a
//! fiat-denominated minimum (checked against an external price feed at
//! admission time) and lets the configured owner sweep the held balance.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

mod events;
mod oracle;
mod price;
mod storage;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod test_events;

pub use oracle::{PriceFeed, PriceFeedClient};
pub use types::PriceData;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InsufficientContribution = 4,
    OracleUnavailable = 5,
    InvalidPrice = 6,
    TransferFailed = 7,
    IndexOutOfRange = 8,
}

#[contract]
pub struct FundingLedger;

#[contractimpl]
impl FundingLedger {
    /// Configure the ledger. Must be called exactly once after deployment;
    /// a second call panics with `Error::AlreadyInitialized`.
    ///
    /// - `owner` must authorize the call and becomes the only identity
    ///   allowed to withdraw.
    /// - `oracle` is the price feed contract consulted on every admission.
    /// - `token` is the native-asset token contract the ledger accepts and
    ///   holds; its decimal precision is read once here and cached.
    ///
    /// All three references are immutable afterwards. Which addresses to
    /// bind on which network is resolved by the deployer, not in here.
    pub fn init(env: Env, owner: Address, oracle: Address, token: Address) {
        owner.require_auth();

        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        let token_decimals = token::Client::new(&env, &token).decimals();
        storage::set_owner(&env, &owner);
        storage::set_oracle(&env, &oracle);
        storage::set_token(&env, &token, token_decimals);
    }

    /// Contribute `amount` of the native-asset token to the ledger.
    ///
    /// The amount is valued through the price feed's latest reading and
    /// admitted only if it is worth at least the fixed fiat minimum
    /// (`get_minimum_fiat_value`). A rejected contribution moves no tokens
    /// and touches no state.
    ///
    /// On admission the tokens are pulled from `contributor`, the recorded
    /// total for `contributor` grows by `amount`, and `contributor` is
    /// appended to the contribution history. Repeat contributors append a
    /// new entry each time, so the history length counts accepted calls,
    /// not unique identities.
    pub fn contribute(env: Env, contributor: Address, amount: i128) {
        contributor.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InsufficientContribution);
        }

        let (feed_price, feed_decimals) = oracle::latest_reading(&env, &storage::get_oracle(&env));
        let fiat_value =
            price::to_fiat_value(amount, storage::get_token_decimals(&env), feed_price, feed_decimals)
                .unwrap_or_else(|e| panic_with_error!(&env, e));

        if fiat_value < price::MINIMUM_FIAT_VALUE {
            panic_with_error!(&env, Error::InsufficientContribution);
        }

        // Pull the tokens, then record. The host applies the invocation
        // atomically, so a trap at any point unwinds both.
        let token_client = token::Client::new(&env, &storage::get_token(&env));
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        storage::add_to_contribution(&env, &contributor, amount);
        storage::append_contributor(&env, &contributor);

        events::emit_contribution_accepted(&env, contributor, amount, fiat_value);
    }

    /// Sweep the entire held balance to the owner and clear the ledger.
    ///
    /// Walks the contribution history by index, re-reading the stored list
    /// on every iteration. `cheaper_withdraw` is the twin that minimizes
    /// storage reads; observable behavior is identical.
    ///
    /// All bookkeeping (balance removal, history reset) completes before
    /// the outbound transfer is initiated, so a re-entrant call during the
    /// transfer observes an already-empty ledger.
    pub fn withdraw(env: Env, caller: Address) {
        let owner = require_owner(&env, &caller);

        let mut cleared: u32 = 0;
        while cleared < storage::contributor_count(&env) {
            let contributor = storage::contributor_at(&env, cleared)
                .unwrap_or_else(|| panic_with_error!(&env, Error::IndexOutOfRange));
            storage::remove_contribution(&env, &contributor);
            cleared += 1;
        }
        storage::clear_contributors(&env);

        sweep_to_owner(&env, &owner, cleared);
    }

    /// Same semantics as `withdraw`, but the contribution history is read
    /// from storage exactly once and iterated locally.
    pub fn cheaper_withdraw(env: Env, caller: Address) {
        let owner = require_owner(&env, &caller);

        let contributors = storage::load_contributors(&env);
        for contributor in contributors.iter() {
            storage::remove_contribution(&env, &contributor);
        }
        storage::clear_contributors(&env);

        sweep_to_owner(&env, &owner, contributors.len());
    }

    /// Cumulative admitted amount for `contributor`. 0 if the identity
    /// never contributed or a withdrawal has since cleared the ledger.
    pub fn get_balance_of(env: Env, contributor: Address) -> i128 {
        storage::get_contribution(&env, &contributor)
    }

    /// Identity recorded at `index` in the contribution history.
    pub fn get_contributor_at(env: Env, index: u32) -> Address {
        storage::contributor_at(&env, index)
            .unwrap_or_else(|| panic_with_error!(&env, Error::IndexOutOfRange))
    }

    /// Number of accepted contribution calls since the last withdrawal.
    pub fn get_contributor_count(env: Env) -> u32 {
        storage::contributor_count(&env)
    }

    pub fn get_owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Address of the configured price feed contract.
    pub fn get_oracle(env: Env) -> Address {
        storage::get_oracle(&env)
    }

    /// Schema version reported by the price feed, for compatibility
    /// diagnostics.
    pub fn get_oracle_version(env: Env) -> u32 {
        oracle::feed_version(&env, &storage::get_oracle(&env))
    }

    /// The admission threshold: 5.00 reference fiat units at 18-decimal
    /// fixed point.
    pub fn get_minimum_fiat_value(_env: Env) -> i128 {
        price::MINIMUM_FIAT_VALUE
    }
}

/// Authenticate `caller` and check it against the stored owner.
fn require_owner(env: &Env, caller: &Address) -> Address {
    caller.require_auth();
    let owner = storage::get_owner(env);
    if caller != &owner {
        panic_with_error!(env, Error::NotAuthorized);
    }
    owner
}

/// Transfer the full held token balance to the owner and emit the
/// withdrawal event. Called by both withdrawal variants after bookkeeping
/// has completed. A rejected transfer panics with `Error::TransferFailed`,
/// unwinding the whole invocation including the bookkeeping.
fn sweep_to_owner(env: &Env, owner: &Address, entries_cleared: u32) {
    let token_client = token::Client::new(env, &storage::get_token(env));
    let held = token_client.balance(&env.current_contract_address());
    if held > 0
        && token_client
            .try_transfer(&env.current_contract_address(), owner, &held)
            .is_err()
    {
        panic_with_error!(env, Error::TransferFailed);
    }

    events::emit_balance_withdrawn(env, owner.clone(), held, entries_cleared);
}
