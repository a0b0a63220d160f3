//! Test doubles for the ledger's two external collaborators: the price
//! feed and the native-asset token. Compiled for tests and for downstream
//! crates that enable the `testutils` feature.

pub use feed::{MockPriceFeed, MockPriceFeedClient};
pub use freezable_token::{FreezableToken, FreezableTokenClient};

// Each mock contract lives in its own module so the per-method items that
// `#[contractimpl]` emits at module scope (`__init`, `__decimals`, and the
// matching spec entries) don't collide between contracts that share method
// names.
mod feed {
use soroban_sdk::{contract, contractimpl, contracttype, Env};

use crate::types::PriceData;

#[derive(Clone)]
#[contracttype]
pub enum MockFeedKey {
    Price,
    Decimals,
    Version,
}

/// Substitutable price feed returning a fixed reading.
///
/// The reading is installed at `init` and adjustable per test. `price` is
/// stored as-is, so tests can install invalid readings (zero, negative)
/// to drive the rejection paths.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn init(env: Env, price: i128, decimals: u32, version: u32) {
        env.storage().instance().set(&MockFeedKey::Price, &price);
        env.storage().instance().set(&MockFeedKey::Decimals, &decimals);
        env.storage().instance().set(&MockFeedKey::Version, &version);
    }

    pub fn set_price(env: Env, price: i128) {
        env.storage().instance().set(&MockFeedKey::Price, &price);
    }

    /// Drop the reading entirely; `lastprice` returns `None` afterwards.
    pub fn clear_price(env: Env) {
        env.storage().instance().remove(&MockFeedKey::Price);
    }

    pub fn lastprice(env: Env) -> Option<PriceData> {
        let price: i128 = env.storage().instance().get(&MockFeedKey::Price)?;
        Some(PriceData {
            price,
            timestamp: env.ledger().timestamp(),
        })
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&MockFeedKey::Decimals).unwrap_or(8)
    }

    pub fn version(env: Env) -> u32 {
        env.storage().instance().get(&MockFeedKey::Version).unwrap_or(1)
    }
}
}

mod freezable_token {
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum MockTokenKey {
    Decimals,
    Frozen,
    Balance(Address),
}

/// Minimal token whose transfers can be frozen mid-test, for exercising
/// the withdrawal rollback path. Implements just the token entry points
/// the ledger calls (`decimals`, `balance`, `transfer`) plus `mint`.
#[contract]
pub struct FreezableToken;

#[contractimpl]
impl FreezableToken {
    pub fn init(env: Env, decimals: u32) {
        env.storage().instance().set(&MockTokenKey::Decimals, &decimals);
    }

    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().instance().set(&MockTokenKey::Frozen, &frozen);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&MockTokenKey::Decimals).unwrap_or(7)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockTokenKey::Balance(id))
            .unwrap_or(0i128)
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&MockTokenKey::Balance(to), &(balance + amount));
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        let frozen: bool = env
            .storage()
            .instance()
            .get(&MockTokenKey::Frozen)
            .unwrap_or(false);
        if frozen {
            panic!("transfers are frozen");
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        let to_balance = Self::balance(env.clone(), to.clone());

        env.storage()
            .instance()
            .set(&MockTokenKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&MockTokenKey::Balance(to), &(to_balance + amount));
    }
}
}
