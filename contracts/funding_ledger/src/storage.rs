// contracts/funding_ledger/src/storage.rs
//
// Storage helpers for FundingLedger. Entry points never touch
// `env.storage()` directly; everything goes through here.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::Error;

/// Storage keys for the ledger.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Identity allowed to sweep the held balance. Written once at init.
    Owner,
    /// Price feed contract address. Written once at init.
    Oracle,
    /// Native-asset token contract the ledger holds. Written once at init.
    Token,
    /// Decimal precision of the token, cached at init.
    TokenDecimals,
    /// Cumulative admitted amount per contributor.
    Contribution(Address),
    /// Ordered history of accepted contribution calls (repeats allowed).
    Contributors,
}

// ─────────────────────────────────────────────────────────
// Configuration (written once by init)
// ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

/// Load the owner. Panics with `Error::NotInitialized` before init.
pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_oracle(env: &Env, oracle: &Address) {
    env.storage().persistent().set(&DataKey::Oracle, oracle);
}

pub fn get_oracle(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Oracle)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_token(env: &Env, token: &Address, decimals: u32) {
    env.storage().persistent().set(&DataKey::Token, token);
    env.storage().persistent().set(&DataKey::TokenDecimals, &decimals);
}

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_token_decimals(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TokenDecimals)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ─────────────────────────────────────────────────────────
// Contribution balances
// ─────────────────────────────────────────────────────────

/// Read the cumulative admitted amount for `contributor`.
/// Returns 0 if the identity has no live entry.
pub fn get_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0i128)
}

/// Add `amount` to the existing total for `contributor`, creating the
/// entry at zero if absent. Returns the new total.
pub fn add_to_contribution(env: &Env, contributor: &Address, amount: i128) -> i128 {
    let new_total = get_contribution(env, contributor) + amount;
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(contributor.clone()), &new_total);
    new_total
}

/// Drop the balance entry for `contributor`. Reads of the absent key
/// come back as 0, which is the post-withdrawal state callers observe.
pub fn remove_contribution(env: &Env, contributor: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Contribution(contributor.clone()));
}

// ─────────────────────────────────────────────────────────
// Contribution history
// ─────────────────────────────────────────────────────────

/// Load the full contribution history. Empty before the first admission
/// and after every withdrawal.
pub fn load_contributors(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Contributors)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn contributor_count(env: &Env) -> u32 {
    load_contributors(env).len()
}

pub fn contributor_at(env: &Env, index: u32) -> Option<Address> {
    load_contributors(env).get(index)
}

/// Append `contributor` to the history. Every accepted contribution call
/// appends, including repeats from the same identity.
pub fn append_contributor(env: &Env, contributor: &Address) {
    let mut contributors = load_contributors(env);
    contributors.push_back(contributor.clone());
    env.storage()
        .persistent()
        .set(&DataKey::Contributors, &contributors);
}

pub fn clear_contributors(env: &Env) {
    env.storage().persistent().remove(&DataKey::Contributors);
}
