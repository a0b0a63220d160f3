// contracts/funding_ledger/src/oracle.rs
//
// Boundary to the external price feed. The feed is a separate contract;
// the ledger only ever reads from it.

use soroban_sdk::{contractclient, panic_with_error, Address, Env};

use crate::types::PriceData;
use crate::Error;

/// Interface of the price feed contract the ledger consults.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Latest reading, or `None` when the feed has nothing to report.
    fn lastprice(env: Env) -> Option<PriceData>;

    /// Decimal precision of `price` in `lastprice` readings.
    fn decimals(env: Env) -> u32;

    /// Feed schema version.
    fn version(env: Env) -> u32;
}

/// Latest price and its precision, read through the feed client.
///
/// A trapped cross-contract call and an empty reading both surface as
/// `Error::OracleUnavailable`. Validating the price value itself is the
/// converter's job.
pub fn latest_reading(env: &Env, feed: &Address) -> (i128, u32) {
    let client = PriceFeedClient::new(env, feed);

    let data = match client.try_lastprice() {
        Ok(Ok(Some(data))) => data,
        _ => panic_with_error!(env, Error::OracleUnavailable),
    };
    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => panic_with_error!(env, Error::OracleUnavailable),
    };

    (data.price, decimals)
}

/// Schema version reported by the feed.
pub fn feed_version(env: &Env, feed: &Address) -> u32 {
    match PriceFeedClient::new(env, feed).try_version() {
        Ok(Ok(version)) => version,
        _ => panic_with_error!(env, Error::OracleUnavailable),
    }
}
