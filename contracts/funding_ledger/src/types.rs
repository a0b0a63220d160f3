use soroban_sdk::contracttype;

/// Price record returned by the feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Asset price at the given point in time, at the feed's precision.
    pub price: i128,
    /// Recording timestamp.
    pub timestamp: u64,
}
