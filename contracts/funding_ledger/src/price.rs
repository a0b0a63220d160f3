// contracts/funding_ledger/src/price.rs
//
// Fiat valuation of native amounts. Pure integer fixed-point arithmetic;
// no floating point anywhere, since the admission comparison downstream
// needs deterministic results.

use crate::Error;

/// Fixed-point precision of fiat values.
pub const FIAT_DECIMALS: u32 = 18;

/// Admission threshold: 5.00 reference fiat units at `FIAT_DECIMALS`.
pub const MINIMUM_FIAT_VALUE: i128 = 5_000_000_000_000_000_000;

/// Value `amount` in the reference fiat unit at `FIAT_DECIMALS` precision.
///
/// `amount` is denominated at `amount_decimals`, `price` at
/// `price_decimals`. The product is rescaled to 18 decimals: scaled up
/// when the combined precision falls short, truncating-divided when it
/// exceeds. Intermediates fit `i128` for realistic magnitudes (amounts up
/// to 18-decimal scale, prices up to 8-decimal scale); the workspace
/// builds with overflow checks, so a pathological product traps instead
/// of wrapping.
///
/// `amount == 0` values to 0, which can never clear the minimum. A
/// non-positive price is a feed malfunction and comes back as
/// `Error::InvalidPrice`.
pub fn to_fiat_value(
    amount: i128,
    amount_decimals: u32,
    price: i128,
    price_decimals: u32,
) -> Result<i128, Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let product = amount * price;
    let combined = amount_decimals + price_decimals;
    let value = if combined <= FIAT_DECIMALS {
        product * 10i128.pow(FIAT_DECIMALS - combined)
    } else {
        product / 10i128.pow(combined - FIAT_DECIMALS)
    };

    Ok(value)
}
