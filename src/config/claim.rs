//! Claim thresholds
//!
//! The pool refuses withdrawals below these amounts. Values are in whole tokens.

use rust_decimal::Decimal;

pub struct ClaimConfig {
    pub minimum_coal: Decimal,
    pub minimum_ore: Decimal,
}

// Decimal::from_parts(lo, mid, hi, negative, scale)
pub const CLAIM: ClaimConfig = ClaimConfig {
    minimum_coal: Decimal::from_parts(5, 0, 0, false, 0),
    minimum_ore: Decimal::from_parts(5, 0, 0, false, 2),
};
