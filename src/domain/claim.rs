use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::config::CLAIM;
use crate::domain::MinerRewards;

/// Withdrawal thresholds applied before a claim is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClaimPolicy {
    pub minimum_coal: Decimal,
    pub minimum_ore: Decimal,
}

impl Default for ClaimPolicy {
    fn default() -> Self {
        Self {
            minimum_coal: CLAIM.minimum_coal,
            minimum_ore: CLAIM.minimum_ore,
        }
    }
}

impl ClaimPolicy {
    /// Either token on its own is enough to claim.
    pub fn meets_minimum(&self, rewards: &MinerRewards) -> bool {
        rewards.coal >= self.minimum_coal || rewards.ore >= self.minimum_ore
    }
}

/// Error types for claim and unstake operations
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimError {
    WalletNotConnected,
    /// No rewards have been fetched yet, or they are below both minimums
    InsufficientRewards { minimum_coal: Decimal, minimum_ore: Decimal },
    AlreadyClaiming,
    Submission(String),
    InvalidUnstakeAmount(String),
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimError::WalletNotConnected => write!(f, "Please connect your wallet first"),
            ClaimError::InsufficientRewards {
                minimum_coal,
                minimum_ore,
            } => write!(
                f,
                "You need at least {} COAL or {} ORE to claim rewards",
                minimum_coal, minimum_ore
            ),
            ClaimError::AlreadyClaiming => write!(f, "A claim is already in progress"),
            ClaimError::Submission(msg) => write!(f, "Claim failed: {}", msg),
            ClaimError::InvalidUnstakeAmount(input) => {
                write!(f, "Invalid unstake amount: {}", input)
            }
        }
    }
}

impl std::error::Error for ClaimError {}

/// Parses a user-entered unstake amount; it must satisfy `0 < amount <= staked`.
pub fn validate_unstake_amount(input: &str, staked: Decimal) -> Result<Decimal, ClaimError> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| ClaimError::InvalidUnstakeAmount(input.to_string()))?;
    if amount <= Decimal::ZERO || amount > staked {
        return Err(ClaimError::InvalidUnstakeAmount(input.to_string()));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewards(coal: &str, ore: &str) -> MinerRewards {
        MinerRewards {
            coal: Decimal::from_str(coal).unwrap(),
            ore: Decimal::from_str(ore).unwrap(),
            chromium: Decimal::ZERO,
        }
    }

    #[test]
    fn either_token_meets_minimum() {
        let policy = ClaimPolicy {
            minimum_coal: Decimal::from(5),
            minimum_ore: Decimal::from_str("0.05").unwrap(),
        };

        assert!(policy.meets_minimum(&rewards("5", "0")));
        assert!(policy.meets_minimum(&rewards("0", "0.05")));
        assert!(!policy.meets_minimum(&rewards("4.999", "0.0499")));
    }

    #[test]
    fn unstake_amount_bounds() {
        let staked = Decimal::from(10);

        assert_eq!(validate_unstake_amount(" 2.5 ", staked), Ok(Decimal::from_str("2.5").unwrap()));
        assert_eq!(validate_unstake_amount("10", staked), Ok(Decimal::from(10)));
        assert!(validate_unstake_amount("0", staked).is_err());
        assert!(validate_unstake_amount("-1", staked).is_err());
        assert!(validate_unstake_amount("10.0001", staked).is_err());
        assert!(validate_unstake_amount("abc", staked).is_err());
        assert!(validate_unstake_amount("", staked).is_err());
    }
}
