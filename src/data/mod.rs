// Remote lookups and the per-page lookup sets
pub mod lookups;
pub mod source;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use lookups::{
    BalanceLookups, BalanceSnapshot, ClaimLookups, ClaimSnapshot, SubmissionLookups,
    SubmissionsReport,
};
pub use source::{LookupError, LookupSet, MinerDataSource};
