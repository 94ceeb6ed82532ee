#![no_std]

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_DAY: u64 = 86_400; // 24 * 60 * 60
pub const SECONDS_PER_WEEK: u64 = 604_800;

/// Upper bound for a single lock, 4 years of 365 days
pub const MAX_LOCK_DURATION: u64 = 4 * 365 * SECONDS_PER_DAY;

/// 1.0 in the 18 decimals fixed point used by every accumulator and weight
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%

/// Maximum slippage the recapitalization ledger accepts on a conversion (10%)
pub const MAX_SLIPPAGE_BPS: usize = 1_000;

/// Oracle submissions per round bounds
pub const SUBMISSION_LIST_MIN_LEN: usize = 1;
pub const SUBMISSION_LIST_MAX_LEN: usize = 50;

/// Unfinished oracle rounds older than this are discarded
pub const MAX_ROUND_DURATION_SECONDS: u64 = 1_800; // 30 minutes
pub const FIRST_SUBMISSION_TIMESTAMP_MAX_DIFF_SECONDS: u64 = 30;

/// Default staleness bound for oracle prices
pub const DEFAULT_MAX_PRICE_AGE_SECONDS: u64 = 15 * SECONDS_PER_MINUTE;
