#![no_std]

// Validation
pub static ERROR_ZERO_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

pub static ERROR_INVALID_DURATION: &[u8] = b"Reward duration must be greater than zero.";

pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address.";

pub static ERROR_INVALID_SLIPPAGE: &[u8] = b"Invalid slippage.";

pub static ERROR_SLIPPAGE_EXCEEDED: &[u8] = b"Slippage exceeded.";

// Reward pool
pub static ERROR_INSUFFICIENT_PRINCIPAL: &[u8] = b"Insufficient principal.";

pub static ERROR_STILL_LOCKED: &[u8] = b"Principal is still locked.";

pub static ERROR_REWARD_TOKEN_ALREADY_REGISTERED: &[u8] = b"Reward token already registered.";

pub static ERROR_UNKNOWN_REWARD_TOKEN: &[u8] = b"Reward token is not registered.";

pub static ERROR_LOCK_EXCEEDS_PRINCIPAL: &[u8] = b"Lock amount exceeds free principal.";

pub static ERROR_INVALID_UNLOCK_TIMESTAMP: &[u8] = b"Invalid unlock timestamp.";

pub static ERROR_LOCK_CANNOT_BE_SHORTENED: &[u8] = b"Lock cannot be shortened.";

pub static ERROR_NOTHING_LOCKED: &[u8] = b"Nothing locked.";

pub static ERROR_ACCOUNT_NOT_FOUND: &[u8] = b"Stake account not found.";

pub static ERROR_INVALID_MAX_LOCK_DURATION: &[u8] = b"Invalid max lock duration.";

// Authorization
pub static ERROR_UNAUTHORIZED: &[u8] = b"Unauthorized.";

// Distributor
pub static ERROR_EPOCH_ALREADY_FINALIZED: &[u8] = b"Epoch already finalized.";

pub static ERROR_PREVIOUS_EPOCH_NOT_FINALIZED: &[u8] = b"Previous epoch not finalized.";

pub static ERROR_EPOCH_NOT_ENDED: &[u8] = b"Epoch not ended.";

pub static ERROR_DISTRIBUTION_NOT_STARTED: &[u8] = b"Distribution not started.";

pub static ERROR_INVALID_EPOCH_LENGTH: &[u8] = b"Epoch length must be greater than zero.";

pub static ERROR_NO_GAUGES: &[u8] = b"No gauges registered.";

pub static ERROR_UNKNOWN_GAUGE: &[u8] = b"Gauge not found.";

pub static ERROR_NOT_BOUNTY_GAUGE: &[u8] = b"Gauge is not an external bounty gauge.";

pub static ERROR_INSUFFICIENT_EMISSION_BALANCE: &[u8] =
    b"Insufficient emission balance for this epoch.";

pub static ERROR_VOTE_WEIGHT_EXCEEDED: &[u8] = b"Vote weights exceed 100%.";

pub static ERROR_DUPLICATE_GAUGE_VOTE: &[u8] = b"Gauge voted more than once.";

pub static ERROR_NO_VOTING_POWER: &[u8] = b"No voting power.";

pub static ERROR_EMPTY_VOTE: &[u8] = b"Vote must target at least one gauge.";

// Recapitalization
pub static ERROR_INSUFFICIENT_REWARD_BALANCE: &[u8] = b"Insufficient reward balance.";

pub static ERROR_NOTHING_TO_RESTORE: &[u8] = b"Nothing to restore.";

pub static ERROR_NO_REWARDS_TO_RESTORE: &[u8] = b"No rewards available for restoration.";

pub static ERROR_REWARD_TOKEN_IS_STAKE_TOKEN: &[u8] =
    b"Stake token cannot be used as reward token.";

// Oracle
pub static ERROR_ONLY_ORACLES: &[u8] = b"Only oracles allowed.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Invalid oracle price.";

pub static ERROR_PRICE_FEED_STALE: &[u8] = b"Price feed is stale.";

pub static ERROR_TOKEN_NOT_PRICED: &[u8] = b"No price available for token.";

pub static ERROR_TOKEN_DECIMALS_NOT_SET: &[u8] = b"Token decimals not set.";

pub static ERROR_INVALID_SUBMISSION_COUNT: &[u8] = b"Invalid submission count.";

pub static ERROR_SUBMISSION_LIST_CAPACITY_EXCEEDED: &[u8] = b"Submission list capacity exceeded.";

pub static ERROR_TIMESTAMP_FROM_FUTURE: &[u8] = b"Timestamp is from the future.";

pub static ERROR_SUBMISSION_TOO_OLD: &[u8] = b"Submission is too old.";

pub static ERROR_INVALID_MAX_PRICE_AGE: &[u8] = b"Invalid max price age.";

pub static ERROR_MEDIAN_INVALID_INDEX: &[u8] = b"Invalid median index.";

pub static ERROR_PAUSED: &[u8] = b"Contract is paused";
