multiversx_sc::imports!();

use crate::structs::{OracleStats, RoundPrice};

#[multiversx_sc::module]
pub trait StorageModule {
    /// Whitelisted oracles and their submission counters.
    #[storage_mapper("oracle_stats")]
    fn oracle_stats(&self) -> MapMapper<ManagedAddress, OracleStats>;

    /// Submissions of the round in progress, per oracle.
    #[storage_mapper("submissions")]
    fn submissions(&self, token: &EgldOrEsdtTokenIdentifier)
        -> MapMapper<ManagedAddress, BigUint>;

    /// Timestamp of the first accepted submission of the round in progress.
    #[storage_mapper("round_opened_at")]
    fn round_opened_at(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u64>;

    #[storage_mapper("rounds")]
    fn rounds(&self, token: &EgldOrEsdtTokenIdentifier) -> VecMapper<RoundPrice<Self::Api>>;

    #[view(getSubmissionCount)]
    #[storage_mapper("submission_count")]
    fn submission_count(&self) -> SingleValueMapper<usize>;

    #[view(getTokenDecimals)]
    #[storage_mapper("token_decimals")]
    fn token_decimals(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u8>;

    #[view(getMaxPriceAge)]
    #[storage_mapper("max_price_age")]
    fn max_price_age(&self) -> SingleValueMapper<u64>;
}
