multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{BountySettings, GaugeKind, GaugeVote};

/// The Storage trait holds the on-chain state of the emission distributor.
#[multiversx_sc::module]
pub trait Storage {
    /// Token emitted to gauges every epoch.
    #[view(getEmissionToken)]
    #[storage_mapper("emission_token")]
    fn emission_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Fixed amount allocated across gauges by every finalized epoch.
    #[view(getEpochEmission)]
    #[storage_mapper("epoch_emission")]
    fn epoch_emission(&self) -> SingleValueMapper<BigUint>;

    #[view(getEpochLength)]
    #[storage_mapper("epoch_length")]
    fn epoch_length(&self) -> SingleValueMapper<u64>;

    /// Start of epoch 0.
    #[view(getStartTimestamp)]
    #[storage_mapper("start_timestamp")]
    fn start_timestamp(&self) -> SingleValueMapper<u64>;

    /// Reward pool queried for historical voting power.
    #[view(getVoteSource)]
    #[storage_mapper("vote_source")]
    fn vote_source(&self) -> SingleValueMapper<ManagedAddress>;

    /// Lowest epoch not yet finalized. Epochs are finalized strictly in order.
    #[view(getNextEpoch)]
    #[storage_mapper("next_epoch")]
    fn next_epoch(&self) -> SingleValueMapper<u64>;

    /// Sum of every gauge's pending allocation. This part of the emission balance is owed to gauges.
    #[view(getTotalPending)]
    #[storage_mapper("total_pending")]
    fn total_pending(&self) -> SingleValueMapper<BigUint>;

    /// Registered gauges; the gauge id is the 1-based index.
    #[storage_mapper("gauges")]
    fn gauges(&self) -> VecMapper<GaugeKind<Self::Api>>;

    /// Normalized weight of a gauge from the last finalized epoch, WAD precision.
    #[storage_mapper("gauge_weight")]
    fn gauge_weight(&self, gauge_id: u64) -> SingleValueMapper<BigUint>;

    /// Allocated but not yet pushed emission.
    #[storage_mapper("pending_allocation")]
    fn pending_allocation(&self, gauge_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("last_allocation")]
    fn last_allocation(&self, gauge_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("bounty_settings")]
    fn bounty_settings(&self, gauge_id: u64) -> SingleValueMapper<BountySettings<Self::Api>>;

    /// Vote of a voter in a round, as voting power assigned per gauge.
    #[storage_mapper("round_votes")]
    fn round_votes(
        &self,
        round: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<ManagedVec<GaugeVote<Self::Api>>>;

    #[storage_mapper("round_tally")]
    fn round_tally(&self, round: u64, gauge_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("round_total")]
    fn round_total(&self, round: u64) -> SingleValueMapper<BigUint>;
}
