multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::BPS;
use common_errors::{
    ERROR_DUPLICATE_GAUGE_VOTE, ERROR_EMPTY_VOTE, ERROR_NO_VOTING_POWER, ERROR_UNKNOWN_GAUGE,
    ERROR_VOTE_WEIGHT_EXCEEDED,
};
use common_proxies::proxy_reward_pool;
use common_structs::GaugeVote;

use super::{storage, utils};

#[multiversx_sc::module]
pub trait VoteModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Splits the caller's voting power across gauges for the current round.
    ///
    /// **Purpose**: Votes cast during epoch `N` form round `N` and set the gauge weights of epoch `N + 1`.
    ///
    /// **Process**:
    /// 1. Reads the caller's voting power from the vote source at the start of the current epoch.
    /// 2. Removes the caller's previous vote in this round, if any.
    /// 3. Assigns `power * bps / 10_000` to each listed gauge.
    ///
    /// # Arguments
    /// - `votes`: `(gauge_id, bps)` pairs; the bps sum must not exceed 10_000 and each gauge appears once.
    ///
    /// **Security Considerations**: Power is snapshotted at the epoch start, so locking after the round
    /// opened does not add power to it.
    #[endpoint(vote)]
    fn vote(&self, votes: MultiValueEncoded<MultiValue2<u64, u64>>) {
        let round = self.current_epoch();
        let caller = self.blockchain().get_caller();

        let power = self.snapshot_voting_power(&caller, self.epoch_start(round));
        require!(power > 0, ERROR_NO_VOTING_POWER);

        self.clear_vote(round, &caller);

        let gauge_count = self.gauge_count();
        let bps_total = BPS as u64;
        let mut used_bps = 0u64;
        let mut recorded = ManagedVec::<Self::Api, GaugeVote<Self::Api>>::new();
        let mut weight_sum = BigUint::zero();

        for vote in votes.into_iter() {
            let (gauge_id, bps) = vote.into_tuple();
            require!(gauge_id >= 1 && gauge_id <= gauge_count, ERROR_UNKNOWN_GAUGE);
            require!(bps <= bps_total - used_bps, ERROR_VOTE_WEIGHT_EXCEEDED);
            for previous in recorded.iter() {
                require!(previous.gauge_id != gauge_id, ERROR_DUPLICATE_GAUGE_VOTE);
            }
            used_bps += bps;

            let weight = self.bps_mul_floor(&power, &BigUint::from(bps));
            self.round_tally(round, gauge_id)
                .update(|tally| *tally += &weight);
            weight_sum += &weight;

            recorded.push(GaugeVote { gauge_id, weight });
        }
        require!(!recorded.is_empty(), ERROR_EMPTY_VOTE);

        self.round_total(round).update(|total| *total += &weight_sum);
        self.round_votes(round, &caller).set(&recorded);

        self.vote_event(round, &caller, &power, &recorded);
    }

    fn snapshot_voting_power(&self, voter: &ManagedAddress, timestamp: u64) -> BigUint {
        self.tx()
            .to(self.vote_source().get())
            .typed(proxy_reward_pool::RewardPoolProxy)
            .get_past_voting_power(voter, timestamp)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Takes back a previous vote of `voter` in `round` from the tallies.
    fn clear_vote(&self, round: u64, voter: &ManagedAddress) {
        let mapper = self.round_votes(round, voter);
        if mapper.is_empty() {
            return;
        }

        let mut removed = BigUint::zero();
        for vote in mapper.take().iter() {
            self.round_tally(round, vote.gauge_id)
                .update(|tally| *tally -= &vote.weight);
            removed += &vote.weight;
        }

        self.round_total(round).update(|total| *total -= &removed);
    }
}
