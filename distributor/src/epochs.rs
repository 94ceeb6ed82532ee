multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD;
use common_errors::{
    ERROR_EPOCH_ALREADY_FINALIZED, ERROR_EPOCH_NOT_ENDED, ERROR_INSUFFICIENT_EMISSION_BALANCE,
    ERROR_INVALID_ASSET, ERROR_NO_GAUGES, ERROR_PREVIOUS_EPOCH_NOT_FINALIZED, ERROR_ZERO_AMOUNT,
};

use super::{storage, utils};

/// The `EpochModule` trait turns one epoch of emission into per-gauge pending allocations.
///
/// **Scope**: Funding of the emission balance and in-order epoch finalization.
///
/// **Goal**: Allocate exactly `epoch_emission` per finalized epoch, never more than the contract holds,
/// and keep normalized weights summing to exactly `WAD`.
#[multiversx_sc::module]
pub trait EpochModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
{
    /// Adds emission tokens to the distributor balance. Open to anyone.
    #[payable("*")]
    #[endpoint(depositEmission)]
    fn deposit_emission(&self) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(token == self.emission_token().get(), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_ZERO_AMOUNT);
    }

    /// Finalizes an elapsed epoch, crediting each gauge with its share of the epoch emission.
    ///
    /// **Process**:
    /// 1. Requires `epoch` to be the next unfinalized epoch and to have ended.
    /// 2. Resolves the gauge weights: vote tallies of round `epoch - 1`, else the last finalized
    ///    weights, else equal weights.
    /// 3. Splits `epoch_emission` proportionally, the integer remainder going to the lowest-id gauge
    ///    with a non-zero weight.
    /// 4. Stores normalized weights and adds each share to the gauge's pending allocation.
    ///
    /// # Arguments
    /// - `epoch`: The epoch to finalize.
    ///
    /// **Security Tip**: Nothing is transferred here. Pending allocations are pushed per gauge with
    /// `distribute`, so a failing destination cannot block the other gauges.
    #[endpoint(finalizeEpoch)]
    fn finalize_epoch(&self, epoch: u64) {
        let next_epoch = self.next_epoch().get();
        require!(epoch >= next_epoch, ERROR_EPOCH_ALREADY_FINALIZED);
        require!(epoch == next_epoch, ERROR_PREVIOUS_EPOCH_NOT_FINALIZED);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= self.epoch_start(epoch) + self.epoch_length().get(),
            ERROR_EPOCH_NOT_ENDED
        );

        let gauge_count = self.gauge_count();
        require!(gauge_count > 0, ERROR_NO_GAUGES);

        let emission = self.epoch_emission().get();
        require!(
            self.free_emission_balance() >= emission,
            ERROR_INSUFFICIENT_EMISSION_BALANCE
        );

        let (weights, total_votes, reused) = self.resolve_epoch_weights(epoch, gauge_count);
        let allocations = self.split_proportionally(&weights, &emission);
        let normalized = self.split_proportionally(&weights, &BigUint::from(WAD));

        for (index, amount) in allocations.iter().enumerate() {
            let gauge_id = index as u64 + 1;
            let amount: &BigUint = &amount;
            let weight = normalized.get(index).clone_value();

            self.gauge_weight(gauge_id).set(&weight);
            self.last_allocation(gauge_id).set(amount);
            self.pending_allocation(gauge_id)
                .update(|pending| *pending += amount);

            self.gauge_allocation_event(epoch, gauge_id, &weight, amount);
        }

        self.total_pending().update(|pending| *pending += &emission);
        self.next_epoch().set(epoch + 1);

        self.epoch_finalized_event(epoch, &emission, &total_votes, reused);
    }

    /// Raw weights applied to `epoch`, one per gauge in id order.
    ///
    /// # Returns
    /// - The weights, the vote total they came from and whether the previous weights were reused.
    fn resolve_epoch_weights(
        &self,
        epoch: u64,
        gauge_count: u64,
    ) -> (ManagedVec<BigUint>, BigUint, bool) {
        let total_votes = if epoch > 0 {
            self.round_total(epoch - 1).get()
        } else {
            BigUint::zero()
        };

        let mut weights = ManagedVec::new();
        if total_votes > 0 {
            for gauge_id in 1..=gauge_count {
                weights.push(self.round_tally(epoch - 1, gauge_id).get());
            }
            return (weights, total_votes, false);
        }

        let mut stored_sum = BigUint::zero();
        for gauge_id in 1..=gauge_count {
            let weight = self.gauge_weight(gauge_id).get();
            stored_sum += &weight;
            weights.push(weight);
        }
        if stored_sum > 0 {
            return (weights, total_votes, true);
        }

        let mut equal = ManagedVec::new();
        for _ in 0..gauge_count {
            equal.push(BigUint::from(1u32));
        }
        (equal, total_votes, false)
    }
}
