multiversx_sc::imports!();

use common_structs::{BountySettings, GaugeView, GaugeVote};

use super::{storage, utils};

#[multiversx_sc::module]
pub trait ViewModule: storage::Storage + utils::UtilsModule {
    #[view(getCurrentEpoch)]
    fn get_current_epoch(&self) -> u64 {
        self.current_epoch()
    }

    #[view(getEpochStart)]
    fn get_epoch_start(&self, epoch: u64) -> u64 {
        self.epoch_start(epoch)
    }

    #[view(getGaugeCount)]
    fn get_gauge_count(&self) -> usize {
        self.gauges().len()
    }

    #[view(getGauge)]
    fn get_gauge(&self, gauge_id: u64) -> GaugeView<Self::Api> {
        let kind = self.require_gauge(gauge_id);

        GaugeView {
            id: gauge_id,
            kind,
            weight: self.gauge_weight(gauge_id).get(),
            pending: self.pending_allocation(gauge_id).get(),
            last_allocation: self.last_allocation(gauge_id).get(),
        }
    }

    /// Every registered gauge in id order.
    #[view(getGauges)]
    fn get_gauges(&self) -> MultiValueEncoded<GaugeView<Self::Api>> {
        let mut views = MultiValueEncoded::new();
        for gauge_id in 1..=self.gauge_count() {
            views.push(self.get_gauge(gauge_id));
        }
        views
    }

    /// Normalized weight of the last finalized epoch, WAD precision.
    #[view(getGaugeWeight)]
    fn get_gauge_weight(&self, gauge_id: u64) -> BigUint {
        self.require_gauge(gauge_id);
        self.gauge_weight(gauge_id).get()
    }

    #[view(getPendingAllocation)]
    fn get_pending_allocation(&self, gauge_id: u64) -> BigUint {
        self.require_gauge(gauge_id);
        self.pending_allocation(gauge_id).get()
    }

    #[view(getLastAllocation)]
    fn get_last_allocation(&self, gauge_id: u64) -> BigUint {
        self.require_gauge(gauge_id);
        self.last_allocation(gauge_id).get()
    }

    #[view(getBountySettings)]
    fn get_bounty_settings(&self, gauge_id: u64) -> BountySettings<Self::Api> {
        self.require_bounty_gauge(gauge_id);
        self.bounty_settings(gauge_id).get()
    }

    #[view(getRoundTally)]
    fn get_round_tally(&self, round: u64, gauge_id: u64) -> BigUint {
        self.round_tally(round, gauge_id).get()
    }

    #[view(getRoundTotal)]
    fn get_round_total(&self, round: u64) -> BigUint {
        self.round_total(round).get()
    }

    #[view(getVoterVotes)]
    fn get_voter_votes(&self, round: u64, voter: ManagedAddress) -> ManagedVec<GaugeVote<Self::Api>> {
        let mapper = self.round_votes(round, &voter);
        if mapper.is_empty() {
            ManagedVec::new()
        } else {
            mapper.get()
        }
    }
}
