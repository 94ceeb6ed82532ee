multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::storage;

use common_errors::{ERROR_DISTRIBUTION_NOT_STARTED, ERROR_NOT_BOUNTY_GAUGE, ERROR_UNKNOWN_GAUGE};
use common_structs::GaugeKind;

#[multiversx_sc::module]
pub trait UtilsModule: storage::Storage {
    fn epoch_start(&self, epoch: u64) -> u64 {
        self.start_timestamp().get() + epoch * self.epoch_length().get()
    }

    /// Epoch containing the current block. Fails before the first epoch starts.
    fn current_epoch(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let start = self.start_timestamp().get();
        require!(now >= start, ERROR_DISTRIBUTION_NOT_STARTED);

        (now - start) / self.epoch_length().get()
    }

    fn require_gauge(&self, gauge_id: u64) -> GaugeKind<Self::Api> {
        let gauges = self.gauges();
        require!(
            gauge_id >= 1 && gauge_id as usize <= gauges.len(),
            ERROR_UNKNOWN_GAUGE
        );

        gauges.get(gauge_id as usize)
    }

    /// Returns the market and bounty id of an external bounty gauge.
    fn require_bounty_gauge(&self, gauge_id: u64) -> (ManagedAddress, u64) {
        match self.require_gauge(gauge_id) {
            GaugeKind::ExternalBounty { market, bounty_id } => (market, bounty_id),
            _ => sc_panic!(ERROR_NOT_BOUNTY_GAUGE),
        }
    }

    fn gauge_count(&self) -> u64 {
        self.gauges().len() as u64
    }

    /// Emission balance not yet owed to any gauge.
    fn free_emission_balance(&self) -> BigUint {
        let balance = self
            .blockchain()
            .get_sc_balance(&self.emission_token().get(), 0);
        let pending = self.total_pending().get();

        if balance > pending {
            balance - pending
        } else {
            BigUint::zero()
        }
    }
}
