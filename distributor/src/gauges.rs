multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{ERROR_INVALID_ADDRESS, ERROR_INVALID_DURATION, ERROR_NOT_BOUNTY_GAUGE};
use common_proxies::{proxy_bounty_market, proxy_reward_pool};
use common_structs::{BountySettings, GaugeKind, Role};

use super::{storage, utils};

/// The `GaugeModule` trait registers gauges and pushes their pending allocations.
///
/// **Scope**: Gauge registration, the per-variant push and bounty gauge administration.
///
/// **Goal**: Every push is its own transaction touching a single gauge, so one failing destination
/// only reverts its own push and keeps its allocation pending.
#[multiversx_sc::module]
pub trait GaugeModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_access::AccessModule
{
    /// Registers a new gauge. Its destination can never be changed afterwards.
    ///
    /// # Arguments
    /// - `kind`: The destination variant and its target.
    /// - `bounty_settings`: Initial settings of an external bounty gauge; defaults to one additional
    ///   period with no price cap. Rejected for other variants.
    ///
    /// # Returns
    /// - `u64`: The id of the new gauge.
    #[endpoint(addGauge)]
    fn add_gauge(
        &self,
        kind: GaugeKind<Self::Api>,
        bounty_settings: OptionalValue<BountySettings<Self::Api>>,
    ) -> u64 {
        self.require_role(Role::Admin);

        require!(!kind.target().is_zero(), ERROR_INVALID_ADDRESS);
        if let GaugeKind::StakePool {
            reward_duration, ..
        } = &kind
        {
            require!(*reward_duration > 0, ERROR_INVALID_DURATION);
        }

        let settings = bounty_settings.into_option();
        require!(kind.is_bounty() || settings.is_none(), ERROR_NOT_BOUNTY_GAUGE);

        self.gauges().push(&kind);
        let gauge_id = self.gauge_count();

        if kind.is_bounty() {
            let settings = settings.unwrap_or_else(|| BountySettings {
                additional_periods: 1,
                max_price_per_vote: BigUint::zero(),
            });
            self.bounty_settings(gauge_id).set(&settings);
            self.bounty_settings_event(gauge_id, &settings);
        }

        self.add_gauge_event(gauge_id, &kind);

        gauge_id
    }

    /// Pushes the pending allocation of one gauge to its destination. Open to anyone.
    ///
    /// **Process**:
    /// 1. Takes the pending allocation; a zero amount only logs a zero-distribution event.
    /// 2. `StakePool`: funds the pool for `reward_duration` (the distributor needs `Funder` there).
    /// 3. `ExternalBounty`: extends the bounty with the stored settings (the distributor must manage it).
    /// 4. `Transfer`: plain transfer to the receiver.
    ///
    /// # Returns
    /// - `BigUint`: The amount pushed.
    ///
    /// **Security Tip**: Any failure in the destination reverts this call only, leaving the allocation pending.
    #[endpoint(distribute)]
    fn distribute(&self, gauge_id: u64) -> BigUint {
        let kind = self.require_gauge(gauge_id);

        let amount = self.pending_allocation(gauge_id).take();
        if amount == 0 {
            self.zero_distribution_event(gauge_id);
            return amount;
        }

        self.total_pending().update(|pending| *pending -= &amount);
        let token = self.emission_token().get();

        match &kind {
            GaugeKind::StakePool {
                pool,
                reward_duration,
            } => {
                self.tx()
                    .to(pool)
                    .typed(proxy_reward_pool::RewardPoolProxy)
                    .fund(*reward_duration)
                    .egld_or_single_esdt(&token, 0, &amount)
                    .sync_call();
            },
            GaugeKind::ExternalBounty { market, bounty_id } => {
                let settings = self.bounty_settings(gauge_id).get();
                self.tx()
                    .to(market)
                    .typed(proxy_bounty_market::BountyMarketProxy)
                    .increase_bounty_duration(
                        *bounty_id,
                        settings.additional_periods,
                        settings.max_price_per_vote,
                    )
                    .egld_or_single_esdt(&token, 0, &amount)
                    .sync_call();
            },
            GaugeKind::Transfer { receiver } => {
                self.tx()
                    .to(receiver)
                    .egld_or_single_esdt(&token, 0, &amount)
                    .transfer();
            },
        }

        self.gauge_distribution_event(gauge_id, kind.target(), &amount);

        amount
    }

    #[endpoint(setBountySettings)]
    fn set_bounty_settings(&self, gauge_id: u64, additional_periods: u64, max_price_per_vote: BigUint) {
        self.require_role(Role::Admin);
        self.require_bounty_gauge(gauge_id);

        let settings = BountySettings {
            additional_periods,
            max_price_per_vote,
        };
        self.bounty_settings(gauge_id).set(&settings);

        self.bounty_settings_event(gauge_id, &settings);
    }

    /// Hands the management of a bounty gauge's external bounty to `new_manager`.
    #[endpoint(updateBountyManager)]
    fn update_bounty_manager(&self, gauge_id: u64, new_manager: ManagedAddress) {
        self.require_role(Role::Admin);
        require!(!new_manager.is_zero(), ERROR_INVALID_ADDRESS);

        let (market, bounty_id) = self.require_bounty_gauge(gauge_id);
        self.tx()
            .to(&market)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .update_manager(bounty_id, &new_manager)
            .sync_call();

        self.bounty_manager_update_event(gauge_id, bounty_id, &new_manager);
    }
}
