#![no_std]

use common_errors::{ERROR_UNAUTHORIZED, ERROR_ZERO_AMOUNT};

multiversx_sc::imports!();

/// Minimal vote bounty market: a bounty holds a reward and a remaining number of periods,
/// and only its manager may extend it.
#[multiversx_sc::contract]
pub trait BountyMarketMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(createBounty)]
    fn create_bounty(&self, bounty_id: u64, manager: ManagedAddress) {
        require!(self.bounty_manager(bounty_id).is_empty(), "Bounty already exists");
        self.bounty_manager(bounty_id).set(manager);
    }

    #[payable("*")]
    #[endpoint(increaseBountyDuration)]
    fn increase_bounty_duration(
        &self,
        bounty_id: u64,
        additional_periods: u64,
        _max_price_per_vote: BigUint,
    ) {
        require!(!self.frozen().get(), "Market is frozen");
        self.require_manager(bounty_id);

        let (_, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        self.bounty_reward(bounty_id).update(|reward| *reward += amount);
        self.bounty_periods(bounty_id)
            .update(|periods| *periods += additional_periods);
    }

    #[endpoint(updateManager)]
    fn update_manager(&self, bounty_id: u64, new_manager: ManagedAddress) {
        self.require_manager(bounty_id);
        self.bounty_manager(bounty_id).set(new_manager);
    }

    // Makes every extension fail, to exercise failing destinations
    #[only_owner]
    #[endpoint(setFrozen)]
    fn set_frozen(&self, frozen: bool) {
        self.frozen().set(frozen);
    }

    fn require_manager(&self, bounty_id: u64) {
        let caller = self.blockchain().get_caller();
        let manager = self.bounty_manager(bounty_id);
        require!(!manager.is_empty() && manager.get() == caller, ERROR_UNAUTHORIZED);
    }

    #[view(getBountyManager)]
    #[storage_mapper("bounty_manager")]
    fn bounty_manager(&self, bounty_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[view(getBountyReward)]
    #[storage_mapper("bounty_reward")]
    fn bounty_reward(&self, bounty_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getBountyPeriods)]
    #[storage_mapper("bounty_periods")]
    fn bounty_periods(&self, bounty_id: u64) -> SingleValueMapper<u64>;

    #[view(isFrozen)]
    #[storage_mapper("frozen")]
    fn frozen(&self) -> SingleValueMapper<bool>;
}
