multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_ASSET, ERROR_ZERO_AMOUNT};
use common_proxies::proxy_reward_pool;
use common_structs::Role;

use super::storage;

#[multiversx_sc::module]
pub trait StakeModule:
    storage::Storage + common_events::EventsModule + common_access::AccessModule
{
    /// Stakes the paid stake token into the reward pool on behalf of the ledger.
    #[payable("*")]
    #[endpoint(depositStake)]
    fn deposit_stake(&self) {
        self.require_role(Role::Admin);

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.stake_token().get(), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        self.tx()
            .to(self.reward_pool().get())
            .typed(proxy_reward_pool::RewardPoolProxy)
            .deposit()
            .egld_or_single_esdt(&token, 0, &amount)
            .sync_call();
    }

    /// Claims the rewards earned by the ledger's own stake. They stay in the ledger until
    /// restored or distributed. Open to anyone.
    #[endpoint(harvest)]
    fn harvest(&self) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let rewards = self
            .tx()
            .to(self.reward_pool().get())
            .typed(proxy_reward_pool::RewardPoolProxy)
            .claim()
            .returns(ReturnsResult)
            .sync_call();

        self.harvest_event(&rewards);

        rewards
    }
}
