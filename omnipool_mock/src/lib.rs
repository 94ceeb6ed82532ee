#![no_std]

use common_errors::{ERROR_INVALID_ASSET, ERROR_ZERO_AMOUNT};

multiversx_sc::imports!();

/// Liquidity pool with strategy slots; only tracks what was deposited into each slot.
#[multiversx_sc::contract]
pub trait OmnipoolMock {
    #[init]
    fn init(&self, underlying: EgldOrEsdtTokenIdentifier) {
        self.underlying().set(underlying);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(depositToStrategy)]
    fn deposit_to_strategy(&self, strategy_slot: u32, token_slot: u32) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.underlying().get(), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        self.strategy_balance(strategy_slot, token_slot)
            .update(|balance| *balance += amount);
    }

    #[view(getUnderlying)]
    #[storage_mapper("underlying")]
    fn underlying(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getStrategyBalance)]
    #[storage_mapper("strategy_balance")]
    fn strategy_balance(&self, strategy_slot: u32, token_slot: u32) -> SingleValueMapper<BigUint>;
}
