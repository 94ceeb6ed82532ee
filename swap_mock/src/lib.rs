#![no_std]

use common_constants::WAD;
use common_errors::{ERROR_INVALID_ASSET, ERROR_SLIPPAGE_EXCEEDED, ERROR_ZERO_AMOUNT};

multiversx_sc::imports!();

/// Fixed-rate converter standing in for a DEX router in tests.
#[multiversx_sc::contract]
pub trait SwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Output side inventory, any token
    #[payable("*")]
    #[endpoint(provideLiquidity)]
    fn provide_liquidity(&self) {}

    /// Sets how many units of `token_out` one unit of `token_in` buys, WAD precision.
    #[only_owner]
    #[endpoint(setRate)]
    fn set_rate(
        &self,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: EgldOrEsdtTokenIdentifier,
        rate: BigUint,
    ) {
        self.rate(&token_in, &token_out).set(rate);
    }

    /// Converts the payment into `token_out` at the configured rate and sends it back to the caller.
    #[payable("*")]
    #[endpoint(convert)]
    fn convert(
        &self,
        token_out: EgldOrEsdtTokenIdentifier,
        min_amount_out: BigUint,
    ) -> EgldOrEsdtTokenPayment {
        let (token_in, amount_in) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount_in > 0, ERROR_ZERO_AMOUNT);

        let rate_mapper = self.rate(&token_in, &token_out);
        require!(!rate_mapper.is_empty(), ERROR_INVALID_ASSET);

        let amount_out = amount_in * rate_mapper.get() / BigUint::from(WAD);
        require!(amount_out >= min_amount_out, ERROR_SLIPPAGE_EXCEEDED);

        let payment = EgldOrEsdtTokenPayment::new(token_out, 0, amount_out);
        let caller = self.blockchain().get_caller();
        self.tx().to(&caller).payment(payment.clone()).transfer();

        payment
    }

    #[view(getRate)]
    #[storage_mapper("rate")]
    fn rate(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;
}
