multiversx_sc::imports!();

use common_constants::BPS;
use common_errors::ERROR_SLIPPAGE_EXCEEDED;
use common_proxies::{proxy_converter, proxy_omnipool, proxy_price_aggregator};

use super::storage;

/// External value movement of the ledger: oracle valuation, conversions and strategy deposits.
#[multiversx_sc::module]
pub trait ConversionModule: storage::Storage + common_math::SharedMathModule {
    fn token_balance(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(token, 0)
    }

    /// Value of `amount_in` units of `token_in` expressed in `token_out`, as quoted by the oracle.
    fn valuate(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        if token_in == token_out {
            return amount_in.clone();
        }

        self.tx()
            .to(self.price_aggregator().get())
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .valuate(token_in, amount_in, token_out)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Converts `amount_in` of `token_in` into `token_out` through `converter`.
    ///
    /// The converter must return at least the oracle value reduced by the configured slippage.
    /// Same token conversions are a no-op.
    ///
    /// # Returns
    /// - `BigUint`: The amount of `token_out` received.
    fn convert(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        token_out: &EgldOrEsdtTokenIdentifier,
        converter: &ManagedAddress,
    ) -> BigUint {
        if token_in == token_out {
            return amount_in.clone();
        }

        let quote = self.valuate(token_in, amount_in, token_out);
        let tolerance = BPS as u64 - self.max_slippage_bps().get();
        let min_amount_out = self.bps_mul_floor(&quote, &BigUint::from(tolerance));

        let back_transfers = self
            .tx()
            .to(converter)
            .typed(proxy_converter::ConverterProxy)
            .convert(token_out, &min_amount_out)
            .egld_or_single_esdt(token_in, 0, amount_in)
            .returns(ReturnsBackTransfersReset)
            .sync_call();

        let mut received = BigUint::zero();
        for payment in back_transfers.payments.iter() {
            if payment.token_identifier == *token_out {
                received += &payment.amount;
            }
        }

        require!(received >= min_amount_out, ERROR_SLIPPAGE_EXCEEDED);

        received
    }

    fn pool_underlying(&self, target_pool: &ManagedAddress) -> EgldOrEsdtTokenIdentifier {
        self.tx()
            .to(target_pool)
            .typed(proxy_omnipool::OmnipoolProxy)
            .underlying()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn deposit_to_strategy(
        &self,
        target_pool: &ManagedAddress,
        strategy_slot: u32,
        token_slot: u32,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(target_pool)
            .typed(proxy_omnipool::OmnipoolProxy)
            .deposit_to_strategy(strategy_slot, token_slot)
            .egld_or_single_esdt(token, 0, amount)
            .sync_call();
    }
}
