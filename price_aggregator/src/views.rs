multiversx_sc::imports!();

use common_errors::{
    ERROR_INVALID_PRICE, ERROR_ONLY_ORACLES, ERROR_PAUSED, ERROR_PRICE_FEED_STALE,
    ERROR_TOKEN_NOT_PRICED,
};
use common_structs::PriceFeed;

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    /// Returns the latest aggregated round of `token`.
    /// Fails when the oracle is paused or no round exists yet; freshness is not checked.
    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, token: EgldOrEsdtTokenIdentifier) -> PriceFeed<Self::Api> {
        require!(self.not_paused(), ERROR_PAUSED);

        let rounds = self.rounds(&token);
        require!(!rounds.is_empty(), ERROR_TOKEN_NOT_PRICED);

        let round_id = rounds.len();
        let last_price = rounds.get(round_id);

        PriceFeed {
            round_id: round_id as u32,
            decimals: self.token_decimals(&token).get(),
            token,
            price: last_price.price,
            timestamp: last_price.timestamp,
        }
    }

    /// USD price of one whole `token` (WAD). Stale or zero prices are rejected.
    #[view(getUsdPrice)]
    fn get_usd_price(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.fresh_price_feed(token).price
    }

    /// Values `amount_in` units of `token_in` in units of `token_out` through their USD prices.
    ///
    /// `value = amount_in * price_in * 10^decimals_out / (price_out * 10^decimals_in)`, rounded down.
    #[view(valuate)]
    fn valuate(
        &self,
        token_in: EgldOrEsdtTokenIdentifier,
        amount_in: BigUint,
        token_out: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        if token_in == token_out || amount_in == 0 {
            return amount_in;
        }

        let feed_in = self.fresh_price_feed(token_in);
        let feed_out = self.fresh_price_feed(token_out);

        let numerator = amount_in * &feed_in.price * BigUint::from(10u64).pow(feed_out.decimals as u32);
        let denominator = feed_out.price * BigUint::from(10u64).pow(feed_in.decimals as u32);

        numerator / denominator
    }

    #[view(getOracles)]
    fn get_oracles(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for key in self.oracle_stats().keys() {
            result.push(key);
        }
        result
    }

    /// `(submitted, accepted, last_submission)` of a whitelisted oracle.
    #[view(getOracleStats)]
    fn get_oracle_stats(&self, oracle: ManagedAddress) -> MultiValue3<u64, u64, u64> {
        let stats = self
            .oracle_stats()
            .get(&oracle)
            .unwrap_or_else(|| sc_panic!(ERROR_ONLY_ORACLES));

        (stats.submitted, stats.accepted, stats.last_submission).into()
    }

    fn fresh_price_feed(&self, token: EgldOrEsdtTokenIdentifier) -> PriceFeed<Self::Api> {
        let feed = self.latest_price_feed(token);
        require!(feed.price > 0, ERROR_INVALID_PRICE);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now.saturating_sub(feed.timestamp) <= self.max_price_age().get(),
            ERROR_PRICE_FEED_STALE
        );

        feed
    }
}
