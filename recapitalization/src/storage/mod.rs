multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Principal token of the backstopped reward pool.
    #[view(getStakeToken)]
    #[storage_mapper("stake_token")]
    fn stake_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getRewardPool)]
    #[storage_mapper("reward_pool")]
    fn reward_pool(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceAggregator)]
    #[storage_mapper("price_aggregator")]
    fn price_aggregator(&self) -> SingleValueMapper<ManagedAddress>;

    /// Converter used by `recapitalizeByRewards` and `distributeRewards`.
    #[view(getDefaultConverter)]
    #[storage_mapper("default_converter")]
    fn default_converter(&self) -> SingleValueMapper<ManagedAddress>;

    /// Duration over which distributed rewards stream in the reward pool.
    #[view(getAccumulationPeriod)]
    #[storage_mapper("accumulation_period")]
    fn accumulation_period(&self) -> SingleValueMapper<u64>;

    #[view(getMaxSlippage)]
    #[storage_mapper("max_slippage_bps")]
    fn max_slippage_bps(&self) -> SingleValueMapper<u64>;

    /// Staked principal diverted to external pools and not yet restored.
    #[view(getRecapitalizedAmount)]
    #[storage_mapper("recapitalized_amount")]
    fn recapitalized_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastDistribution)]
    #[storage_mapper("last_distribution")]
    fn last_distribution(&self) -> SingleValueMapper<u64>;

    /// Reward tokens in registration order. Balances of other tokens are never touched.
    #[storage_mapper("reward_tokens")]
    fn reward_tokens(&self) -> SetMapper<EgldOrEsdtTokenIdentifier>;
}
