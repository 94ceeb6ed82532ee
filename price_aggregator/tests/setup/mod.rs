use crate::constants::*;

use common_proxies::proxy_price_aggregator;
use common_structs::PriceFeed;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, MultiValueEncoded,
    ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(PRICE_AGGREGATOR_PATH, price_aggregator::ContractBuilder);

    blockchain
}

pub fn token_id(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn error_message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub struct PriceAggregatorTestState {
    pub world: ScenarioWorld,
    pub price_aggregator_sc: ManagedAddress<StaticApi>,
    pub timestamp: u64,
}

impl PriceAggregatorTestState {
    /// Deploys the oracle with three oracles and a submission count of two, registers the decimals
    /// of `STAKE_TOKEN` and `USDC_TOKEN`, then unpauses it.
    pub fn new() -> Self {
        let mut world = world();
        world.account(OWNER_ADDRESS).nonce(1);
        for oracle in [ORACLE_ADDRESS_1, ORACLE_ADDRESS_2, ORACLE_ADDRESS_3, ALICE_ADDRESS] {
            world.account(oracle).nonce(1);
        }
        world.current_block().block_timestamp(START_TIMESTAMP);

        let mut oracles = MultiValueEncoded::new();
        for oracle in [ORACLE_ADDRESS_1, ORACLE_ADDRESS_2, ORACLE_ADDRESS_3] {
            oracles.push(oracle.to_managed_address());
        }

        let price_aggregator_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .init(SUBMISSION_COUNT, oracles)
            .code(PRICE_AGGREGATOR_PATH)
            .new_address(PRICE_AGGREGATOR_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            price_aggregator_sc,
            timestamp: START_TIMESTAMP,
        };

        state.set_token_decimals(STAKE_TOKEN, STAKE_DECIMALS);
        state.set_token_decimals(USDC_TOKEN, USDC_DECIMALS);
        state.unpause();

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_token_decimals(&mut self, token: TestTokenIdentifier, decimals: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .set_token_decimals(token_id(token), decimals)
            .run();
    }

    pub fn set_max_price_age(&mut self, max_price_age: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .set_max_price_age(max_price_age)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn remove_oracles(&mut self, submission_count: usize, oracles: &[TestAddress]) {
        let mut to_remove = MultiValueEncoded::new();
        for oracle in oracles {
            to_remove.push(oracle.to_managed_address());
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .remove_oracles(submission_count, to_remove)
            .run();
    }

    pub fn set_submission_count_error(&mut self, submission_count: usize, error: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .set_submission_count(submission_count)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    /// Submits a price stamped with the current block timestamp.
    pub fn submit(&mut self, oracle: TestAddress, token: TestTokenIdentifier, price: BigUint<StaticApi>) {
        let timestamp = self.timestamp;
        self.world
            .tx()
            .from(oracle)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .submit(token_id(token), timestamp, price)
            .run();
    }

    pub fn submit_error(
        &mut self,
        oracle: TestAddress,
        token: TestTokenIdentifier,
        submission_timestamp: u64,
        price: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(oracle)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .submit(token_id(token), submission_timestamp, price)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    /// Both oracles submit the same price, closing a round.
    pub fn set_price(&mut self, token: TestTokenIdentifier, price: BigUint<StaticApi>) {
        self.submit(ORACLE_ADDRESS_1, token, price.clone());
        self.submit(ORACLE_ADDRESS_2, token, price);
    }

    pub fn latest_price_feed(&mut self, token: TestTokenIdentifier) -> PriceFeed<StaticApi> {
        self.world
            .query()
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .latest_price_feed(token_id(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn usd_price(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .get_usd_price(token_id(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn usd_price_error(&mut self, token: TestTokenIdentifier, error: &[u8]) {
        self.world
            .tx()
            .from(ALICE_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .get_usd_price(token_id(token))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn valuate(
        &mut self,
        token_in: TestTokenIdentifier,
        amount_in: BigUint<StaticApi>,
        token_out: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .valuate(token_id(token_in), amount_in, token_id(token_out))
            .returns(ReturnsResult)
            .run()
    }

    pub fn oracle_count(&mut self) -> usize {
        let oracles = self
            .world
            .query()
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .get_oracles()
            .returns(ReturnsResult)
            .run();
        oracles.to_vec().len()
    }

    pub fn oracle_stats(&mut self, oracle: TestAddress) -> (u64, u64, u64) {
        self.world
            .query()
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .get_oracle_stats(oracle.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }
}
