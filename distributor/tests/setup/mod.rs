use crate::constants::*;

use common_constants::MAX_LOCK_DURATION;
use common_proxies::{proxy_bounty_market, proxy_distributor, proxy_reward_pool};
use common_structs::{BountySettings, GaugeKind, GaugeView, GaugeVote, RewardState, Role};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedVec,
    MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestAddress,
    TestTokenIdentifier,
};
use multiversx_sc::codec::multi_types::{MultiValue2, OptionalValue};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(DISTRIBUTOR_PATH, distributor::ContractBuilder);
    blockchain.register_contract(REWARD_POOL_PATH, reward_pool::ContractBuilder);
    blockchain.register_contract(BOUNTY_MARKET_PATH, bounty_market_mock::ContractBuilder);

    blockchain
}

pub fn token_id(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn address(account: TestAddress) -> ManagedAddress<StaticApi> {
    account.to_managed_address()
}

pub fn error_message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub fn vote_args(votes: &[(u64, u64)]) -> MultiValueEncoded<StaticApi, MultiValue2<u64, u64>> {
    let mut args = MultiValueEncoded::new();
    for (gauge_id, bps) in votes {
        args.push(MultiValue2::from((*gauge_id, *bps)));
    }
    args
}

pub struct DistributorTestState {
    pub world: ScenarioWorld,
    pub distributor_sc: ManagedAddress<StaticApi>,
    pub reward_pool_sc: ManagedAddress<StaticApi>,
    pub bounty_market_sc: ManagedAddress<StaticApi>,
}

impl DistributorTestState {
    /// Deploys the reward pool used as vote source and stake pool gauge target, the bounty market and
    /// the distributor, then funds the distributor with `INITIAL_EMISSION_DEPOSIT` emission tokens.
    /// Epoch 0 starts at deployment. No gauge is registered.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(START_TIMESTAMP);

        let reward_pool_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .init(token_id(STAKE_TOKEN), MAX_LOCK_DURATION)
            .code(REWARD_POOL_PATH)
            .new_address(REWARD_POOL_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let bounty_market_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .init()
            .code(BOUNTY_MARKET_PATH)
            .new_address(BOUNTY_MARKET_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let distributor_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_distributor::DistributorProxy)
            .init(
                token_id(EMISSION_TOKEN),
                units(EPOCH_EMISSION),
                EPOCH_LENGTH,
                START_TIMESTAMP,
                reward_pool_sc.clone(),
            )
            .code(DISTRIBUTOR_PATH)
            .new_address(DISTRIBUTOR_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .register_reward_token(token_id(EMISSION_TOKEN))
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .grant_role(Role::Funder, distributor_sc.clone())
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&bounty_market_sc)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .create_bounty(BOUNTY_ID, distributor_sc.clone())
            .run();

        let mut state = Self {
            world,
            distributor_sc,
            reward_pool_sc,
            bounty_market_sc,
        };

        state.deposit_emission(&OWNER_ADDRESS, units(INITIAL_EMISSION_DEPOSIT));

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn deposit_emission(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .deposit_emission()
            .single_esdt(&EMISSION_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn deposit_emission_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .deposit_emission()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    fn add_gauge(
        &mut self,
        kind: GaugeKind<StaticApi>,
        settings: OptionalValue<BountySettings<StaticApi>>,
    ) -> u64 {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .add_gauge(kind, settings)
            .returns(ReturnsResult)
            .run()
    }

    pub fn add_gauge_error(
        &mut self,
        from: &TestAddress,
        kind: GaugeKind<StaticApi>,
        settings: OptionalValue<BountySettings<StaticApi>>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .add_gauge(kind, settings)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn add_stake_pool_gauge(&mut self) -> u64 {
        let kind = GaugeKind::StakePool {
            pool: self.reward_pool_sc.clone(),
            reward_duration: EPOCH_LENGTH,
        };
        self.add_gauge(kind, OptionalValue::None)
    }

    pub fn add_bounty_gauge(&mut self, settings: Option<(u64, BigUint<StaticApi>)>) -> u64 {
        let kind = GaugeKind::ExternalBounty {
            market: self.bounty_market_sc.clone(),
            bounty_id: BOUNTY_ID,
        };
        let settings = match settings {
            Some((additional_periods, max_price_per_vote)) => {
                OptionalValue::Some(BountySettings {
                    additional_periods,
                    max_price_per_vote,
                })
            },
            None => OptionalValue::None,
        };
        self.add_gauge(kind, settings)
    }

    pub fn add_transfer_gauge(&mut self, receiver: TestAddress) -> u64 {
        let kind = GaugeKind::Transfer {
            receiver: address(receiver),
        };
        self.add_gauge(kind, OptionalValue::None)
    }

    pub fn vote(&mut self, from: &TestAddress, votes: &[(u64, u64)]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .vote(vote_args(votes))
            .run();
    }

    pub fn vote_error(&mut self, from: &TestAddress, votes: &[(u64, u64)], error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .vote(vote_args(votes))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn finalize_epoch(&mut self, epoch: u64) {
        self.world
            .tx()
            .from(CAROL_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .finalize_epoch(epoch)
            .run();
    }

    pub fn finalize_epoch_error(&mut self, epoch: u64, error: &[u8]) {
        self.world
            .tx()
            .from(CAROL_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .finalize_epoch(epoch)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn distribute(&mut self, gauge_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(CAROL_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .distribute(gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn distribute_error(&mut self, gauge_id: u64, error: &str) {
        self.world
            .tx()
            .from(CAROL_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .distribute(gauge_id)
            .returns(ExpectMessage(error))
            .run();
    }

    pub fn emergency_withdraw(
        &mut self,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        to: TestAddress,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .emergency_withdraw(token_id(token), amount, address(to))
            .run();
    }

    pub fn emergency_withdraw_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .emergency_withdraw(token_id(token), amount, address(*from))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn set_bounty_settings(
        &mut self,
        gauge_id: u64,
        additional_periods: u64,
        max_price_per_vote: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .set_bounty_settings(gauge_id, additional_periods, max_price_per_vote)
            .run();
    }

    pub fn set_bounty_settings_error(&mut self, from: &TestAddress, gauge_id: u64, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .set_bounty_settings(gauge_id, 1u64, BigUint::zero())
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn update_bounty_manager(&mut self, gauge_id: u64, new_manager: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .update_bounty_manager(gauge_id, address(new_manager))
            .run();
    }

    pub fn set_market_frozen(&mut self, frozen: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.bounty_market_sc)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .set_frozen(frozen)
            .run();
    }

    // Reward pool side

    pub fn pool_deposit(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .deposit()
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn pool_lock(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, unlock_timestamp: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .lock(amount, unlock_timestamp)
            .run();
    }

    /// Deposits and locks `amount` of principal at the current timestamp.
    pub fn stake_and_lock(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, unlock_timestamp: u64) {
        self.pool_deposit(from, amount.clone());
        self.pool_lock(from, amount, unlock_timestamp);
    }

    pub fn pool_claim(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .claim()
            .run();
    }

    pub fn pool_reward_state(&mut self) -> RewardState<StaticApi> {
        self.world
            .query()
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .get_reward_state(token_id(EMISSION_TOKEN))
            .returns(ReturnsResult)
            .run()
    }

    // Views

    pub fn gauge(&mut self, gauge_id: u64) -> GaugeView<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_gauge(gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn gauge_weight(&mut self, gauge_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_gauge_weight(gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pending_allocation(&mut self, gauge_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_pending_allocation(gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_allocation(&mut self, gauge_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_last_allocation(gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn bounty_settings(&mut self, gauge_id: u64) -> BountySettings<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_bounty_settings(gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_pending(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .total_pending()
            .returns(ReturnsResult)
            .run()
    }

    pub fn next_epoch(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .next_epoch()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_epoch(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_current_epoch()
            .returns(ReturnsResult)
            .run()
    }

    pub fn round_tally(&mut self, round: u64, gauge_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_round_tally(round, gauge_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn round_total(&mut self, round: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_round_total(round)
            .returns(ReturnsResult)
            .run()
    }

    pub fn voter_votes(
        &mut self,
        round: u64,
        voter: TestAddress,
    ) -> ManagedVec<StaticApi, GaugeVote<StaticApi>> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(proxy_distributor::DistributorProxy)
            .get_voter_votes(round, address(voter))
            .returns(ReturnsResult)
            .run()
    }

    pub fn bounty_reward(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.bounty_market_sc)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .bounty_reward(BOUNTY_ID)
            .returns(ReturnsResult)
            .run()
    }

    pub fn bounty_periods(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.bounty_market_sc)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .bounty_periods(BOUNTY_ID)
            .returns(ReturnsResult)
            .run()
    }

    pub fn bounty_manager(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.bounty_market_sc)
            .typed(proxy_bounty_market::BountyMarketProxy)
            .bounty_manager(BOUNTY_ID)
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_balance(
        &mut self,
        account: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(account)
            .esdt_balance(token, &amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(EMISSION_TOKEN, units(1_000_000))
        .esdt_balance(OTHER_TOKEN, units(1_000));

    world
        .account(ALICE_ADDRESS)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, units(10_000));

    world
        .account(BOB_ADDRESS)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, units(10_000));

    world.account(CAROL_ADDRESS).nonce(1);
}
