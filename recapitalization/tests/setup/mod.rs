use crate::constants::*;

use common_constants::MAX_LOCK_DURATION;
use common_proxies::{
    proxy_converter, proxy_omnipool, proxy_price_aggregator, proxy_recapitalization,
    proxy_reward_pool,
};
use common_structs::{RewardState, Role};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, ManagedAddress, ManagedVec,
    MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestAddress,
    TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(RECAPITALIZATION_PATH, recapitalization::ContractBuilder);
    blockchain.register_contract(REWARD_POOL_PATH, reward_pool::ContractBuilder);
    blockchain.register_contract(PRICE_AGGREGATOR_PATH, price_aggregator::ContractBuilder);
    blockchain.register_contract(SWAP_PATH, swap_mock::ContractBuilder);
    blockchain.register_contract(OMNIPOOL_PATH, omnipool_mock::ContractBuilder);

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

pub fn amounts_args(amounts: &[BigUint<StaticApi>]) -> MultiValueEncoded<StaticApi, BigUint<StaticApi>> {
    let mut args = MultiValueEncoded::new();
    for amount in amounts {
        args.push(amount.clone());
    }
    args
}

pub struct RecapitalizationTestState {
    pub world: ScenarioWorld,
    pub recapitalization_sc: ManagedAddress<StaticApi>,
    pub reward_pool_sc: ManagedAddress<StaticApi>,
    pub price_aggregator_sc: ManagedAddress<StaticApi>,
    pub swap_sc: ManagedAddress<StaticApi>,
    pub omnipool_sc: ManagedAddress<StaticApi>,
}

impl RecapitalizationTestState {
    /// Deploys the reward pool (`REWARD_TOKEN`, `BONUS_TOKEN` and `STRAY_TOKEN` as pool rewards), an
    /// oracle pricing every token, a converter trading at oracle prices, an omnipool with `USDC_TOKEN`
    /// as underlying and the ledger with `REWARD_TOKEN` and `BONUS_TOKEN` as its reward tokens.
    /// The ledger starts with `LEDGER_STAKE` staked and is the only staker.
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

        let mut oracles = MultiValueEncoded::new();
        oracles.push(address(ORACLE_ADDRESS));
        let price_aggregator_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .init(1usize, oracles)
            .code(PRICE_AGGREGATOR_PATH)
            .new_address(PRICE_AGGREGATOR_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let swap_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_converter::ConverterProxy)
            .init()
            .code(SWAP_PATH)
            .new_address(SWAP_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let omnipool_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_omnipool::OmnipoolProxy)
            .init(token_id(USDC_TOKEN))
            .code(OMNIPOOL_PATH)
            .new_address(OMNIPOOL_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let recapitalization_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .init(
                token_id(STAKE_TOKEN),
                reward_pool_sc.clone(),
                price_aggregator_sc.clone(),
                swap_sc.clone(),
                ACCUMULATION_PERIOD,
                MAX_SLIPPAGE_BPS,
            )
            .code(RECAPITALIZATION_PATH)
            .new_address(RECAPITALIZATION_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            recapitalization_sc,
            reward_pool_sc,
            price_aggregator_sc,
            swap_sc,
            omnipool_sc,
        };

        state.setup_reward_pool();
        state.setup_oracle();
        state.setup_converter();

        state.add_reward_token(REWARD_TOKEN);
        state.add_reward_token(BONUS_TOKEN);
        state.grant_role(Role::Recapitalizer, RECAPITALIZER_ADDRESS);
        state.deposit_stake(units(LEDGER_STAKE));

        state
    }

    fn setup_reward_pool(&mut self) {
        for token in [REWARD_TOKEN, BONUS_TOKEN, STRAY_TOKEN] {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.reward_pool_sc)
                .typed(proxy_reward_pool::RewardPoolProxy)
                .register_reward_token(token_id(token))
                .run();
        }

        for funder in [address(OWNER_ADDRESS), self.recapitalization_sc.clone()] {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.reward_pool_sc)
                .typed(proxy_reward_pool::RewardPoolProxy)
                .grant_role(Role::Funder, funder)
                .run();
        }
    }

    fn setup_oracle(&mut self) {
        let prices = [
            (STAKE_TOKEN, STAKE_PRICE_CENTS),
            (REWARD_TOKEN, REWARD_PRICE_CENTS),
            (BONUS_TOKEN, BONUS_PRICE_CENTS),
            (USDC_TOKEN, USDC_PRICE_CENTS),
        ];

        for (token, _) in prices {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.price_aggregator_sc)
                .typed(proxy_price_aggregator::PriceAggregatorProxy)
                .set_token_decimals(token_id(token), 18u8)
                .run();
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .set_max_price_age(MAX_PRICE_AGE)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_aggregator_sc)
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .unpause_endpoint()
            .run();

        for (token, cents) in prices {
            self.world
                .tx()
                .from(ORACLE_ADDRESS)
                .to(&self.price_aggregator_sc)
                .typed(proxy_price_aggregator::PriceAggregatorProxy)
                .submit(token_id(token), START_TIMESTAMP, wad_cents(cents))
                .run();
        }
    }

    /// Rates matching the oracle prices exactly.
    fn setup_converter(&mut self) {
        self.set_rate(STAKE_TOKEN, USDC_TOKEN, wad_cents(200));
        self.set_rate(REWARD_TOKEN, USDC_TOKEN, wad_cents(100));
        self.set_rate(BONUS_TOKEN, USDC_TOKEN, wad_cents(400));
        self.set_rate(REWARD_TOKEN, STAKE_TOKEN, wad_cents(50));
        self.set_rate(BONUS_TOKEN, STAKE_TOKEN, wad_cents(200));

        for token in [USDC_TOKEN, STAKE_TOKEN] {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.swap_sc)
                .typed(proxy_converter::ConverterProxy)
                .provide_liquidity()
                .single_esdt(&token.to_token_identifier(), 0, &units(100_000))
                .run();
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_rate(
        &mut self,
        token_in: TestTokenIdentifier,
        token_out: TestTokenIdentifier,
        rate: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.swap_sc)
            .typed(proxy_converter::ConverterProxy)
            .set_rate(token_id(token_in), token_id(token_out), rate)
            .run();
    }

    // Reward pool side

    /// Funds `amount` of `token` in the reward pool over `FUND_DURATION` seconds.
    pub fn fund_pool(&mut self, token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .fund(FUND_DURATION)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn pool_total_principal(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .total_principal()
            .returns(ReturnsResult)
            .run()
    }

    pub fn ledger_staked_principal(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .get_staked_principal(self.recapitalization_sc.clone())
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_reward_state(&mut self, token: TestTokenIdentifier) -> RewardState<StaticApi> {
        self.world
            .query()
            .to(&self.reward_pool_sc)
            .typed(proxy_reward_pool::RewardPoolProxy)
            .get_reward_state(token_id(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn strategy_balance(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.omnipool_sc)
            .typed(proxy_omnipool::OmnipoolProxy)
            .strategy_balance(STRATEGY_SLOT, TOKEN_SLOT)
            .returns(ReturnsResult)
            .run()
    }

    // Ledger endpoints

    pub fn grant_role(&mut self, role: Role, account: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .grant_role(role, address(account))
            .run();
    }

    pub fn add_reward_token(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .add_reward_token(token_id(token))
            .run();
    }

    pub fn add_reward_token_error(&mut self, from: &TestAddress, token: TestTokenIdentifier, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .add_reward_token(token_id(token))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn set_max_slippage_error(&mut self, max_slippage_bps: u64, error: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .set_max_slippage(max_slippage_bps)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn set_accumulation_period_error(&mut self, accumulation_period: u64, error: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .set_accumulation_period(accumulation_period)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn deposit_stake(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .deposit_stake()
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn harvest(&mut self) -> ManagedVec<StaticApi, EgldOrEsdtTokenPayment<StaticApi>> {
        self.world
            .tx()
            .from(ALICE_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .harvest()
            .returns(ReturnsResult)
            .run()
    }

    pub fn recapitalize_by_rewards(&mut self, amounts: &[BigUint<StaticApi>]) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(RECAPITALIZER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .recapitalize_by_rewards(
                self.omnipool_sc.clone(),
                STRATEGY_SLOT,
                TOKEN_SLOT,
                amounts_args(amounts),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn recapitalize_by_rewards_error(&mut self, amounts: &[BigUint<StaticApi>], error: &str) {
        self.world
            .tx()
            .from(RECAPITALIZER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .recapitalize_by_rewards(
                self.omnipool_sc.clone(),
                STRATEGY_SLOT,
                TOKEN_SLOT,
                amounts_args(amounts),
            )
            .returns(ExpectMessage(error))
            .run();
    }

    pub fn recapitalize_by_staked_principal(&mut self, amount: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(RECAPITALIZER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .recapitalize_by_staked_principal(
                amount,
                self.swap_sc.clone(),
                self.omnipool_sc.clone(),
                STRATEGY_SLOT,
                TOKEN_SLOT,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn recapitalize_by_staked_principal_error(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .recapitalize_by_staked_principal(
                amount,
                self.swap_sc.clone(),
                self.omnipool_sc.clone(),
                STRATEGY_SLOT,
                TOKEN_SLOT,
            )
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn restore(&mut self) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(RECAPITALIZER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .restore_staked_principal_by_rewards(self.swap_sc.clone())
            .returns(ReturnsResult)
            .run()
    }

    pub fn restore_error(&mut self, from: &TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .restore_staked_principal_by_rewards(self.swap_sc.clone())
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn distribute_rewards(&mut self) {
        self.world
            .tx()
            .from(ALICE_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .distribute_rewards()
            .run();
    }

    pub fn emergency_withdraw(&mut self, token: TestTokenIdentifier, amount: BigUint<StaticApi>, to: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .emergency_withdraw(token_id(token), amount, address(to))
            .run();
    }

    // Ledger views

    pub fn recapitalized_amount(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .recapitalized_amount()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_distribution(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .last_distribution()
            .returns(ReturnsResult)
            .run()
    }

    pub fn rewards_value(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .get_rewards_value()
            .returns(ReturnsResult)
            .run()
    }

    pub fn reward_token_count(&mut self) -> usize {
        let tokens = self
            .world
            .query()
            .to(&self.recapitalization_sc)
            .typed(proxy_recapitalization::RecapitalizationProxy)
            .get_reward_tokens()
            .returns(ReturnsResult)
            .run();
        tokens.to_vec().len()
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

    pub fn check_ledger_balance(&mut self, token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .check_account(RECAPITALIZATION_ADDRESS)
            .esdt_balance(token, &amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, units(200_000))
        .esdt_balance(USDC_TOKEN, units(200_000))
        .esdt_balance(REWARD_TOKEN, units(100_000))
        .esdt_balance(BONUS_TOKEN, units(100_000))
        .esdt_balance(STRAY_TOKEN, units(100_000));

    world.account(ORACLE_ADDRESS).nonce(1);
    world.account(RECAPITALIZER_ADDRESS).nonce(1);
    world.account(ALICE_ADDRESS).nonce(1);
}
