#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod conversion;
pub mod recapitalize;
pub mod restore;
pub mod stake;
pub mod storage;
pub mod views;
pub use common_events::*;

use common_errors::{ERROR_INVALID_ADDRESS, ERROR_INVALID_ASSET};

/// Backstop ledger of a reward pool.
///
/// The ledger stakes in the reward pool like any other account. Its principal can be diverted into a
/// deficient external pool and is restored later from harvested rewards; the outstanding part is
/// tracked as `recapitalized_amount`.
#[multiversx_sc::contract]
pub trait Recapitalization:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_access::AccessModule
    + conversion::ConversionModule
    + recapitalize::RecapitalizeModule
    + restore::RestoreModule
    + stake::StakeModule
    + config::ConfigModule
    + views::ViewModule
{
    /// Initializes the ledger.
    ///
    /// ### Parameters
    /// - `stake_token`: Principal token of `reward_pool`.
    /// - `reward_pool`: Pool the ledger stakes in and funds. The ledger needs `Funder` there.
    /// - `price_aggregator`: Oracle used to value conversions.
    /// - `default_converter`: Converter used by reward based operations.
    /// - `accumulation_period`: Funding duration used by `distributeRewards`.
    /// - `max_slippage_bps`: Accepted shortfall of a conversion against the oracle value.
    ///
    /// **Security Considerations**: The deployer receives `Admin`; `Recapitalizer` is granted separately.
    #[init]
    fn init(
        &self,
        stake_token: EgldOrEsdtTokenIdentifier,
        reward_pool: ManagedAddress,
        price_aggregator: ManagedAddress,
        default_converter: ManagedAddress,
        accumulation_period: u64,
        max_slippage_bps: u64,
    ) {
        require!(stake_token.is_valid(), ERROR_INVALID_ASSET);
        require!(!reward_pool.is_zero(), ERROR_INVALID_ADDRESS);
        require!(!price_aggregator.is_zero(), ERROR_INVALID_ADDRESS);
        require!(!default_converter.is_zero(), ERROR_INVALID_ADDRESS);

        self.stake_token().set(&stake_token);
        self.reward_pool().set(&reward_pool);
        self.price_aggregator().set(&price_aggregator);
        self.default_converter().set(&default_converter);
        self.set_accumulation_period_checked(accumulation_period);
        self.set_max_slippage_checked(max_slippage_bps);
        self.recapitalized_amount().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        self.add_role(common_structs::Role::Admin, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
