#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod admin;
pub mod epochs;
pub mod gauges;
pub mod storage;
pub mod utils;
pub mod views;
pub mod votes;
pub use common_events::*;

use common_errors::{
    ERROR_INVALID_ADDRESS, ERROR_INVALID_ASSET, ERROR_INVALID_EPOCH_LENGTH, ERROR_ZERO_AMOUNT,
};

#[multiversx_sc::contract]
pub trait Distributor:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
    + common_access::AccessModule
    + utils::UtilsModule
    + epochs::EpochModule
    + votes::VoteModule
    + gauges::GaugeModule
    + admin::AdminModule
    + views::ViewModule
{
    /// Initializes the emission scheduler.
    ///
    /// **Purpose**: Fixes the emission token, the amount emitted per epoch and the epoch clock. Epoch `e`
    /// spans `[start_timestamp + e * epoch_length, start_timestamp + (e + 1) * epoch_length)`.
    ///
    /// ### Parameters
    /// - `emission_token`: Token allocated to gauges.
    /// - `epoch_emission`: Amount allocated by every finalized epoch.
    /// - `epoch_length`: Epoch duration in seconds.
    /// - `start_timestamp`: Start of epoch 0.
    /// - `vote_source`: Reward pool whose lock history provides voting power.
    ///
    /// **Security Considerations**: The deployer receives `Admin`, required for gauge management.
    #[init]
    fn init(
        &self,
        emission_token: EgldOrEsdtTokenIdentifier,
        epoch_emission: BigUint,
        epoch_length: u64,
        start_timestamp: u64,
        vote_source: ManagedAddress,
    ) {
        require!(emission_token.is_valid(), ERROR_INVALID_ASSET);
        require!(epoch_emission > 0, ERROR_ZERO_AMOUNT);
        require!(epoch_length > 0, ERROR_INVALID_EPOCH_LENGTH);
        require!(!vote_source.is_zero(), ERROR_INVALID_ADDRESS);

        self.emission_token().set(&emission_token);
        self.epoch_emission().set(&epoch_emission);
        self.epoch_length().set(epoch_length);
        self.start_timestamp().set(start_timestamp);
        self.vote_source().set(&vote_source);
        self.next_epoch().set(0u64);
        self.total_pending().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        self.add_role(common_structs::Role::Admin, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
