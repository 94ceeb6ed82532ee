#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Reward pool
    #[event("reward_token_registered")]
    fn reward_token_registered_event(&self, #[indexed] token: &EgldOrEsdtTokenIdentifier);

    // Emitted after every accrual that moved the accumulator or the queued remainder
    #[event("update_reward_state")]
    fn update_reward_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] total_principal: &BigUint,
        state: &RewardState<Self::Api>,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
        #[indexed] total_principal: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
        #[indexed] total_principal: &BigUint,
    );

    #[event("claim")]
    fn claim_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] duration: u64,
        state: &RewardState<Self::Api>,
    );

    #[event("lock")]
    fn lock_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] locked: &BigUint,
        #[indexed] unlock_timestamp: u64,
    );

    #[event("exit")]
    fn exit_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] principal: &BigUint);

    // Distributor
    #[event("add_gauge")]
    fn add_gauge_event(&self, #[indexed] gauge_id: u64, kind: &GaugeKind<Self::Api>);

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] round: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] voting_power: &BigUint,
        votes: &ManagedVec<GaugeVote<Self::Api>>,
    );

    #[event("epoch_finalized")]
    fn epoch_finalized_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] emission: &BigUint,
        #[indexed] total_votes: &BigUint,
        #[indexed] reused_weights: bool,
    );

    #[event("gauge_allocation")]
    fn gauge_allocation_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] gauge_id: u64,
        #[indexed] weight: &BigUint,
        #[indexed] amount: &BigUint,
    );

    #[event("gauge_distribution")]
    fn gauge_distribution_event(
        &self,
        #[indexed] gauge_id: u64,
        #[indexed] target: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("zero_distribution")]
    fn zero_distribution_event(&self, #[indexed] gauge_id: u64);

    #[event("bounty_settings")]
    fn bounty_settings_event(&self, #[indexed] gauge_id: u64, settings: &BountySettings<Self::Api>);

    #[event("bounty_manager_update")]
    fn bounty_manager_update_event(
        &self,
        #[indexed] gauge_id: u64,
        #[indexed] bounty_id: u64,
        #[indexed] new_manager: &ManagedAddress,
    );

    #[event("emergency_withdraw")]
    fn emergency_withdraw_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] to: &ManagedAddress,
    );

    // Recapitalization
    #[event("recapitalize_by_rewards")]
    fn recapitalize_by_rewards_event(
        &self,
        #[indexed] target_pool: &ManagedAddress,
        #[indexed] strategy_slot: u32,
        #[indexed] token_slot: u32,
        #[indexed] deposited: &BigUint,
        reward_amounts: &ManagedVec<BigUint>,
    );

    #[event("recapitalize_by_staked_principal")]
    fn recapitalize_by_staked_principal_event(
        &self,
        #[indexed] target_pool: &ManagedAddress,
        #[indexed] strategy_slot: u32,
        #[indexed] token_slot: u32,
        #[indexed] amount: &BigUint,
        #[indexed] deposited: &BigUint,
        #[indexed] recapitalized_amount: &BigUint,
    );

    #[event("restore_staked_principal")]
    fn restore_staked_principal_event(
        &self,
        #[indexed] restored: &BigUint,
        #[indexed] recapitalized_amount: &BigUint,
        #[indexed] surplus: &BigUint,
        rewards_used: &ManagedVec<EgldOrEsdtTokenPayment>,
    );

    #[event("distribute_rewards")]
    fn distribute_rewards_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] duration: u64,
    );

    #[event("harvest")]
    fn harvest_event(&self, #[indexed] rewards: &ManagedVec<EgldOrEsdtTokenPayment>);

    // Access control
    #[event("role_granted")]
    fn role_granted_event(&self, #[indexed] role: Role, #[indexed] account: &ManagedAddress);

    #[event("role_revoked")]
    fn role_revoked_event(&self, #[indexed] role: Role, #[indexed] account: &ManagedAddress);
}
