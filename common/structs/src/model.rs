#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Accrual state of one reward token inside a reward pool.
///
/// **Fields**:
/// - `reward_per_share`: cumulative reward per unit of principal since pool inception (WAD precision).
/// - `reward_rate`: raw token units released per second for the current period.
/// - `last_update`: timestamp up to which `reward_per_share` has been advanced.
/// - `period_finish`: timestamp at which `reward_rate` stops emitting.
/// - `distributed`: total amount credited to stakers through the accumulator.
/// - `queued`: emission not yet owed to anyone (idle periods and rate rounding dust),
///   folded into the next funding round.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RewardState<M: ManagedTypeApi> {
    pub reward_per_share: ManagedDecimal<M, NumDecimals>,
    pub reward_rate: BigUint<M>,
    pub last_update: u64,
    pub period_finish: u64,
    pub distributed: BigUint<M>,
    pub queued: BigUint<M>,
}

impl<M: ManagedTypeApi> RewardState<M> {
    pub fn new(reward_per_share: ManagedDecimal<M, NumDecimals>, timestamp: u64) -> Self {
        RewardState {
            reward_per_share,
            reward_rate: BigUint::zero(),
            last_update: timestamp,
            period_finish: timestamp,
            distributed: BigUint::zero(),
            queued: BigUint::zero(),
        }
    }

    /// Timestamp the accumulator may be advanced to at `now`.
    pub fn applicable_until(&self, now: u64) -> u64 {
        core::cmp::min(now, self.period_finish)
    }

    pub fn is_active(&self, now: u64) -> bool {
        now < self.period_finish
    }
}

/// Per account and reward token snapshot of the accumulator.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RewardCheckpoint<M: ManagedTypeApi> {
    pub paid_per_share: ManagedDecimal<M, NumDecimals>,
    pub unclaimed: BigUint<M>,
}

impl<M: ManagedTypeApi> RewardCheckpoint<M> {
    pub fn new(paid_per_share: ManagedDecimal<M, NumDecimals>) -> Self {
        RewardCheckpoint {
            paid_per_share,
            unclaimed: BigUint::zero(),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct StakeAccount<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub locked: BigUint<M>,
    pub unlock_timestamp: u64,
}

impl<M: ManagedTypeApi> StakeAccount<M> {
    pub fn empty() -> Self {
        StakeAccount {
            principal: BigUint::zero(),
            locked: BigUint::zero(),
            unlock_timestamp: 0,
        }
    }

    pub fn is_locked(&self, now: u64) -> bool {
        now < self.unlock_timestamp && self.locked > 0
    }

    /// Principal that can leave the pool at `now`.
    pub fn free_principal(&self, now: u64) -> BigUint<M> {
        if self.is_locked(now) {
            &self.principal - &self.locked
        } else {
            self.principal.clone()
        }
    }

    pub fn has_principal(&self) -> bool {
        self.principal > 0
    }
}

/// Lock state recorded at `timestamp`, used for historical voting power.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LockCheckpoint<M: ManagedTypeApi> {
    pub timestamp: u64,
    pub locked: BigUint<M>,
    pub unlock_timestamp: u64,
}

/// Destination of emitted tokens. Target references are fixed at registration.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum GaugeKind<M: ManagedTypeApi> {
    StakePool {
        pool: ManagedAddress<M>,
        reward_duration: u64,
    },
    ExternalBounty {
        market: ManagedAddress<M>,
        bounty_id: u64,
    },
    Transfer {
        receiver: ManagedAddress<M>,
    },
}

impl<M: ManagedTypeApi> GaugeKind<M> {
    pub fn is_bounty(&self) -> bool {
        matches!(self, GaugeKind::ExternalBounty { .. })
    }

    pub fn target(&self) -> &ManagedAddress<M> {
        match self {
            GaugeKind::StakePool { pool, .. } => pool,
            GaugeKind::ExternalBounty { market, .. } => market,
            GaugeKind::Transfer { receiver } => receiver,
        }
    }
}

/// Reconfigurable parameters of an external bounty gauge.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct BountySettings<M: ManagedTypeApi> {
    pub additional_periods: u64,
    pub max_price_per_vote: BigUint<M>,
}

/// Snapshot of a gauge as returned by the distributor views.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct GaugeView<M: ManagedTypeApi> {
    pub id: u64,
    pub kind: GaugeKind<M>,
    pub weight: BigUint<M>,
    pub pending: BigUint<M>,
    pub last_allocation: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone)]
pub struct GaugeVote<M: ManagedTypeApi> {
    pub gauge_id: u64,
    pub weight: BigUint<M>,
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum Role {
    Admin,
    Funder,
    Recapitalizer,
}

/// Latest aggregated price of a token, as served by the price aggregator.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub round_id: u32,
    pub token: EgldOrEsdtTokenIdentifier<M>,
    /// USD price of one whole token, WAD precision.
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub decimals: u8,
}
