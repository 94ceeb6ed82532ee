#![no_std]
use common_constants::WAD;
use common_structs::{RewardCheckpoint, RewardState};

multiversx_sc::imports!();

/// The RewardAccrual module holds the pure formulas behind reward streaming, emission splitting
/// and lock power, independent of any storage layout.
///
/// **Scope**: Accumulator accrual, per-account settlement, funding schedules, proportional
/// splits with an exact remainder rule and linearly decaying lock power.
///
/// **Goal**: Keep every amount that is owed to an account rounded down, and route every unit
/// lost to rounding back into the `queued` remainder so nothing is silently dropped.
#[multiversx_sc::module]
pub trait RewardAccrual: common_math::SharedMathModule {
    /// Advances a reward state to `now`.
    ///
    /// **Formula**:
    /// - `until = min(now, period_finish)`, `emitted = reward_rate * (until - last_update)`.
    /// - If `total_principal > 0`: `reward_per_share += emitted * WAD / total_principal` (floor),
    ///   `distributed += ceil(delta * total_principal / WAD)` and the rest of `emitted` goes to `queued`.
    /// - If `total_principal == 0`: the whole `emitted` goes to `queued` (deferred to the next funding).
    /// - `last_update = until`.
    ///
    /// # Arguments
    /// - `state`: The reward state to advance in place.
    /// - `total_principal`: Principal staked in the pool during the elapsed interval.
    /// - `now`: Current block timestamp.
    ///
    /// # Returns
    /// - `bool`: Whether the state changed.
    fn accrue_reward_state(
        &self,
        state: &mut RewardState<Self::Api>,
        total_principal: &BigUint,
        now: u64,
    ) -> bool {
        let until = state.applicable_until(now);
        if until <= state.last_update {
            return false;
        }

        let elapsed = BigUint::from(until - state.last_update);
        let emitted = &state.reward_rate * &elapsed;
        state.last_update = until;

        if emitted == 0 {
            return true;
        }

        if *total_principal == 0 {
            state.queued += &emitted;
            return true;
        }

        let delta = self.wad_div_floor(&emitted, total_principal);
        // Rounded up so the sum of floored account payouts can never exceed what was credited
        let credited = self.mul_div_ceil(&delta, total_principal, &BigUint::from(WAD));

        state.reward_per_share =
            self.to_decimal_wad(state.reward_per_share.into_raw_units() + &delta);
        state.distributed += &credited;
        state.queued += &(emitted - credited);

        true
    }

    /// Rewards owed to `principal` since the checkpoint was last paid, rounded down.
    fn pending_reward(
        &self,
        principal: &BigUint,
        checkpoint: &RewardCheckpoint<Self::Api>,
        reward_per_share: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let delta = reward_per_share.into_raw_units() - checkpoint.paid_per_share.into_raw_units();
        self.wad_mul_floor(principal, &delta)
    }

    /// Moves newly owed rewards into `unclaimed` and snapshots the accumulator.
    ///
    /// # Returns
    /// - `BigUint`: The amount newly credited to the checkpoint.
    fn settle_checkpoint(
        &self,
        checkpoint: &mut RewardCheckpoint<Self::Api>,
        principal: &BigUint,
        state: &RewardState<Self::Api>,
    ) -> BigUint {
        let owed = self.pending_reward(principal, checkpoint, &state.reward_per_share);
        checkpoint.unclaimed += &owed;
        checkpoint.paid_per_share = state.reward_per_share.clone();
        owed
    }

    /// Starts a new reward period of `duration` seconds. The state must already be accrued to `now`.
    ///
    /// **Formula**:
    /// - `leftover = (period_finish - now) * reward_rate` while the current period is running, else 0.
    /// - `total = amount + leftover + queued`.
    /// - `reward_rate = total / duration`, `queued = total - reward_rate * duration`.
    /// - `period_finish = now + duration`, `last_update = now`.
    ///
    /// **Security Tip**: Callers reject `duration == 0` before reaching this point.
    fn schedule_funding(
        &self,
        state: &mut RewardState<Self::Api>,
        amount: &BigUint,
        duration: u64,
        now: u64,
    ) {
        let leftover = if state.is_active(now) {
            &state.reward_rate * &BigUint::from(state.period_finish - now)
        } else {
            BigUint::zero()
        };

        let total = amount + &leftover + &state.queued;
        let duration_big = BigUint::from(duration);
        let reward_rate = &total / &duration_big;

        state.queued = total - &reward_rate * &duration_big;
        state.reward_rate = reward_rate;
        state.period_finish = now + duration;
        state.last_update = now;
    }

    /// Splits `total` proportionally to `weights`, rounding each share down.
    /// The integer remainder is assigned to the first entry with a non-zero weight,
    /// so the returned amounts always sum to exactly `total`.
    ///
    /// Returns all zeros when every weight is zero.
    fn split_proportionally(
        &self,
        weights: &ManagedVec<BigUint>,
        total: &BigUint,
    ) -> ManagedVec<BigUint> {
        let mut weight_sum = BigUint::zero();
        for weight in weights.iter() {
            let weight: &BigUint = &weight;
            weight_sum += weight;
        }

        let mut shares = ManagedVec::<Self::Api, BigUint>::new();
        if weight_sum == 0 {
            for _ in 0..weights.len() {
                shares.push(BigUint::zero());
            }
            return shares;
        }

        let mut floored = ManagedVec::<Self::Api, BigUint>::new();
        let mut allocated = BigUint::zero();
        let mut first_non_zero: Option<usize> = None;
        for (index, weight) in weights.iter().enumerate() {
            let weight: &BigUint = &weight;
            if first_non_zero.is_none() && *weight > 0 {
                first_non_zero = Some(index);
            }
            let share = self.mul_div_floor(total, weight, &weight_sum);
            allocated += &share;
            floored.push(share);
        }

        let remainder = total - &allocated;
        for (index, share) in floored.iter().enumerate() {
            let share: &BigUint = &share;
            if Some(index) == first_non_zero {
                shares.push(share + &remainder);
            } else {
                shares.push(share.clone());
            }
        }

        shares
    }

    /// Lock power of `locked` principal at timestamp `at`, decaying linearly to zero at `unlock_timestamp`.
    ///
    /// **Formula**: `locked * (unlock_timestamp - at) / max_lock_duration`, zero once `at >= unlock_timestamp`.
    fn lock_power(
        &self,
        locked: &BigUint,
        unlock_timestamp: u64,
        at: u64,
        max_lock_duration: u64,
    ) -> BigUint {
        if at >= unlock_timestamp || max_lock_duration == 0 {
            return BigUint::zero();
        }

        self.mul_div_floor(
            locked,
            &BigUint::from(unlock_timestamp - at),
            &BigUint::from(max_lock_duration),
        )
    }
}
