#![no_std]

use common_constants::{BPS, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Fixed-point helpers shared by every contract in the workspace.
///
/// Amounts owed to someone are always rounded down, so rounding never creates tokens.
/// Accumulators are stored as `ManagedDecimal` with `WAD_PRECISION` decimals.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / c`, rounded down. Multiplication happens first so no precision is lost.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        (a * b) / c
    }

    /// `a * b / c`, rounded up.
    fn mul_div_ceil(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let product = a * b;
        (product + c - BigUint::from(1u32)) / c
    }

    /// `a * WAD / b`, rounded down.
    fn wad_div_floor(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.mul_div_floor(a, &BigUint::from(WAD), b)
    }

    /// `a * b / WAD`, rounded down.
    fn wad_mul_floor(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) / BigUint::from(WAD)
    }

    /// `amount * bps / BPS`, rounded down.
    fn bps_mul_floor(&self, amount: &BigUint, bps: &BigUint) -> BigUint {
        self.mul_div_floor(amount, bps, &BigUint::from(BPS))
    }

    fn min_biguint(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    /// `a - b` floored at zero.
    fn saturating_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }
}
