use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

/// Median price closed by one round.
#[type_abi]
#[derive(TopEncode, TopDecode, Debug, PartialEq, Eq)]
pub struct RoundPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    /// Distinct oracles the median was taken over.
    pub submissions: u32,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Default, Debug, PartialEq, Eq)]
pub struct OracleStats {
    pub submitted: u64,
    pub accepted: u64,
    pub last_submission: u64,
}

#[type_abi]
#[derive(TopEncode)]
pub struct RoundClosed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub decimals: u8,
    pub submissions: u32,
    pub block: u64,
}
