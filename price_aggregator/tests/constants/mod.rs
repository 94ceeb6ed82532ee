use multiversx_sc::types::{BigUint, TestAddress, TestSCAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const START_TIMESTAMP: u64 = 1_000;
pub const SUBMISSION_COUNT: usize = 2;

pub const STAKE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("STAKE-abcdef");
pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const UNPRICED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NOPRICE-abcdef");

pub const STAKE_DECIMALS: u8 = 18;
pub const USDC_DECIMALS: u8 = 6;

pub const PRICE_AGGREGATOR_ADDRESS: TestSCAddress = TestSCAddress::new("price-aggregator");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ORACLE_ADDRESS_1: TestAddress = TestAddress::new("oracle1");
pub const ORACLE_ADDRESS_2: TestAddress = TestAddress::new("oracle2");
pub const ORACLE_ADDRESS_3: TestAddress = TestAddress::new("oracle3");
pub const ALICE_ADDRESS: TestAddress = TestAddress::new("alice");

pub const PRICE_AGGREGATOR_PATH: MxscPath = MxscPath::new("output/price_aggregator.mxsc.json");

/// `amount` USD in WAD precision, in hundredths.
pub fn usd_cents(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(16)
}
