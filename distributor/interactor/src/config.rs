use multiversx_sc_snippets::imports::Bech32Address;
use serde::Deserialize;
use std::io::Read;

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_GAS_LIMIT: u64 = 30_000_000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Real,
    Simulator,
}

/// Keeper settings read from `config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub gateway_uri: String,
    pub chain_type: ChainType,
    pub gas_limit: Option<u64>,
    pub wallet_pem: Option<String>,
    pub distributor: Option<Bech32Address>,
    pub recapitalization: Option<Bech32Address>,
}

impl Config {
    pub fn new() -> Self {
        let mut file = std::fs::File::open(CONFIG_FILE)
            .unwrap_or_else(|err| panic!("cannot open {CONFIG_FILE}: {err}"));
        let mut content = String::new();
        file.read_to_string(&mut content)
            .unwrap_or_else(|err| panic!("cannot read {CONFIG_FILE}: {err}"));
        toml::from_str(&content).unwrap_or_else(|err| panic!("invalid {CONFIG_FILE}: {err}"))
    }

    pub fn gateway_uri(&self) -> &str {
        &self.gateway_uri
    }

    pub fn use_chain_simulator(&self) -> bool {
        match self.chain_type {
            ChainType::Real => false,
            ChainType::Simulator => true,
        }
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit.unwrap_or(DEFAULT_GAS_LIMIT)
    }

    pub fn distributor(&self) -> &Bech32Address {
        self.distributor
            .as_ref()
            .unwrap_or_else(|| panic!("distributor address missing from {CONFIG_FILE}"))
    }

    pub fn recapitalization(&self) -> &Bech32Address {
        self.recapitalization
            .as_ref()
            .unwrap_or_else(|| panic!("recapitalization address missing from {CONFIG_FILE}"))
    }
}
