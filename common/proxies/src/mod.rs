#![no_std]

pub mod proxy_bounty_market;
pub mod proxy_converter;
pub mod proxy_distributor;
pub mod proxy_omnipool;
pub mod proxy_price_aggregator;
pub mod proxy_recapitalization;
pub mod proxy_reward_pool;
