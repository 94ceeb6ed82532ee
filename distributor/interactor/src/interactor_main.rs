mod config;

use clap::{Parser, Subcommand};
use common_proxies::{
    proxy_distributor::DistributorProxy, proxy_recapitalization::RecapitalizationProxy,
};
use config::Config;
use multiversx_sc_snippets::imports::*;

/// Permissionless upkeep for the emission scheduler and the recapitalization ledger.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the epoch clock and every gauge's pending allocation
    Status,
    /// Finalize every ended epoch that is still open, oldest first
    Finalize {
        /// Stop after this many epochs
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Push pending allocations, one transaction per gauge
    Distribute {
        /// Only push this gauge
        #[arg(long)]
        gauge: Option<u64>,
    },
    /// Finalize, then distribute everything
    Crank,
    /// Restore diverted principal, then stream the ledger's rewards into the pool
    DistributeRewards,
    /// Collect the ledger's accrued pool rewards
    Harvest,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut keeper = Keeper::new(Config::new()).await;
    match cli.command {
        Command::Status => keeper.status().await,
        Command::Finalize { limit } => {
            keeper.finalize_ended_epochs(limit).await;
        },
        Command::Distribute { gauge } => match gauge {
            Some(gauge_id) => {
                keeper.distribute(gauge_id).await;
            },
            None => keeper.distribute_all().await,
        },
        Command::Crank => {
            keeper.finalize_ended_epochs(None).await;
            keeper.distribute_all().await;
        },
        Command::DistributeRewards => keeper.distribute_rewards().await,
        Command::Harvest => keeper.harvest().await,
    }
}

struct Keeper {
    interactor: Interactor,
    wallet_address: Address,
    config: Config,
}

impl Keeper {
    async fn new(config: Config) -> Self {
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());
        interactor.set_current_dir_from_workspace("distributor/interactor");

        let wallet = match &config.wallet_pem {
            Some(path) => Wallet::from_pem_file(path)
                .unwrap_or_else(|err| panic!("cannot load wallet {path}: {err:?}")),
            None => test_wallets::alice(),
        };
        let wallet_address = interactor.register_wallet(wallet).await;

        Keeper {
            interactor,
            wallet_address,
            config,
        }
    }

    async fn status(&mut self) {
        let next_epoch = self.next_epoch().await;
        let current_epoch = self.current_epoch().await;
        let total_pending = self
            .interactor
            .query()
            .to(self.config.distributor())
            .typed(DistributorProxy)
            .total_pending()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        println!("next epoch to finalize: {next_epoch}, current epoch: {current_epoch}");
        println!("total pending: {total_pending}");

        for gauge_id in 1..=self.gauge_count().await {
            let pending = self.pending_allocation(gauge_id).await;
            let weight = self
                .interactor
                .query()
                .to(self.config.distributor())
                .typed(DistributorProxy)
                .get_gauge_weight(gauge_id)
                .returns(ReturnsResultUnmanaged)
                .run()
                .await;

            println!("gauge {gauge_id}: weight {weight}, pending {pending}");
        }
    }

    /// Returns how many epochs were finalized. Stops at the first failure.
    async fn finalize_ended_epochs(&mut self, limit: Option<u64>) -> u64 {
        let next_epoch = self.next_epoch().await;
        let current_epoch = self.current_epoch().await;
        let last = match limit {
            Some(limit) => current_epoch.min(next_epoch.saturating_add(limit)),
            None => current_epoch,
        };

        let gas_limit = self.config.gas_limit();
        let mut finalized = 0u64;
        for epoch in next_epoch..last {
            let outcome = self
                .interactor
                .tx()
                .from(&self.wallet_address)
                .to(self.config.distributor())
                .gas(gas_limit)
                .typed(DistributorProxy)
                .finalize_epoch(epoch)
                .returns(ReturnsHandledOrError::new())
                .run()
                .await;

            match outcome {
                Ok(()) => {
                    println!("finalized epoch {epoch}");
                    finalized += 1;
                },
                Err(err) => {
                    println!("epoch {epoch} not finalized: {}", err.message);
                    break;
                },
            }
        }

        if finalized == 0 {
            println!("no ended epoch to finalize");
        }
        finalized
    }

    async fn distribute_all(&mut self) {
        for gauge_id in 1..=self.gauge_count().await {
            if self.pending_allocation(gauge_id).await == RustBigUint::default() {
                continue;
            }
            self.distribute(gauge_id).await;
        }
    }

    /// A failed push only reverts its own transaction; the gauge keeps its allocation.
    async fn distribute(&mut self, gauge_id: u64) -> bool {
        let gas_limit = self.config.gas_limit();
        let outcome = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.config.distributor())
            .gas(gas_limit)
            .typed(DistributorProxy)
            .distribute(gauge_id)
            .returns(ReturnsHandledOrError::new().returns(ReturnsResultUnmanaged))
            .run()
            .await;

        match outcome {
            Ok(pushed) => {
                println!("gauge {gauge_id}: pushed {pushed}");
                true
            },
            Err(err) => {
                println!("gauge {gauge_id}: kept its allocation ({})", err.message);
                false
            },
        }
    }

    async fn distribute_rewards(&mut self) {
        let gas_limit = self.config.gas_limit();
        let outcome = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.config.recapitalization())
            .gas(gas_limit)
            .typed(RecapitalizationProxy)
            .distribute_rewards()
            .returns(ReturnsHandledOrError::new())
            .run()
            .await;

        match outcome {
            Ok(()) => println!("ledger rewards distributed"),
            Err(err) => println!("distribution failed: {}", err.message),
        }

        let debt = self
            .interactor
            .query()
            .to(self.config.recapitalization())
            .typed(RecapitalizationProxy)
            .recapitalized_amount()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;
        println!("principal still owed to the pool: {debt}");
    }

    async fn harvest(&mut self) {
        let gas_limit = self.config.gas_limit();
        let outcome = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.config.recapitalization())
            .gas(gas_limit)
            .typed(RecapitalizationProxy)
            .harvest()
            .returns(ReturnsHandledOrError::new().returns(ReturnsResult))
            .run()
            .await;

        match outcome {
            Ok(payments) => {
                for payment in payments.iter() {
                    let token = payment.token_identifier.clone().into_name();
                    println!(
                        "harvested {}",
                        String::from_utf8_lossy(token.to_boxed_bytes().as_slice())
                    );
                }
                if payments.is_empty() {
                    println!("nothing to harvest");
                }
            },
            Err(err) => println!("harvest failed: {}", err.message),
        }
    }

    async fn next_epoch(&mut self) -> u64 {
        self.interactor
            .query()
            .to(self.config.distributor())
            .typed(DistributorProxy)
            .next_epoch()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await
    }

    async fn current_epoch(&mut self) -> u64 {
        self.interactor
            .query()
            .to(self.config.distributor())
            .typed(DistributorProxy)
            .get_current_epoch()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await
    }

    async fn gauge_count(&mut self) -> u64 {
        let count = self
            .interactor
            .query()
            .to(self.config.distributor())
            .typed(DistributorProxy)
            .get_gauge_count()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;
        count as u64
    }

    async fn pending_allocation(&mut self, gauge_id: u64) -> RustBigUint {
        self.interactor
            .query()
            .to(self.config.distributor())
            .typed(DistributorProxy)
            .get_pending_allocation(gauge_id)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await
    }
}
