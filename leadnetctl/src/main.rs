//! Process entry point (§6 "Process surface", §4.6 "Loop"/"One-shot mode").
//!
//! Loads configuration, wires the HTTP-backed `WorkloadStore`/`TopologyStore`
//! and the Prometheus-backed `MetricsSource`, then runs the reconciler either
//! once or until `SIGINT`/`SIGTERM` cancels it.

mod cli;
mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use leadnet_graph::ServiceGraph;
use leadnet_metrics::PrometheusMetricsSource;
use leadnet_reconciler::{Reconciler, ReconcilerConfig};
use leadnet_shared::RuntimeOptions;
use leadnet_stores::{HttpTopologyStore, HttpWorkloadStore};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::AppConfig;

/// Default inter-cycle interval (§4.6 "Run ... every configured interval
/// (default 30s)"). Not itself a documented config key; the reconciler's
/// ticker runs at this fixed cadence.
const RECONCILE_INTERVAL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.effective_log_level());

    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "leadnetctl exiting with error");
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(&cli.config)?;

    let graph = ServiceGraph::build(config.graph.services.clone(), config.graph.entry.clone())?;

    let workload_store = Arc::new(HttpWorkloadStore::new(config.api_url.clone()));
    let topology_store = Arc::new(HttpTopologyStore::new(config.api_url.clone()));
    let metrics_source = Arc::new(PrometheusMetricsSource::new(config.prometheus.url.clone()));

    // §6 enumerates `badLatencyMs`/`badDropRate` under `affinity.*`, but the
    // scorer (`leadnet-scoring`) is the only consumer, so the effective
    // `ScoringConfig` picks them up from `AppConfig.affinity` here rather
    // than duplicating them under the `scoring:` YAML key.
    let mut scoring = config.scoring.clone();
    scoring.bad_latency_ms = config.affinity.bad_latency_ms;
    scoring.bad_drop_rate = config.affinity.bad_drop_rate;

    let reconciler_config = ReconcilerConfig {
        namespaces: config.namespace_selector.clone(),
        service_label_key: config.service_label_key.clone(),
        scoring,
        affinity: config.affinity.clone(),
        prometheus: config.prometheus.clone(),
    };
    let runtime = RuntimeOptions {
        dry_run: cli.dry_run,
        once: cli.once,
        interval: RECONCILE_INTERVAL,
    };

    let reconciler = Reconciler::new(
        graph,
        reconciler_config,
        runtime,
        workload_store,
        topology_store,
        metrics_source,
    );

    if cli.once {
        reconciler.reconcile_once().await?;
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            watcher.cancel();
        }
    });

    reconciler.run(cancel).await?;
    Ok(())
}
