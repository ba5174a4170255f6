//! Process options (§6 "Process surface"): `clap`-parsed flags, each also
//! readable from its documented `LEAD_NET_*` environment variable. A flag
//! given on the command line takes precedence over its environment variable.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "leadnetctl", about = "Network-aware placement controller")]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, env = "LEAD_NET_CONFIG", default_value = "/etc/lead-net-affinity/config.yaml")]
    pub config: String,

    /// Run one reconciliation cycle and exit instead of looping.
    #[arg(long, env = "LEAD_NET_ONCE")]
    pub once: bool,

    /// Compute everything but skip `WorkloadStore::update_workload` calls.
    #[arg(long, env = "LEAD_NET_DRYRUN")]
    pub dry_run: bool,

    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[arg(long, env = "LEAD_NET_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// The effective log level after applying the `LEAD_NET_DEBUG=1`
    /// shorthand, which forces `debug` regardless of `--log-level`.
    pub fn effective_log_level(&self) -> String {
        let debug_forced = std::env::var("LEAD_NET_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if debug_forced {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }
}
