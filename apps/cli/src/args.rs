//! Command line definition of `bts-hosts`.

use bts::domain::{Direction, NetworkZones, TargetEnvironment};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bts-hosts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Resolve the BizTalk hosts of application bindings per network zone and environment")]
pub(crate) struct Cli {
    /// Log resolution details (debug level)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Also write rolling log files to this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the host of every artifact of a bindings file
    Resolve {
        /// Bindings file (TOML, YAML or JSON)
        #[arg(short, long, value_name = "FILE")]
        bindings: PathBuf,

        /// Target environment; defaults to BTS__TARGET_ENVIRONMENT
        #[arg(short, long)]
        env: Option<TargetEnvironment>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a bindings file for every target environment
    Check {
        #[arg(short, long, value_name = "FILE")]
        bindings: PathBuf,
    },
    /// Print the network zones an adapter can be hosted in
    Zones {
        #[command(flatten)]
        adapter: AdapterArgs,
    },
    /// Resolve the host of a single receive location, send port or orchestration
    Host {
        #[command(flatten)]
        adapter: OptionalAdapterArgs,

        #[arg(short, long)]
        env: TargetEnvironment,

        /// Bind the artifact to one network zone (intranet or b2b)
        #[arg(short, long, conflicts_with = "explicit")]
        zone: Option<NetworkZones>,

        /// Use this host verbatim
        #[arg(long, value_name = "HOST")]
        explicit: Option<String>,

        /// Artifact name used in error messages
        #[arg(short, long, default_value = "Transport")]
        artifact: String,
    },
}

#[derive(Debug, Args)]
pub(crate) struct AdapterArgs {
    /// Transport protocol: File, SBMessaging, WCF-SQL, WCF-Custom, ...
    #[arg(short, long)]
    pub(crate) protocol: String,

    /// Binding of a WCF-Custom or WCF-CustomIsolated adapter
    #[arg(long)]
    pub(crate) binding: Option<String>,

    /// inbound (receive location) or outbound (send port)
    #[arg(short, long)]
    pub(crate) direction: Direction,
}

/// Adapter of a transport; no protocol means an orchestration.
#[derive(Debug, Args)]
pub(crate) struct OptionalAdapterArgs {
    /// Transport protocol of a receive location or send port
    #[arg(short, long, requires = "direction")]
    pub(crate) protocol: Option<String>,

    /// Binding of a WCF-Custom or WCF-CustomIsolated adapter
    #[arg(long, requires = "protocol")]
    pub(crate) binding: Option<String>,

    /// inbound (receive location) or outbound (send port)
    #[arg(short, long, requires = "protocol")]
    pub(crate) direction: Option<Direction>,
}
