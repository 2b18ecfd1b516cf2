use anyhow::{bail, Context};
use clap::Parser;
use dnsdiff_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod hosts;
mod output;

#[derive(Parser)]
#[command(name = "dnsdiff")]
#[command(version)]
#[command(about = "Compare the DNS records two name servers serve for a list of hosts")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// First name server (host or host:port)
    #[arg(short = 'a', long = "ns-a", value_name = "SERVER")]
    ns_a: Option<String>,

    /// Second name server (host or host:port)
    #[arg(short = 'b', long = "ns-b", value_name = "SERVER")]
    ns_b: Option<String>,

    /// File with one host per line
    #[arg(long, value_name = "FILE")]
    hosts: Option<String>,

    /// Output destination: "stdout" or a file path
    #[arg(long, value_name = "PATH")]
    out: Option<String>,

    /// Parent zone appended to every host; "@" in the host list is the zone itself
    #[arg(short = 'p', long, value_name = "ZONE")]
    parent: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Accept non-authoritative answers (compare recursive resolvers)
    #[arg(long)]
    recursive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server_a: cli.ns_a,
        server_b: cli.ns_b,
        hosts_path: cli.hosts,
        out_path: cli.out,
        parent: cli.parent,
        timeout_ms: cli.timeout_ms,
        accept_recursive_answers: cli.recursive,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsdiff v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DiffServices::new(&config)?;
    let hosts = hosts::load_hosts(
        &config.comparison.hosts_path,
        config.comparison.parent.as_deref(),
    )?;
    let mut out = output::open_output(&config.comparison)?;

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight queries");
            ctrl_c_token.cancel();
        }
    });

    info!(hosts = hosts.len(), "Comparing hosts");

    for host in &hosts {
        let diff = match services.diff_host.execute(host, &cancel).await {
            Ok(diff) => diff,
            Err(e) if e.is_cancelled() => bail!("Interrupted while comparing {}", host),
            Err(e) => return Err(e).with_context(|| format!("Failed to compare {}", host)),
        };

        output::write_host(&mut *out, host, &diff)
            .with_context(|| format!("Failed to write result for {}", host))?;
    }

    info!(hosts = hosts.len(), "Comparison complete");
    Ok(())
}
