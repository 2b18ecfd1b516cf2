use dnsdiff_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        server_a = %config.comparison.server_a,
        server_b = %config.comparison.server_b,
        hosts = %config.comparison.hosts_path,
        out = %config.comparison.out_path,
        "Configuration loaded"
    );

    Ok(config)
}
