//! Configuration display.

use crate::cli::icons::dim_arrow;
use crate::config::Config;

/// Print the effective configuration as TOML.
pub fn cmd_config_show(config: &Config) -> anyhow::Result<()> {
    let source = config
        .source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    eprintln!("  {} Source: {}", dim_arrow(), source);
    eprintln!(
        "  {} Storage: {}",
        dim_arrow(),
        config.storage_path().display()
    );

    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
