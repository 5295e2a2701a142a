//! Resource loading commands.

use url::Url;

use crate::cli::icons::success;
use crate::config::Config;
use crate::loader::{HttpFetcher, ResourceRef, SiteFetcher, StaticLoader};

/// Load one resource relative to `page` and print it as JSON.
pub async fn cmd_load(config: &Config, resource: ResourceRef, page: &str) -> anyhow::Result<()> {
    let page = Url::parse(page).map_err(|e| anyhow::anyhow!("Invalid page URL {}: {}", page, e))?;
    let url = resource.resolve(&page)?;

    let fetcher = SiteFetcher::new(HttpFetcher::new(&config.http)?);
    let loader = StaticLoader::new(fetcher, page);
    let document = loader.load(&resource).await?;

    eprintln!("{} Loaded {}", success(), url);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
