use anyhow::{Context, Result};
use calshare_core::{Desktop, ShareSite, TzdbProvider, build_share_url};
use owo_colors::OwoColorize;

use super::EventArgs;
use crate::config::Config;

pub fn run(site: Option<&str>, args: EventArgs, open_result: bool) -> Result<()> {
    let config = Config::load()?;

    let site_name = site
        .map(str::to_string)
        .or_else(|| config.default_site.clone())
        .unwrap_or_else(|| "google".to_string());
    let site: ShareSite = site_name.parse()?;

    let event = args.into_event(&config)?;
    let artifact = build_share_url(&event, site, &TzdbProvider::default(), &Desktop)?;

    if open_result && !site.is_file_based() {
        open::that(&artifact).with_context(|| format!("Failed to open {}", artifact))?;
        println!(
            "{}",
            format!("Opened {} link in your browser", site.name()).green()
        );
    } else {
        println!("{}", artifact);
    }

    Ok(())
}
