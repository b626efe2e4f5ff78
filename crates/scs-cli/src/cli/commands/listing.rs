//! `scs listing` – print the raw file listing records.

use anyhow::Result;
use scs_core::config::ScsConfig;
use scs_core::listing::ListingClient;

pub fn run_listing(cfg: &ScsConfig) -> Result<()> {
    let records = ListingClient::new(&cfg.listing_url)?.fetch()?;
    if records.is_empty() {
        println!("Listing is empty.");
    } else {
        println!("{:<12} {:<28} {}", "ID", "NAME", "URL");
        for r in records {
            let name = if r.name.is_empty() { "-" } else { r.name.as_str() };
            println!("{:<12} {:<28} {}", r.id, name, r.url);
        }
    }
    Ok(())
}
