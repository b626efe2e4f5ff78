//! `scs resolve` – fetch the listing and print the resolved page content.

use anyhow::Result;
use scs_core::config::ScsConfig;
use scs_core::listing::ListingClient;
use scs_core::resolve::Resolver;

pub fn run_resolve(cfg: &ScsConfig, json: bool) -> Result<()> {
    let resolver = Resolver::new(cfg.resolver.clone());

    // A failed fetch degrades to default content, it is not an error.
    let listing = match ListingClient::new(&cfg.listing_url)?.fetch() {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!("listing fetch failed, using default content: {:#}", err);
            eprintln!("warning: listing unavailable, showing default content");
            Vec::new()
        }
    };
    let content = resolver.resolve(&listing);

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    println!("{:<12} {:<8} {}", "SLOT", "SOURCE", "URL");
    for slot in &content.slots {
        let source = if slot.matched { "listing" } else { "default" };
        println!("{:<12} {:<8} {}", slot.slot, source, slot.url);
    }
    println!();
    if content.featured.is_empty() {
        println!("No featured items.");
    } else {
        println!("{:<4} {:<12} {:<20} {}", "#", "CATEGORY", "TITLE", "IMAGE");
        for (i, item) in content.featured.iter().enumerate() {
            println!(
                "{:<4} {:<12} {:<20} {}",
                i + 1,
                item.category.to_string(),
                item.title,
                item.image_url
            );
        }
    }
    Ok(())
}
