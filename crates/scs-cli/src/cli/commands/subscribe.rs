//! `scs subscribe <email>` – newsletter-subscribe via the form relay.

use anyhow::Result;
use scs_core::config::ScsConfig;
use scs_core::relay::{FormPayload, RelayClient};

pub fn run_subscribe(cfg: &ScsConfig, email: &str) -> Result<()> {
    let client = RelayClient::new(&cfg.relay_url)?;
    client.submit(&FormPayload::newsletter(email))?;
    println!("Subscribed {email} to the newsletter.");
    Ok(())
}
