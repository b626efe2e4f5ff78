//! `scs contact` – send a contact request via the form relay.

use anyhow::Result;
use scs_core::config::ScsConfig;
use scs_core::relay::{ContactRequest, FormPayload, RelayClient};

pub fn run_contact(
    cfg: &ScsConfig,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    fields: Vec<String>,
) -> Result<()> {
    let request = ContactRequest {
        name,
        email,
        phone,
        message,
    };
    let mut payload = FormPayload::contact(&request);
    for field in &fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("--field must be KEY=VALUE, got: {field}"))?;
        payload = payload.with_field(key, value);
    }

    let client = RelayClient::new(&cfg.relay_url)?;
    client.submit(&payload)?;
    println!("Contact request sent. The studio will reply to {}.", request.email);
    Ok(())
}
