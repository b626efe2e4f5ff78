//! CLI for the SCS studio content toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scs_core::config;

use commands::{
    run_contact, run_generate, run_listing, run_resolve, run_subscribe, GenerateCommand,
};

/// Top-level CLI for the SCS studio content toolkit.
#[derive(Debug, Parser)]
#[command(name = "scs")]
#[command(about = "SCS: content sync and resolution for the studio site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the file listing and print the resolved page content.
    Resolve {
        /// Print the resolved content as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the raw file listing records.
    Listing,

    /// Subscribe an email address to the newsletter via the form relay.
    Subscribe {
        /// Email address to subscribe.
        email: String,
    },

    /// Send a contact request via the form relay.
    Contact {
        /// Sender name.
        #[arg(long)]
        name: String,
        /// Sender email address.
        #[arg(long)]
        email: String,
        /// Optional phone number.
        #[arg(long)]
        phone: Option<String>,
        /// Message body.
        #[arg(long)]
        message: String,
        /// Extra form field as KEY=VALUE; may be repeated.
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Generate admin content via the generative endpoint.
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { json } => run_resolve(&cfg, json)?,
            CliCommand::Listing => run_listing(&cfg)?,
            CliCommand::Subscribe { email } => run_subscribe(&cfg, &email)?,
            CliCommand::Contact {
                name,
                email,
                phone,
                message,
                fields,
            } => run_contact(&cfg, name, email, phone, message, fields)?,
            CliCommand::Generate { command } => run_generate(&cfg, command)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
