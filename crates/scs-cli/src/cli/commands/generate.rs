//! `scs generate` – admin content generation via the generative endpoint.

use anyhow::{Context, Result};
use clap::Subcommand;
use scs_core::config::ScsConfig;
use scs_core::genai::{CredentialStatus, GenAiClient};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Generate short text for a prompt.
    Text {
        /// Free-text prompt.
        prompt: String,
    },

    /// Generate an image for a prompt and write it to a file.
    Image {
        /// Free-text prompt.
        prompt: String,

        /// Output file path for the image bytes.
        #[arg(long, short, default_value = "generated.png")]
        output: PathBuf,
    },
}

pub fn run_generate(cfg: &ScsConfig, command: GenerateCommand) -> Result<()> {
    let client = GenAiClient::from_config(&cfg.genai);
    if client.status() == CredentialStatus::MissingCredential {
        anyhow::bail!(
            "generative API credential not set; export SCS_GENAI_API_KEY or set [genai] api_key in the config file"
        );
    }

    match command {
        GenerateCommand::Text { prompt } => {
            let text = client.generate_text(&prompt)?;
            println!("{text}");
        }
        GenerateCommand::Image { prompt, output } => {
            let bytes = client.generate_image(&prompt)?;
            std::fs::write(&output, &bytes)
                .with_context(|| format!("write image to {}", output.display()))?;
            println!("Wrote {} bytes to {}", bytes.len(), output.display());
        }
    }
    Ok(())
}
