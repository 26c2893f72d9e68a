//! Create a status badge via badgen.net.
//!
//! Fetches a workflow, percentage or custom badge SVG and either saves it to
//! a file or sets it as a multi-line GitHub Actions step output.

use std::fs;

use anyhow::Result;
use clap::Parser;
use create_badge::commands::{
    self,
    CreateArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "create-badge",
    version,
    about = "Create a workflow, percentage or custom badge"
)]
struct Cli {
    #[command(flatten)]
    args: CreateArgs,
}

/// Check if any .env* files exist in the current directory.
fn has_env_files() -> bool {
    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(_) => return false,
    };

    let patterns = [".env", ".env.local", ".env.prod", ".env.dev", ".env.test"];

    patterns.iter().any(|pattern| {
        fs::metadata(current_dir.join(pattern))
            .map(|m| m.is_file())
            .unwrap_or(false)
    })
}

fn main() -> Result<()> {
    // BADGE_SERVICE_URL and friends may live in .env files
    if has_env_files()
        && let Err(e) = dotenvage::EnvLoader::new().and_then(|loader| loader.load())
    {
        eprintln!("Warning: Failed to load/decrypt env files: {}", e);
        eprintln!("Continuing with existing environment variables...");
    }

    let cli = Cli::parse();
    commands::create(cli.args)
}
