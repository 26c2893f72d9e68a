//! Create a badge and deliver it to a file or to the GitHub Actions output.
//!
//! # Examples
//!
//! ```bash
//! # Workflow badge written to a file
//! create-badge --label build --status success --path build.svg
//!
//! # Coverage badge exposed as the `badge` step output (uses GITHUB_OUTPUT)
//! create-badge -l coverage -s 87 -t percentage
//!
//! # Fully custom badge
//! create-badge -l msrv -s 1.93 -t custom --colour orange --icon rust --label-colour 555
//! ```

use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use cargo_plugin_utils::logger::Logger;
use clap::Parser;

use crate::badge::{
    BadgeRequest,
    BadgeType,
    resolve,
};
use crate::badgen::{
    DEFAULT_SERVICE_URL,
    build_badge_url,
    fetch_badge,
};
use crate::output::{
    DEFAULT_OUTPUT_NAME,
    OutputTarget,
    deliver,
    select_target,
};

/// Arguments for creating a badge.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// The left hand badge text.
    #[arg(short = 'l', long)]
    pub label: String,

    /// The right hand badge text.
    ///
    /// For `workflow` badges this is the job outcome (`success`, `failure`,
    /// `cancelled` or `skipped`); for `percentage` badges an integer from 0
    /// to 100.
    #[arg(short = 's', long)]
    pub status: String,

    /// The background colour of the status part (custom badges only).
    #[arg(short = 'c', long = "color", visible_alias = "colour")]
    pub colour: Option<String>,

    /// The background colour of the label part.
    #[arg(long = "label-colour", visible_alias = "label-color")]
    pub label_colour: Option<String>,

    /// The icon to show next to the label (ignored for workflow badges).
    #[arg(short = 'i', long)]
    pub icon: Option<String>,

    /// Save the badge to this file instead of setting a step output.
    #[arg(short = 'p', long)]
    pub path: Option<PathBuf>,

    /// Badge type.
    ///
    /// - `workflow`: derive text and colour from a workflow outcome
    /// - `percentage`: show an integer percentage
    /// - `custom`: use the given colour, icon and label colour as-is
    #[arg(short = 't', long = "type", default_value = "workflow")]
    pub badge_type: String,

    /// Base URL of the badge service.
    #[arg(long, env = "BADGE_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Name of the step output that receives the badge.
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// Path to GitHub Actions output file.
    ///
    /// Used when `--path` is not given. Defaults to the `GITHUB_OUTPUT`
    /// environment variable; without either the badge is written to
    /// `badge.svg.tmp`.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,
}

impl CreateArgs {
    fn badge_request(&self) -> BadgeRequest {
        BadgeRequest {
            label: self.label.clone(),
            status: self.status.clone(),
            colour: self.colour.clone(),
            label_colour: self.label_colour.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// Create a badge and deliver it.
///
/// # Errors
///
/// Returns an error if:
/// - The badge type, status or percentage is invalid (see
///   [`BadgeError`](crate::error::BadgeError))
/// - The badge service cannot be reached
/// - The output file cannot be written
pub fn create(args: CreateArgs) -> Result<()> {
    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(create_with_client(args, &client)).map(|_| ())
}

/// Create a badge using the given HTTP client.
///
/// Returns where the badge was delivered.
pub async fn create_with_client(
    args: CreateArgs,
    client: &reqwest::Client,
) -> Result<OutputTarget> {
    let mut logger = Logger::new();

    let badge_type: BadgeType = args.badge_type.parse()?;
    logger.status("Resolving", &format!("{} badge", badge_type));
    let badge = resolve(badge_type, &args.badge_request())?;
    logger.finish();

    let url = build_badge_url(&args.service_url, &badge)?;
    logger.status("Fetching", url.as_str());
    let svg = fetch_badge(client, url).await?;
    logger.finish();

    let target = select_target(args.path, args.github_output, &args.output_name);
    match &target {
        OutputTarget::File(path) => {
            logger.status("Saving", &path.display().to_string());
        }
        OutputTarget::CiOutput { file, name } => {
            logger.status("Setting", &format!("output {} in {}", name, file.display()));
        }
    }
    deliver(&target, &svg)?;
    logger.finish();

    Ok(target)
}
