//! Badge types, the workflow outcome table and badge resolution.
//!
//! Resolution turns the caller's raw flags into the exact label, status,
//! colour and icon that get sent to the badge service:
//!
//! - `workflow`: status must be a known workflow outcome (`success`,
//!   `failure`, `cancelled`, `skipped`); display text and colour come from
//!   [`OUTCOMES`] and the icon is always [`WORKFLOW_ICON`].
//! - `percentage`: status must be an integer between 0 and 100.
//! - `custom`: everything is passed through as given.

use std::fmt;
use std::str::FromStr;

use crate::error::BadgeError;

/// Icon shown on every workflow badge.
pub const WORKFLOW_ICON: &str = "github";

/// Colour used when nothing else determines one.
pub const DEFAULT_COLOUR: &str = "blue";

/// Display text and colour for a workflow outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub display: &'static str,
    pub colour: &'static str,
}

/// Workflow status keyword to display text and colour.
pub static OUTCOMES: [(&str, Outcome); 4] = [
    (
        "success",
        Outcome {
            display: "Passing",
            colour: "green",
        },
    ),
    (
        "failure",
        Outcome {
            display: "Failing",
            colour: "red",
        },
    ),
    (
        "cancelled",
        Outcome {
            display: "Cancelled",
            colour: "grey",
        },
    ),
    (
        "skipped",
        Outcome {
            display: "Skipped",
            colour: "grey",
        },
    ),
];

/// Look up a workflow status keyword in [`OUTCOMES`].
pub fn lookup_outcome(status: &str) -> Option<&'static Outcome> {
    OUTCOMES
        .iter()
        .find(|(keyword, _)| *keyword == status)
        .map(|(_, outcome)| outcome)
}

/// The kind of badge to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeType {
    #[default]
    Workflow,
    Percentage,
    Custom,
}

impl FromStr for BadgeType {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workflow" => Ok(Self::Workflow),
            "percentage" => Ok(Self::Percentage),
            "custom" => Ok(Self::Custom),
            other => Err(BadgeError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for BadgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Workflow => "workflow",
            Self::Percentage => "percentage",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Badge fields as supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct BadgeRequest {
    pub label: String,
    pub status: String,
    pub colour: Option<String>,
    pub label_colour: Option<String>,
    pub icon: Option<String>,
}

/// Badge fields ready to be sent to the badge service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBadge {
    pub label: String,
    pub status: String,
    pub colour: String,
    pub label_colour: Option<String>,
    pub icon: Option<String>,
}

/// Resolve a badge request according to its badge type.
///
/// # Errors
///
/// - [`BadgeError::InvalidArgument`] if the label is empty
/// - [`BadgeError::UnknownStatus`] for a workflow status not in [`OUTCOMES`]
/// - [`BadgeError::InvalidPercentage`] for a percentage outside `0..=100`
///
/// Custom badges take the status as given, empty or not.
pub fn resolve(
    badge_type: BadgeType,
    request: &BadgeRequest,
) -> Result<ResolvedBadge, BadgeError> {
    if request.label.is_empty() {
        return Err(BadgeError::InvalidArgument(
            "label must not be empty".to_string(),
        ));
    }

    match badge_type {
        BadgeType::Workflow => resolve_workflow(request),
        BadgeType::Percentage => resolve_percentage(request),
        BadgeType::Custom => Ok(resolve_custom(request)),
    }
}

fn resolve_workflow(request: &BadgeRequest) -> Result<ResolvedBadge, BadgeError> {
    let outcome = lookup_outcome(&request.status)
        .ok_or_else(|| BadgeError::UnknownStatus(request.status.clone()))?;

    Ok(ResolvedBadge {
        label: request.label.clone(),
        status: outcome.display.to_string(),
        colour: outcome.colour.to_string(),
        label_colour: request.label_colour.clone(),
        icon: Some(WORKFLOW_ICON.to_string()),
    })
}

fn resolve_percentage(request: &BadgeRequest) -> Result<ResolvedBadge, BadgeError> {
    let percentage = parse_percentage(&request.status)?;

    Ok(ResolvedBadge {
        label: request.label.clone(),
        status: format!("{}%", percentage),
        colour: percentage_colour(percentage).to_string(),
        label_colour: request.label_colour.clone(),
        icon: request.icon.clone(),
    })
}

fn resolve_custom(request: &BadgeRequest) -> ResolvedBadge {
    // Without a colour the URL would lose a path segment, so fall back to the
    // outcome colour for known keywords and the default otherwise.
    let colour = match &request.colour {
        Some(colour) => colour.clone(),
        None => lookup_outcome(&request.status)
            .map(|outcome| outcome.colour)
            .unwrap_or(DEFAULT_COLOUR)
            .to_string(),
    };

    ResolvedBadge {
        label: request.label.clone(),
        status: request.status.clone(),
        colour,
        label_colour: request.label_colour.clone(),
        icon: request.icon.clone(),
    }
}

/// Parse a percentage status, accepting integers from 0 to 100 inclusive.
pub fn parse_percentage(status: &str) -> Result<u8, BadgeError> {
    let value: i64 = status
        .trim()
        .parse()
        .map_err(|_| BadgeError::InvalidPercentage(status.to_string()))?;

    u8::try_from(value)
        .ok()
        .filter(|value| *value <= 100)
        .ok_or_else(|| BadgeError::InvalidPercentage(status.to_string()))
}

/// Colour for a percentage badge.
///
/// Placeholder: every percentage gets [`DEFAULT_COLOUR`] until a colour scale
/// is decided on.
pub fn percentage_colour(_percentage: u8) -> &'static str {
    DEFAULT_COLOUR
}
