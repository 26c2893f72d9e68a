//! badgen.net URL construction and badge download.

use reqwest::Url;

use crate::badge::ResolvedBadge;
use crate::error::BadgeError;

/// Base URL of the static badge endpoint.
pub const DEFAULT_SERVICE_URL: &str = "http://badgen.net/badge";

/// Build the badge URL: `<service>/<label>/<status>/<colour>`.
///
/// `icon` and `labelColor` are added as query parameters only when set and
/// non-empty.
pub fn build_badge_url(service_url: &str, badge: &ResolvedBadge) -> Result<Url, BadgeError> {
    let mut url = Url::parse(service_url).map_err(|e| {
        BadgeError::InvalidArgument(format!("invalid service URL {:?}: {}", service_url, e))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            BadgeError::InvalidArgument(format!(
                "service URL {:?} cannot take path segments",
                service_url
            ))
        })?
        .pop_if_empty()
        .push(&badge.label)
        .push(&badge.status)
        .push(&badge.colour);

    let params: Vec<(&str, &str)> = [
        ("icon", badge.icon.as_deref()),
        ("labelColor", badge.label_colour.as_deref()),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
    .collect();

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }

    Ok(url)
}

/// Fetch the badge and return the response body as-is.
///
/// The HTTP status is not checked: whatever the service answers with is the
/// badge.
pub async fn fetch_badge(client: &reqwest::Client, url: Url) -> Result<String, BadgeError> {
    let transport = |source: reqwest::Error| BadgeError::Transport {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(transport)?;
    response.text().await.map_err(transport)
}
