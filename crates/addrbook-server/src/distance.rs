//! Client for the external distance matrix API.
//!
//! One `GET` per origin/destination pair. The response body is shaped like
//! `{status, rows: [{elements: [{distance: {value}}]}]}` with the distance in
//! meters.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use addrbook_core::Coordinates;

/// Connection settings for the distance collaborator.
#[derive(Clone)]
pub struct DistanceConfig {
    /// Full endpoint URL, e.g. `https://host/maps/api/distancematrix/json`.
    pub base_url: String,
    /// Sent as the `key` query parameter.
    pub api_key: String,
    /// Applied to every request when set.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for DistanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Transport-level failures talking to the distance API.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// Connection, TLS, timeout or body read failure.
    #[error("distance request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a distance matrix JSON document.
    #[error("distance response parse failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What the collaborator reported for one origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceOutcome {
    /// Status `OK` with a distance element, in meters.
    Meters(f64),
    /// Non-OK status or no distance element.
    Unavailable,
}

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixElement {
    pub distance: Option<MatrixValue>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixValue {
    pub value: f64,
}

impl DistanceMatrixResponse {
    /// Reads the first element of the first row.
    pub fn outcome(&self) -> DistanceOutcome {
        if self.status != "OK" {
            return DistanceOutcome::Unavailable;
        }
        self.rows
            .first()
            .and_then(|row| row.elements.first())
            .and_then(|element| element.distance.as_ref())
            .map(|distance| DistanceOutcome::Meters(distance.value))
            .unwrap_or(DistanceOutcome::Unavailable)
    }
}

/// HTTP client for the distance matrix API.
///
/// Cheap to clone; the inner `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct DistanceClient {
    http: reqwest::Client,
    config: DistanceConfig,
}

impl DistanceClient {
    pub fn new(config: DistanceConfig) -> Result<Self, DistanceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(DistanceClient { http, config })
    }

    /// Asks for the travel distance from `origin` to `destination`.
    pub async fn distance(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<DistanceOutcome, DistanceError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("origins", origin.to_string()),
                ("destinations", destination.to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()
            .await?;

        // The HTTP status is not checked: the JSON `status` field decides.
        let body = response.text().await?;
        let parsed: DistanceMatrixResponse = serde_json::from_str(&body)?;
        Ok(parsed.outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> DistanceMatrixResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn ok_with_distance() {
        let resp = parse(
            r#"{"status":"OK","rows":[{"elements":[{"distance":{"text":"12 km","value":12345},"status":"OK"}]}]}"#,
        );
        assert_eq!(resp.outcome(), DistanceOutcome::Meters(12345.0));
    }

    #[test]
    fn non_ok_status_is_unavailable() {
        let resp = parse(
            r#"{"status":"REQUEST_DENIED","rows":[{"elements":[{"distance":{"value":10}}]}]}"#,
        );
        assert_eq!(resp.outcome(), DistanceOutcome::Unavailable);
    }

    #[test]
    fn missing_distance_is_unavailable() {
        let resp = parse(r#"{"status":"OK","rows":[{"elements":[{"status":"ZERO_RESULTS"}]}]}"#);
        assert_eq!(resp.outcome(), DistanceOutcome::Unavailable);
    }

    #[test]
    fn missing_rows_is_unavailable() {
        assert_eq!(parse(r#"{"status":"OK"}"#).outcome(), DistanceOutcome::Unavailable);
        assert_eq!(
            parse(r#"{"status":"OK","rows":[]}"#).outcome(),
            DistanceOutcome::Unavailable
        );
        assert_eq!(
            parse(r#"{"status":"OK","rows":[{"elements":[]}]}"#).outcome(),
            DistanceOutcome::Unavailable
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = DistanceConfig {
            base_url: "http://example.test".to_string(),
            api_key: "super-secret".to_string(),
            timeout: None,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
