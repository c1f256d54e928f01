//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Both fields are `Option` so that the handler owns validation: a missing
/// `url` must answer `400 URL is required` rather than a deserializer
/// rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten. Required, but treated as an opaque
    /// string; no well-formedness validation is performed.
    pub url: Option<String>,

    /// Optional custom short code. When absent or empty, a random code is
    /// generated.
    #[serde(default, rename = "shortCode")]
    pub short_code: Option<String>,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    /// The code the mapping was created under, lowercase in the wire name
    /// to match the established contract.
    pub shortcode: String,
}
