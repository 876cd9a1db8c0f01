//! Outgoing header computation.
//!
//! Headers are assembled in a fixed order:
//!
//! 1. caller input is rejected if it carries a line break;
//! 2. the library's necessary headers are copied;
//! 3. custom headers are appended;
//! 4. the client identifier is appended to `X-Goog-Api-Client`;
//! 5. `Authorization` and `Content-Type` are overwritten from the golden
//!    source, which is the necessary headers for Google-operated endpoints
//!    and the custom headers for everything else.
//!
//! Appending to a header that already has a value joins the values with
//! `", "`, so every header carries a single combined value.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::constants::{self, API_CLIENT_HEADER, GOOGLE_API_DOMAIN_SUFFIX};
use crate::error::{VertexError, VertexResult};
use crate::types::RequestOptions;

/// Headers whose value is taken from a single authoritative source.
pub const RESERVED_HEADERS: [HeaderName; 2] = [AUTHORIZATION, CONTENT_TYPE];

const API_CLIENT_LINE_BREAK: &str =
    "Found line break in apiClient request option field, please remove the line break and try again.";
const CUSTOM_HEADER_LINE_BREAK: &str =
    "Found line break in customHeaders request option field, please remove the line break and try again.";

/// Which header set decides the reserved headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenSource {
    /// Values computed by the library.
    Necessary,
    /// Values supplied by the caller.
    Custom,
}

/// Selects the authoritative header set.
pub fn golden_source(is_internal_endpoint: bool) -> GoldenSource {
    if is_internal_endpoint {
        GoldenSource::Necessary
    } else {
        GoldenSource::Custom
    }
}

/// Plain suffix match on the host; no DNS-aware parsing.
pub fn is_internal_endpoint(host: &str) -> bool {
    host.ends_with(GOOGLE_API_DOMAIN_SUFFIX)
}

/// Builds the headers every request carries.
pub fn necessary_headers(token: Option<&SecretString>) -> VertexResult<HeaderMap> {
    let token = token.map(|t| t.expose_secret().as_str()).unwrap_or_default();
    let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| VertexError::client_validation("Access token is not a valid header value."))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(constants::user_agent())
            .map_err(|_| VertexError::client_validation("User agent is not a valid header value."))?,
    );
    Ok(headers)
}

/// Rejects line breaks in the client identifier and custom headers.
pub fn validate_request_options(options: &RequestOptions) -> VertexResult<()> {
    if options.api_client.as_deref().is_some_and(has_line_break) {
        return Err(VertexError::client_validation(API_CLIENT_LINE_BREAK));
    }
    let custom = options.custom_headers.as_deref().unwrap_or_default();
    if custom
        .iter()
        .any(|(name, value)| has_line_break(name) || has_line_break(value))
    {
        return Err(VertexError::client_validation(CUSTOM_HEADER_LINE_BREAK));
    }
    Ok(())
}

/// Computes the outgoing header set.
pub fn merge_headers(
    necessary: &HeaderMap,
    options: Option<&RequestOptions>,
    is_internal_endpoint: bool,
) -> VertexResult<HeaderMap> {
    if let Some(options) = options {
        validate_request_options(options)?;
    }

    let mut outgoing = necessary.clone();

    let mut custom = HeaderMap::new();
    for (name, value) in options
        .and_then(|o| o.custom_headers.as_deref())
        .unwrap_or_default()
    {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| VertexError::client_validation(format!("Invalid custom header name: {name}")))?;
        append_combined(&mut custom, &name, value)?;
        append_combined(&mut outgoing, &name, value)?;
    }

    if let Some(api_client) = options.and_then(|o| o.api_client.as_deref()) {
        append_combined(&mut outgoing, &HeaderName::from_static(API_CLIENT_HEADER), api_client)?;
    }

    let golden = match golden_source(is_internal_endpoint) {
        GoldenSource::Necessary => necessary,
        GoldenSource::Custom => &custom,
    };
    for name in &RESERVED_HEADERS {
        if let Some(value) = golden.get(name) {
            outgoing.insert(name.clone(), value.clone());
        }
    }
    if let Some(authorization) = outgoing.get_mut(AUTHORIZATION) {
        authorization.set_sensitive(true);
    }

    Ok(outgoing)
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

// Joins on raw bytes so values that are not visible ASCII still accumulate.
fn append_combined(headers: &mut HeaderMap, name: &HeaderName, value: &str) -> VertexResult<()> {
    let mut combined = Vec::new();
    if let Some(existing) = headers.get(name) {
        combined.extend_from_slice(existing.as_bytes());
        combined.extend_from_slice(b", ");
    }
    combined.extend_from_slice(value.as_bytes());

    let value = HeaderValue::from_bytes(&combined).map_err(|_| {
        VertexError::client_validation(format!("Invalid value for header {name}"))
    })?;
    headers.insert(name.clone(), value);
    Ok(())
}
