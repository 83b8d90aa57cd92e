use crate::utils::error::{Error, Result};
use url::Url;

/// Reject empty or whitespace-only call parameters before any network
/// round-trip is wasted on them.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{field_name} cannot be empty"
        )));
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{field_name} cannot be empty"
        )));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(Error::InvalidArgument(format!(
                "{field_name}: unsupported URL scheme: {scheme}"
            ))),
        },
        Err(e) => Err(Error::InvalidArgument(format!(
            "{field_name}: invalid URL format: {e}"
        ))),
    }
}
