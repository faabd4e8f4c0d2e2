//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Largest page size Canvas honors.
const MAX_PER_PAGE: u32 = 100;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_url(&config.canvas.url)?;
    validate_token(&config.canvas.token)?;
    config.output_directory()?;
    validate_per_page(config.options.per_page)?;

    Ok(())
}

/// Validate the Canvas base URL.
pub fn validate_url(url: &str) -> Result<Url> {
    if url.trim().is_empty() {
        return Err(Error::MissingConfig("url".to_string()));
    }

    let parsed = Url::parse(url.trim()).map_err(|e| Error::ConfigValidation {
        field: "url".to_string(),
        message: format!("'{}' is not a valid URL: {}", url, e),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("URL must use http or https (got '{}')", parsed.scheme()),
        });
    }

    Ok(parsed)
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::MissingConfig("token".to_string()));
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "token".to_string(),
            message: "Token appears to be a placeholder. Generate one under Account > Settings."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the pagination page size.
pub fn validate_per_page(per_page: u32) -> Result<()> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(Error::ConfigValidation {
            field: "per_page".to_string(),
            message: format!("Must be between 1 and {} (got {})", MAX_PER_PAGE, per_page),
        });
    }

    Ok(())
}
