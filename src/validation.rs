use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid address format: {0}")]
    InvalidAddress(String),
}

/// Accepts `0x`-prefixed hex strings of any length; case is not significant.
pub fn validate_address(address: Option<&str>) -> Result<&str, ValidationError> {
    let address = address
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ValidationError::MissingParameter("address".to_string()))?;

    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| ValidationError::InvalidAddress(address.to_string()))?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidAddress(address.to_string()));
    }

    Ok(address)
}
