//! Error types for query-state locations

/// Errors raised while constructing a location
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// Input is not an absolute URL
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_display() {
        let err = LocationError::from(url::ParseError::RelativeUrlWithoutBase);
        assert_eq!(err.to_string(), "invalid url: relative URL without a base");
    }
}
