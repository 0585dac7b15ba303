/// Custom error types for the time service
#[derive(Debug, thiserror::Error)]
pub enum TimeServiceError {
    #[error("Unknown timezone: {timezone}")]
    UnknownTimezone { timezone: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TimeServiceResult<T> = Result<T, TimeServiceError>;

#[cfg(test)]
mod tests {
    use super::TimeServiceError;

    #[test]
    fn test_unknown_timezone_display() {
        let error = TimeServiceError::UnknownTimezone {
            timezone: "Invalid/Zone".to_string(),
        };

        assert_eq!(error.to_string(), "Unknown timezone: Invalid/Zone");
    }
}
