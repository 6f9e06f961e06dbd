//! Error classification shared across pretor crates

/// Severity levels for error classification
///
/// These levels categorize errors by impact, so callers can pick an
/// appropriate logging level and user notification strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed (e.g. a retryable write)
    Warning,

    /// Operation failed but the system can continue
    Error,

    /// System cannot continue, requires immediate attention
    Critical,
}

impl ErrorSeverity {
    /// Human-readable severity name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "warning");
        assert_eq!(ErrorSeverity::Critical.as_str(), "critical");
    }
}
