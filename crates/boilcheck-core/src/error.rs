use thiserror::Error;

/// Application-wide error types for boilcheck.
///
/// Every variant is fatal to the current run: the check fails loudly on the
/// first violation of the live-animation contract and nothing is retried.
#[derive(Error, Debug)]
pub enum AppError {
    /// The `baseFrequency` attribute was absent or non-numeric during sampling.
    #[error("feTurbulence baseFrequency is unavailable")]
    MissingAttribute,

    /// A phase's sampled spread stayed below the minimum-variability delta.
    #[error("{tag} baseFrequency spread too small ({spread})")]
    InsufficientVariability { tag: String, spread: f64 },

    /// The slider control never became visible within the bounded wait.
    #[error("Slider control not visible within {0} ms")]
    ControlNotFound(u64),

    /// The maximum-scale spread did not widen enough relative to the
    /// minimum-scale spread.
    #[error(
        "Maximum-scale response did not widen enough compared to minimum scale: \
         min_spread={min_spread}, max_spread={max_spread}"
    )]
    InsufficientScaling { min_spread: f64, max_spread: f64 },

    /// The maximum-scale spread fell below the absolute floor.
    #[error("Maximum-scale spread is too small: {0}")]
    SpreadTooSmall(f64),

    /// Page navigation or initial render failed.
    #[error("Navigation error: {0}")]
    NavigationError(String),

    /// The browser-automation collaborator failed, passed through unchanged.
    #[error("Browser error: {0}")]
    BrowserError(String),

    /// A bounded outer wait elapsed.
    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if this error means the page violated the
    /// slider-drives-animation contract, as opposed to the check
    /// infrastructure failing before a verdict could be reached.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AppError::MissingAttribute
                | AppError::InsufficientVariability { .. }
                | AppError::ControlNotFound(_)
                | AppError::InsufficientScaling { .. }
                | AppError::SpreadTooSmall(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_violations_are_classified() {
        assert!(AppError::MissingAttribute.is_contract_violation());
        assert!(
            AppError::InsufficientVariability {
                tag: "Minimum scale".into(),
                spread: 0.0,
            }
            .is_contract_violation()
        );
        assert!(AppError::ControlNotFound(10_000).is_contract_violation());
        assert!(
            AppError::InsufficientScaling {
                min_spread: 0.001,
                max_spread: 0.0012,
            }
            .is_contract_violation()
        );
        assert!(AppError::SpreadTooSmall(0.0005).is_contract_violation());
    }

    #[test]
    fn infrastructure_failures_are_not_contract_violations() {
        assert!(!AppError::NavigationError("dns failure".into()).is_contract_violation());
        assert!(!AppError::BrowserError("tab crashed".into()).is_contract_violation());
        assert!(!AppError::Timeout(30).is_contract_violation());
    }

    #[test]
    fn scaling_message_carries_both_spreads() {
        let err = AppError::InsufficientScaling {
            min_spread: 0.001,
            max_spread: 0.0012,
        };
        let message = err.to_string();
        assert!(message.contains("min_spread=0.001"));
        assert!(message.contains("max_spread=0.0012"));
    }
}
