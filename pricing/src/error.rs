use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter '{name}': must be {constraint}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
    #[error("the number of simulated paths must be positive")]
    NoPaths,
    #[error("the number of time steps must be positive")]
    NoSteps,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PricingError::InvalidParameter {
            name: "vola",
            value: -0.2,
            constraint: "non-negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter 'vola': must be non-negative, got -0.2"
        );
        assert!(PricingError::NoPaths.to_string().contains("paths"));
        assert!(PricingError::NoSteps.to_string().contains("time steps"));
    }
}
