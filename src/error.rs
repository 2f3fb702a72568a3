//! Error taxonomy for pricing and sweep generation.
//!
//! Nothing in the core panics on bad input. A request whose base parameters
//! are out of domain fails with [`PricingError::InvalidInput`] before any
//! arithmetic runs. A sweep sample that lands on a domain boundary is
//! reclassified as [`PricingError::NumericDegeneracy`] for that sample and
//! recorded as a [`SweepGap`](crate::sweep::SweepGap).

/// Errors produced by the pricing function and the session layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// A form field was never filled in.
    #[error("missing input: {field}")]
    MissingInput { field: &'static str },

    /// A parameter is outside the model's domain (non-positive or non-finite).
    #[error("invalid input: {field}={value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Finite, in-domain inputs priced to a non-finite value, or a sweep
    /// sample landed on a domain boundary of the varied input.
    #[error("numeric degeneracy: {reason}")]
    NumericDegeneracy {
        /// Varied input and its value, set when the failure is a sweep sample.
        sample: Option<(&'static str, f64)>,
        reason: String,
    },

    /// A sweep range cannot be sampled (bad step, width or sample count).
    #[error("invalid sweep for {variable}: {reason}")]
    InvalidSweep {
        variable: &'static str,
        reason: &'static str,
    },
}

impl PricingError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// Reclassifies a pricing failure at one sweep sample.
    pub(crate) fn at_sample(self, field: &'static str, x: f64) -> Self {
        let reason = match self {
            PricingError::NumericDegeneracy {
                sample: None,
                reason,
            } => reason,
            PricingError::NumericDegeneracy { sample: Some(_), .. } => return self,
            other => other.to_string(),
        };
        PricingError::NumericDegeneracy {
            sample: Some((field, x)),
            reason: format!("{field}={x}: {reason}"),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PricingError::MissingInput { field } | PricingError::InvalidInput { field, .. } => {
                Some(*field)
            }
            PricingError::NumericDegeneracy {
                sample: Some((field, _)),
                ..
            } => Some(*field),
            PricingError::NumericDegeneracy { sample: None, .. }
            | PricingError::InvalidSweep { .. } => None,
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_sample_becomes_degeneracy() {
        let err = PricingError::invalid("time", 0.0, "must be positive").at_sample("time", 0.0);
        match &err {
            PricingError::NumericDegeneracy { sample, reason } => {
                assert_eq!(*sample, Some(("time", 0.0)));
                assert!(reason.contains("must be positive"), "{reason}");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.field(), Some("time"));
        assert_eq!(err.clone().at_sample("strike", 1.0), err);
    }
}
