//! Explicit application state for an interactive front-end.
//!
//! A [`Session`] is owned by the UI layer and passed by reference. It holds the
//! current [`View`] and the last successfully submitted inputs; the pricing
//! core never reads it. Switching views is a plain state transition, and both
//! views call the core the same way.

use crate::error::PricingResult;
use crate::models::bs;
use crate::models::types::{InputForm, OptionParameters, PricePair};
use crate::sweep::{self, SensitivityReport, SweepConfig};
use serde::{Deserialize, Serialize};

/// The two screens of the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Calculator,
    Visualize,
}

/// What the visualize screen should show.
#[derive(Debug, Clone, PartialEq)]
pub struct Visualization {
    /// True when no inputs were submitted and the default set was used
    pub used_defaults: bool,
    pub report: SensitivityReport,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    view: View,
    inputs: Option<OptionParameters>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Last submitted inputs, if any.
    pub fn inputs(&self) -> Option<&OptionParameters> {
        self.inputs.as_ref()
    }

    /// Moves to `view`. Submitted inputs are kept across switches.
    pub fn switch_to(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(from = ?self.view, to = ?view, "switching view");
        }
        self.view = view;
    }

    /// Validates and prices a calculator submission.
    ///
    /// On success the inputs become the session's current inputs. On failure
    /// the previous inputs are left untouched.
    pub fn submit(&mut self, form: InputForm) -> PricingResult<PricePair> {
        let params = OptionParameters::try_from(form)?;
        let prices = bs::price(&params)?;
        self.inputs = Some(params);
        Ok(prices)
    }

    /// Parameters the visualize screen works from: the submitted inputs, or
    /// the default set when nothing has been submitted.
    pub fn effective_inputs(&self) -> (OptionParameters, bool) {
        match self.inputs {
            Some(params) => (params, false),
            None => (OptionParameters::default(), true),
        }
    }

    /// Computes the sensitivity sweeps for the current inputs.
    pub fn visualize(&self, config: &SweepConfig) -> PricingResult<Visualization> {
        let (params, used_defaults) = self.effective_inputs();
        if used_defaults {
            tracing::warn!(%params, "no inputs submitted, visualizing default values");
        }
        let report = sweep::sensitivity(&params, config)?;
        Ok(Visualization {
            used_defaults,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    #[test]
    fn test_starts_on_calculator_without_inputs() {
        let session = Session::new();
        assert_eq!(session.view(), View::Calculator);
        assert!(session.inputs().is_none());
    }

    #[test]
    fn test_inputs_survive_view_switches() {
        let mut session = Session::new();
        let form = InputForm::from(OptionParameters::new(100.0, 100.0, 1.0, 5.0, 20.0).unwrap());
        session.submit(form).unwrap();

        session.switch_to(View::Visualize);
        session.switch_to(View::Calculator);
        session.switch_to(View::Visualize);
        assert_eq!(session.view(), View::Visualize);
        assert_eq!(session.inputs().map(|p| p.spot), Some(100.0));
    }

    #[test]
    fn test_failed_submit_keeps_previous_inputs() {
        let mut session = Session::new();
        session
            .submit(InputForm::from(OptionParameters::default()))
            .unwrap();

        let mut form = InputForm::from(OptionParameters::default());
        form.strike = None;
        let err = session.submit(form).unwrap_err();
        assert_eq!(err, PricingError::MissingInput { field: "strike" });

        let mut form = InputForm::from(OptionParameters::default());
        form.volatility = Some(-3.0);
        assert!(session.submit(form).is_err());

        assert_eq!(session.inputs(), Some(&OptionParameters::default()));
    }

    #[test]
    fn test_visualize_falls_back_to_defaults() {
        let session = Session::new();
        let vis = session.visualize(&SweepConfig::standard()).unwrap();
        assert!(vis.used_defaults);
        assert_eq!(vis.report.params, OptionParameters::default());
    }

    #[test]
    fn test_both_views_price_identically() {
        let params = OptionParameters::new(48.0, 50.0, 0.75, 3.0, 35.0).unwrap();
        let mut session = Session::new();
        let prices = session.submit(InputForm::from(params)).unwrap();

        session.switch_to(View::Visualize);
        let vis = session.visualize(&SweepConfig::standard()).unwrap();
        assert!(!vis.used_defaults);

        // The strike sweep passes through K=50 exactly
        let at_k = vis
            .report
            .strike
            .call
            .iter()
            .find(|p| p.x == 50.0)
            .unwrap();
        assert_eq!(at_k.y, prices.call);
    }
}
