//! # bs-sensitivity: Black-Scholes Pricing and Parameter Sensitivity Curves
//!
//! `bs-sensitivity` prices European calls and puts on a non-dividend-paying
//! underlying with the Black-Scholes closed form, and generates the data for
//! all-else-equal sensitivity charts: price against strike, volatility, time to
//! expiry and risk-free rate.
//!
//! ## Core Features
//!
//! - **Pricing**: validated closed-form call/put pair, never NaN or infinite
//! - **Sensitivity sweeps**: eight call/put curves with axis-range hints
//! - **Session state**: explicit calculator/visualize router for front-ends
//! - **Output**: CSV export and a 2×2 SVG panel chart
//!
//! ## Units
//!
//! [`OptionParameters`] carries the risk-free rate and the volatility in
//! **percent** (`rate: 4.5` is 4.5%). [`price`] converts them to decimals
//! internally, so every caller uses the same convention. The decimal kernel in
//! [`models::bs`] is available for callers that already hold fractions.
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_sensitivity::{default_configs, price, sensitivity, OptionParameters};
//!
//! let params = OptionParameters::new(52.5, 55.0, 0.5, 4.5, 27.0)?;
//! let prices = price(&params)?;
//! println!("{prices}");
//!
//! let report = sensitivity(&params, &default_configs::standard())?;
//! assert_eq!(report.strike.call.len(), 40);
//! # Ok::<(), bs_sensitivity::PricingError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod render;
pub mod session;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Errors
pub use error::{PricingError, PricingResult};

// Pricing
pub use models::bs::price;
pub use models::traits::{BlackScholes, OptionPricer};
pub use models::types::{InputForm, OptionParameters, PricePair};

// Sweeps
pub use sweep::{
    sensitivity, sensitivity_with, sweep_parameter, AxisRange, ParameterSweep, SensitivityReport,
    SweepConfig, SweepGap, SweepPoint, SweepSeries, SweepSpec, SweepVariable,
};

// Application layer
pub use config::{AppConfig, OutputConfig};
pub use session::{Session, View, Visualization};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Sweep resolution presets.
///
/// All presets share the same ranges (strike ±10, volatility ±15 points,
/// time ±0.5 years, rate ±5 points); they differ only in step size.
pub mod default_configs {
    use crate::sweep::SweepConfig;

    /// 40 samples per exclusive range: strike by 0.5, volatility by 0.75,
    /// time by 0.025, rate by 0.25.
    ///
    /// ```rust
    /// use bs_sensitivity::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.strike.step, 0.5);
    /// ```
    pub fn standard() -> SweepConfig {
        SweepConfig::standard()
    }

    /// Twice the samples of [`standard()`], for smoother curves.
    pub fn fine() -> SweepConfig {
        SweepConfig::fine()
    }

    /// Half the samples of [`standard()`].
    pub fn coarse() -> SweepConfig {
        SweepConfig::coarse()
    }
}
