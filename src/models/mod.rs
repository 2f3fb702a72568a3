pub mod bs;
pub mod types;

/// Common traits used by the sweep generator
pub mod traits {
    use crate::error::PricingResult;
    use crate::models::types::{OptionParameters, PricePair};

    /// A model that prices a European call/put pair from the five scalar inputs.
    pub trait OptionPricer {
        fn name(&self) -> &str;
        fn price(&self, params: &OptionParameters) -> PricingResult<PricePair>;
    }

    /// Closed-form Black-Scholes, see [`crate::models::bs::price`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BlackScholes;

    impl OptionPricer for BlackScholes {
        fn name(&self) -> &str {
            "black-scholes"
        }

        fn price(&self, params: &OptionParameters) -> PricingResult<PricePair> {
            crate::models::bs::price(params)
        }
    }
}
