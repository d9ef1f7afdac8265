use crate::error::PricingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized (continuously compounded) risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Discount factor $e^{-rT}$ from expiration back to today.
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }

    /// Checks that the parameters describe a non-degenerate option under GBM.
    pub fn validate(&self) -> Result<(), PricingError> {
        check("asset_price", self.asset_price, "positive and finite", |v| {
            v.is_finite() && v > 0.0
        })?;
        check("strike", self.strike, "non-negative and finite", |v| {
            v.is_finite() && v >= 0.0
        })?;
        check(
            "time_to_expiration",
            self.time_to_expiration,
            "positive and finite",
            |v| v.is_finite() && v > 0.0,
        )?;
        check("rfr", self.rfr, "finite", f64::is_finite)?;
        check("vola", self.vola, "non-negative and finite", |v| {
            v.is_finite() && v >= 0.0
        })?;
        Ok(())
    }
}

fn check(
    name: &'static str,
    value: f64,
    constraint: &'static str,
    is_valid: impl Fn(f64) -> bool,
) -> Result<(), PricingError> {
    if is_valid(value) {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            constraint,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonteCarloConfig {
    pub nr_paths: usize,
    /// number of time steps per path, only used by the path simulation
    pub nr_steps: usize,
    /// `None` seeds the generator from system entropy
    pub seed_nr: Option<u64>,
}

impl MonteCarloConfig {
    pub fn new(nr_paths: usize, nr_steps: usize, seed_nr: Option<u64>) -> Self {
        Self {
            nr_paths,
            nr_steps,
            seed_nr,
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.nr_paths == 0 {
            return Err(PricingError::NoPaths);
        }
        if self.nr_steps == 0 {
            return Err(PricingError::NoSteps);
        }
        Ok(())
    }
}
