//! Monte Carlo pricing of European options under the Black-Scholes model.
//!
//! Terminal prices (or full paths) of risk-neutral geometric Brownian motion
//! are sampled from standard normal draws with the exact lognormal solution,
//! a payoff is applied and the mean payoff is discounted with `exp(-r T)`.
//!
//! ```
//! use pricing::{mc_price_european_call_terminal, BlackScholesMerton, DerivativeParameter, OptionPrice};
//!
//! let price = mc_price_european_call_terminal(100.0, 100.0, 0.05, 0.2, 1.0, 200_000, Some(42));
//! let reference = BlackScholesMerton::call(&DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.2));
//! assert!((price - reference).abs() < 0.2);
//! ```

pub mod analytic;
pub mod common;
pub mod error;
pub mod simulation;

pub use analytic::{BlackScholesMerton, OptionPrice};
pub use common::{DerivativeParameter, MonteCarloConfig};
pub use error::PricingError;
pub use simulation::{
    discounted_mean, european_call_payoff, european_put_payoff, mc_price_european_call_terminal,
    simulate_gbm_paths, simulate_terminal_gbm, ExerciseType, McEstimate, MonteCarloEuropeanOption,
    NormalDraws,
};
