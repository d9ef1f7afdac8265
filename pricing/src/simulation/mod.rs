pub mod european_option;
pub mod gbm;
pub mod monte_carlo;
pub mod normals;
pub mod payoff;

pub use european_option::{
    estimate_european_with, mc_price_european_call_terminal, price_european_with,
    MonteCarloEuropeanOption,
};
pub use gbm::{simulate_gbm_paths, simulate_terminal_gbm, GeometricBrownianMotion};
pub use monte_carlo::{discounted_mean, McEstimate, PathEvaluator};
pub use normals::{rn_generator, NormalDraws};
pub use payoff::{european_call_payoff, european_put_payoff, ExerciseType};
