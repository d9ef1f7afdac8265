use ndarray::Array1;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::analytic::{BlackScholesMerton, OptionPrice};
use crate::common::models::{DerivativeParameter, MonteCarloConfig};
use crate::error::PricingError;
use crate::simulation::gbm::GeometricBrownianMotion;
use crate::simulation::monte_carlo::{discounted_mean, McEstimate, PathEvaluator};
use crate::simulation::normals::{rn_generator, NormalDraws};
use crate::simulation::payoff::ExerciseType;

/// Price a European call by simulating terminal prices only.
///
/// With `seed_nr` set the result is bit-for-bit reproducible; `None` seeds
/// from system entropy. Nothing is validated: `nr_paths == 0` returns NaN.
pub fn mc_price_european_call_terminal(
    s0: f64,
    strike: f64,
    r: f64,
    sigma: f64,
    t: f64,
    nr_paths: usize,
    seed_nr: Option<u64>,
) -> f64 {
    let dp = DerivativeParameter::new(s0, strike, t, r, sigma);
    debug!(nr_paths, ?seed_nr, "pricing european call from terminal prices");

    let mut rn_generator = rn_generator(seed_nr);
    price_european_with(&dp, nr_paths, ExerciseType::Call, &mut rn_generator)
}

/// Terminal-price Monte Carlo price drawing from the given generator.
pub fn price_european_with<R: Rng + ?Sized>(
    dp: &DerivativeParameter,
    nr_paths: usize,
    exercise_type: ExerciseType,
    rng: &mut R,
) -> f64 {
    let payoffs = terminal_payoffs(dp, nr_paths, exercise_type, rng);
    let price = discounted_mean(&payoffs, dp.rfr, dp.time_to_expiration);
    trace!(price, ?exercise_type, "terminal monte carlo price");
    price
}

/// Like [`price_european_with`], but also reports the standard error.
pub fn estimate_european_with<R: Rng + ?Sized>(
    dp: &DerivativeParameter,
    nr_paths: usize,
    exercise_type: ExerciseType,
    rng: &mut R,
) -> McEstimate {
    let payoffs = terminal_payoffs(dp, nr_paths, exercise_type, rng);
    let estimate = McEstimate::from_payoffs(&payoffs, dp.rfr, dp.time_to_expiration);
    trace!(
        price = estimate.price,
        std_error = estimate.std_error,
        ?exercise_type,
        "terminal monte carlo estimate"
    );
    estimate
}

fn terminal_payoffs<R: Rng + ?Sized>(
    dp: &DerivativeParameter,
    nr_paths: usize,
    exercise_type: ExerciseType,
    rng: &mut R,
) -> Array1<f64> {
    if nr_paths == 0 {
        warn!("no paths requested, the monte carlo estimate is undefined");
    }
    let standard_normals = rng.draw_standard_normal(nr_paths);
    let stock_gbm: GeometricBrownianMotion = dp.into();
    let st = stock_gbm.sample_terminal(dp.time_to_expiration, standard_normals.view());
    exercise_type.payoff(&st, dp.strike)
}

/// European option priced by Monte Carlo under risk-neutral GBM.
///
/// Unlike the free functions, construction validates the parameters. Every
/// pricing call starts a fresh generator from the configured seed, so calls
/// on the same instance are reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloEuropeanOption {
    option_params: DerivativeParameter,
    mc_config: MonteCarloConfig,
}

impl MonteCarloEuropeanOption {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        nr_paths: usize,
        nr_steps: usize,
        seed_nr: Option<u64>,
    ) -> Result<Self, PricingError> {
        let option_params =
            DerivativeParameter::new(asset_price, strike, time_to_expiration, rfr, vola);
        let mc_config = MonteCarloConfig::new(nr_paths, nr_steps, seed_nr);
        Self::from_params(option_params, mc_config)
    }

    pub fn from_params(
        option_params: DerivativeParameter,
        mc_config: MonteCarloConfig,
    ) -> Result<Self, PricingError> {
        option_params.validate()?;
        mc_config.validate()?;
        Ok(Self {
            option_params,
            mc_config,
        })
    }

    pub fn option_params(&self) -> &DerivativeParameter {
        &self.option_params
    }

    pub fn mc_config(&self) -> &MonteCarloConfig {
        &self.mc_config
    }

    fn terminal_estimate(&self, exercise_type: ExerciseType) -> McEstimate {
        debug!(
            nr_paths = self.mc_config.nr_paths,
            seed_nr = ?self.mc_config.seed_nr,
            ?exercise_type,
            "pricing european option from terminal prices"
        );
        let mut rn_generator = rn_generator(self.mc_config.seed_nr);
        estimate_european_with(
            &self.option_params,
            self.mc_config.nr_paths,
            exercise_type,
            &mut rn_generator,
        )
    }

    fn path_payoffs(&self, exercise_type: ExerciseType) -> Array1<f64> {
        let MonteCarloConfig {
            nr_paths,
            nr_steps,
            seed_nr,
        } = self.mc_config;
        debug!(nr_paths, nr_steps, ?seed_nr, ?exercise_type, "pricing european option on paths");

        let mut rn_generator = rn_generator(seed_nr);
        let standard_normals = rn_generator.draw_standard_normal_matrix(nr_paths, nr_steps);

        let stock_gbm: GeometricBrownianMotion = (&self.option_params).into();
        let paths = stock_gbm.sample_paths(
            self.option_params.time_to_expiration,
            nr_steps,
            standard_normals.view(),
        );

        let strike = self.option_params.strike;
        PathEvaluator::new(&paths).evaluate_terminal(|st| exercise_type.payoff(st, strike))
    }

    /// The price (theoretical value) of the European call option from terminal prices.
    pub fn call(&self) -> f64 {
        self.terminal_estimate(ExerciseType::Call).price
    }

    /// The price (theoretical value) of the European put option from terminal prices.
    pub fn put(&self) -> f64 {
        self.terminal_estimate(ExerciseType::Put).price
    }

    pub fn call_estimate(&self) -> McEstimate {
        self.terminal_estimate(ExerciseType::Call)
    }

    pub fn put_estimate(&self) -> McEstimate {
        self.terminal_estimate(ExerciseType::Put)
    }

    /// Call price from full paths with `nr_steps` steps each.
    pub fn call_on_paths(&self) -> f64 {
        let payoffs = self.path_payoffs(ExerciseType::Call);
        discounted_mean(&payoffs, self.option_params.rfr, self.option_params.time_to_expiration)
    }

    /// Put price from full paths with `nr_steps` steps each.
    pub fn put_on_paths(&self) -> f64 {
        let payoffs = self.path_payoffs(ExerciseType::Put);
        discounted_mean(&payoffs, self.option_params.rfr, self.option_params.time_to_expiration)
    }

    pub fn analytic_call(&self) -> f64 {
        BlackScholesMerton::call(&self.option_params)
    }

    pub fn analytic_put(&self) -> f64 {
        BlackScholesMerton::put(&self.option_params)
    }
}
