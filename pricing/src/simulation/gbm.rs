use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::common::models::DerivativeParameter;

/// Model params for the SDE
/// '''math
/// dS_t / S_t = mu dt + sigma dW_t
/// ''', where $dW_t ~ N(0, dt)$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
///
/// Sampling uses the exact lognormal solution, so there is no discretization
/// error at any horizon. Inputs are not validated; IEEE-754 semantics decide
/// what pathological parameters produce.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometricBrownianMotion {
    initial_value: f64,
    /// drift term
    mu: f64,
    /// volatility
    sigma: f64,
}

impl GeometricBrownianMotion {
    pub fn new(initial_value: f64, drift: f64, vola: f64) -> Self {
        Self {
            initial_value,
            mu: drift,
            sigma: vola,
        }
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Log-return over a horizon `dt` for the standard normal draw `z`.
    #[inline]
    pub fn log_increment(&self, dt: f64, z: f64) -> f64 {
        (self.mu - 0.5 * self.sigma.powi(2)) * dt + self.sigma * dt.sqrt() * z
    }

    /// $S_t = S_0 \exp((\mu - \sigma^2/2) t + \sigma \sqrt{t} z)$
    #[inline]
    pub fn value_at(&self, t: f64, z: f64) -> f64 {
        self.initial_value * self.log_increment(t, z).exp()
    }

    pub fn sample_terminal(&self, t: f64, standard_normals: ArrayView1<f64>) -> Array1<f64> {
        standard_normals.mapv(|z| self.value_at(t, z))
    }

    /// One row per path. Column 0 holds the initial value, column j the value
    /// after j steps of size `t / nr_steps`. The log-increments are summed
    /// along each row and exponentiated once per grid point.
    ///
    /// `nr_steps == 0` is not rejected: `dt` is infinite and every column
    /// after the first is infinite or NaN.
    pub fn sample_paths(
        &self,
        t: f64,
        nr_steps: usize,
        standard_normals: ArrayView2<f64>,
    ) -> Array2<f64> {
        let (nr_paths, nr_draws) = standard_normals.dim();
        let dt = t / nr_steps as f64;

        let mut paths = Array2::zeros((nr_paths, nr_draws + 1));
        for (normals, mut path) in standard_normals.outer_iter().zip(paths.outer_iter_mut()) {
            path[0] = self.initial_value;

            let mut log_return = 0.0_f64;
            for (step, z) in normals.iter().enumerate() {
                log_return += self.log_increment(dt, *z);
                path[step + 1] = self.initial_value * log_return.exp();
            }
        }
        paths
    }
}

impl From<&DerivativeParameter> for GeometricBrownianMotion {
    fn from(dp: &DerivativeParameter) -> Self {
        // under the risk neutral measure we have mu = r
        GeometricBrownianMotion::new(dp.asset_price, dp.rfr, dp.vola)
    }
}

/// Terminal prices of risk-neutral GBM,
/// `ST[i] = s0 * exp((r - sigma^2/2) * t + sigma * sqrt(t) * z[i])`.
pub fn simulate_terminal_gbm<'a>(
    s0: f64,
    r: f64,
    sigma: f64,
    t: f64,
    z: impl Into<ArrayView1<'a, f64>>,
) -> Array1<f64> {
    GeometricBrownianMotion::new(s0, r, sigma).sample_terminal(t, z.into())
}

/// Full risk-neutral GBM paths on an equally spaced grid with `nr_steps`
/// steps. `z` has one row per path; the result has one more column than `z`,
/// starting with `s0`.
///
/// Nothing is validated. With `nr_steps == 0` the step size `t / 0` is
/// infinite, so all columns but the first come out infinite or NaN.
pub fn simulate_gbm_paths<'a>(
    s0: f64,
    r: f64,
    sigma: f64,
    t: f64,
    nr_steps: usize,
    z: impl Into<ArrayView2<'a, f64>>,
) -> Array2<f64> {
    GeometricBrownianMotion::new(s0, r, sigma).sample_paths(t, nr_steps, z.into())
}
