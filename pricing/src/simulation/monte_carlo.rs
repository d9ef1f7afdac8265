use ndarray::{Array1, ArrayView1, ArrayView2};

/// Discounted Monte Carlo estimator $e^{-rT} \frac{1}{n} \sum_i x_i$.
///
/// An empty sample gives NaN.
pub fn discounted_mean<'a>(x: impl Into<ArrayView1<'a, f64>>, r: f64, t: f64) -> f64 {
    let x = x.into();
    (-r * t).exp() * (x.sum() / x.len() as f64)
}

/// Monte Carlo price together with its standard error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McEstimate {
    pub price: f64,
    pub std_error: f64,
}

impl McEstimate {
    /// Discounted mean of the payoffs and `e^{-rT} s / sqrt(n)` with the
    /// sample standard deviation `s` (n - 1 denominator).
    ///
    /// A single payoff carries no information on the spread: its standard
    /// error is infinite, so every confidence interval is unbounded. An empty
    /// sample gives NaN for both fields.
    pub fn from_payoffs<'a>(payoffs: impl Into<ArrayView1<'a, f64>>, r: f64, t: f64) -> Self {
        let payoffs = payoffs.into();
        let nr_samples = payoffs.len() as f64;
        let disc_factor = (-r * t).exp();

        let mean = payoffs.sum() / nr_samples;
        let std_error = match payoffs.len() {
            0 => f64::NAN,
            1 => f64::INFINITY,
            _ => {
                let sum_sq = payoffs.fold(0.0_f64, |acc, x| acc + (x - mean).powi(2));
                disc_factor * (sum_sq / (nr_samples - 1.0)).sqrt() / nr_samples.sqrt()
            }
        };

        Self {
            price: disc_factor * mean,
            std_error,
        }
    }

    /// `price -/+ z * std_error`, e.g. `z = 1.96` for 95%.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        (self.price - z * self.std_error, self.price + z * self.std_error)
    }

    pub fn contains(&self, value: f64, z: f64) -> bool {
        let (lower, upper) = self.confidence_interval(z);
        lower <= value && value <= upper
    }
}

/// Applies a path function to every row of a path matrix.
pub struct PathEvaluator<'a> {
    paths: ArrayView2<'a, f64>,
}

impl<'a> PathEvaluator<'a> {
    pub fn new(paths: impl Into<ArrayView2<'a, f64>>) -> Self {
        Self {
            paths: paths.into(),
        }
    }

    pub fn evaluate(&self, path_fn: impl Fn(ArrayView1<f64>) -> f64) -> Array1<f64> {
        self.paths.outer_iter().map(path_fn).collect()
    }

    /// Applies `payoff` to the last column, i.e. the terminal values.
    pub fn evaluate_terminal(
        &self,
        payoff: impl FnOnce(ArrayView1<f64>) -> Array1<f64>,
    ) -> Array1<f64> {
        let last = self.paths.ncols().saturating_sub(1);
        payoff(self.paths.column(last))
    }
}
