use ndarray::{Array1, ArrayView1};

/// `max(ST[i] - strike, 0)` for every terminal price.
pub fn european_call_payoff<'a>(st: impl Into<ArrayView1<'a, f64>>, strike: f64) -> Array1<f64> {
    st.into().mapv(|s| positive_part(s - strike))
}

/// `max(strike - ST[i], 0)` for every terminal price.
pub fn european_put_payoff<'a>(st: impl Into<ArrayView1<'a, f64>>, strike: f64) -> Array1<f64> {
    st.into().mapv(|s| positive_part(strike - s))
}

/// Unlike `f64::max`, a NaN intrinsic value stays NaN.
#[inline]
fn positive_part(intrinsic: f64) -> f64 {
    if intrinsic > 0.0 || intrinsic.is_nan() {
        intrinsic
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseType {
    Call,
    Put,
}

impl ExerciseType {
    pub fn payoff<'a>(&self, st: impl Into<ArrayView1<'a, f64>>, strike: f64) -> Array1<f64> {
        match self {
            ExerciseType::Call => european_call_payoff(st, strike),
            ExerciseType::Put => european_put_payoff(st, strike),
        }
    }
}
