use crate::common::models::DerivativeParameter;
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// Without diffusion (or with a zero strike) the terminal price is known
    /// and the option is worth its discounted intrinsic value.
    fn degenerate_forward(dp: &DerivativeParameter) -> Option<f64> {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        if sigma_exp == 0.0 || dp.strike == 0.0 {
            Some(dp.asset_price - dp.strike * dp.discount_factor())
        } else {
            None
        }
    }

    fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        if let Some(forward_value) = Self::degenerate_forward(dp) {
            return forward_value.max(0.0);
        }
        let (d1, d2) = Self::d1_d2(dp);
        cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * dp.discount_factor()
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        if let Some(forward_value) = Self::degenerate_forward(dp) {
            return (-forward_value).max(0.0);
        }
        let (d1, d2) = Self::d1_d2(dp);
        cdf(-d2) * dp.strike * dp.discount_factor() - cdf(-d1) * dp.asset_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn normal_cdf() {
        let center_value = cdf(0.0);
        assert_eq!(center_value, 0.5);

        let sigma_top = cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413, 0.0001); // table value for 1.0
    }

    #[test]
    fn european_call() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert_approx_eq!(BlackScholesMerton::call(&dp), 58.8197, TOLERANCE);

        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_approx_eq!(BlackScholesMerton::call(&dp), 113.4155, TOLERANCE);

        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_approx_eq!(BlackScholesMerton::call(&dp), 10.4506, TOLERANCE);
    }

    #[test]
    fn european_put() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert_approx_eq!(BlackScholesMerton::put(&dp), 1.4311, TOLERANCE);

        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_approx_eq!(BlackScholesMerton::put(&dp), 13.2797, TOLERANCE);

        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_approx_eq!(BlackScholesMerton::put(&dp), 5.5735, TOLERANCE);
    }

    #[test]
    fn zero_volatility_at_the_forward() {
        // S = K and r = 0: d1 would be 0 / 0
        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.0, 0.0);
        assert_eq!(BlackScholesMerton::call(&dp), 0.0);
        assert_eq!(BlackScholesMerton::put(&dp), 0.0);
    }

    #[test]
    fn zero_volatility_is_discounted_intrinsic() {
        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.0);
        assert_approx_eq!(BlackScholesMerton::call(&dp), 100.0 - 100.0 * (-0.05_f64).exp(), 1e-12);
        assert_eq!(BlackScholesMerton::put(&dp), 0.0);

        let dp = DerivativeParameter::new(90.0, 100.0, 2.0, 0.01, 0.0);
        assert_eq!(BlackScholesMerton::call(&dp), 0.0);
        assert_approx_eq!(BlackScholesMerton::put(&dp), 100.0 * (-0.02_f64).exp() - 90.0, 1e-12);
    }

    #[test]
    fn zero_strike() {
        let dp = DerivativeParameter::new(250.0, 0.0, 1.5, 0.03, 0.3);
        assert!(dp.validate().is_ok());
        assert_eq!(BlackScholesMerton::call(&dp), 250.0);
        assert_eq!(BlackScholesMerton::put(&dp), 0.0);
    }

    #[test]
    fn european_put_call_parity() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15);
        let put_call_parity = BlackScholesMerton::call(&dp) - BlackScholesMerton::put(&dp);
        assert_approx_eq!(
            put_call_parity,
            dp.asset_price - dp.strike * dp.discount_factor(),
            1e-10
        );
    }
}
