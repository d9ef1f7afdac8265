use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_hc::Hc128Rng;

/// Source of i.i.d. standard normal draws.
///
/// Implemented for every [`rand::Rng`], so any seedable generator can be
/// plugged into the pricers. Reproducibility is only promised for the same
/// generator algorithm and seed.
pub trait NormalDraws {
    /// `count` draws as a 1-D sample, one per path.
    fn draw_standard_normal(&mut self, count: usize) -> Array1<f64>;

    /// Row-major `(nr_paths, nr_steps)` matrix of draws, one row per path.
    fn draw_standard_normal_matrix(&mut self, nr_paths: usize, nr_steps: usize) -> Array2<f64>;
}

impl<R: Rng + ?Sized> NormalDraws for R {
    fn draw_standard_normal(&mut self, count: usize) -> Array1<f64> {
        Array1::random_using(count, StandardNormal, self)
    }

    fn draw_standard_normal_matrix(&mut self, nr_paths: usize, nr_steps: usize) -> Array2<f64> {
        Array2::random_using((nr_paths, nr_steps), StandardNormal, self)
    }
}

/// The generator used by the pricers: HC-128, seeded deterministically if a
/// seed is given, otherwise from system entropy.
pub fn rn_generator(seed_nr: Option<u64>) -> Hc128Rng {
    match seed_nr {
        Some(seed_nr) => Hc128Rng::seed_from_u64(seed_nr),
        None => Hc128Rng::from_entropy(),
    }
}
