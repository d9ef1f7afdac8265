// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::simulation::normals::{rn_generator, NormalDraws};
use pricing::{
    discounted_mean, european_call_payoff, mc_price_european_call_terminal, simulate_gbm_paths,
    simulate_terminal_gbm, MonteCarloEuropeanOption,
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_stock_price_simulation);
criterion_main!(benches);

const S0: f64 = 300.0;
const STRIKE: f64 = 310.0;
const RFR: f64 = 0.03;
const VOLA: f64 = 0.25;
const TTE: f64 = 1.0;

pub fn criterion_stock_price_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stock price Monte Carlo simulation");

    group.bench_function("end to end terminal call price", |b| {
        b.iter(|| {
            mc_price_european_call_terminal(S0, STRIKE, RFR, VOLA, TTE, black_box(100_000), Some(42))
        })
    });

    let z = rn_generator(Some(42)).draw_standard_normal(100_000);
    group.bench_function("terminal prices, payoff and discounting", |b| {
        b.iter(|| {
            let st = simulate_terminal_gbm(S0, RFR, VOLA, TTE, black_box(&z));
            discounted_mean(&european_call_payoff(&st, STRIKE), RFR, TTE)
        })
    });

    let z = rn_generator(Some(42)).draw_standard_normal_matrix(30_000, 200);
    group.bench_function("full paths from stored draws", |b| {
        b.iter(|| simulate_gbm_paths(S0, RFR, VOLA, TTE, 200, black_box(&z)))
    });

    let mc_option =
        MonteCarloEuropeanOption::new(S0, STRIKE, TTE, RFR, VOLA, 30_000, 200, Some(42)).unwrap();
    group.bench_function("call on paths", |b| b.iter(|| mc_option.call_on_paths()));

    group.finish()
}
