//! Implements empirical tests of how evenly strategies spread keys over buckets.
use hashbench_core::{HashStrategy, Record};
use ndarray::prelude::*;
use ndarray::Zip;
use num_traits::{Float, NumAssignOps};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic.
pub fn chi2<V>(
    observed: ArrayView1<V>,
    expected: ArrayView1<V>,
    dof: Option<usize>,
) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    let chi2: V = Zip::from(&observed)
        .and(&expected)
        .fold(0.0.into(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff.powf(2.0.into()) / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = (1.0 - dist.cdf(chi2.to_f64().unwrap())).into();

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test.
pub fn chi2_uniformity<V>(observed: ArrayView1<V>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    let total_sum = observed.sum();
    let num_cells = observed.len();
    let expected_value = total_sum / (num_cells as f64).into();

    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);

    chi2(observed, expected.view(), None)
}

/// Counts how many of the `data` records `strategy` sends to each of `capacity` buckets.
pub fn bucket_histogram<S: HashStrategy>(
    strategy: &S,
    capacity: usize,
    data: &[Record],
) -> Array1<f64> {
    let mut histogram = Array1::<f64>::zeros(capacity);
    for record in data {
        histogram[strategy.index(record, capacity)] += 1.0;
    }
    histogram
}

/// Tests the bucket distribution of `strategy` over `data` for uniformity.
pub fn uniformity<S: HashStrategy>(
    strategy: &S,
    capacity: usize,
    data: &[Record],
) -> Chi2Statistic<f64> {
    debug_assert!(capacity > 1, "Uniformity is undefined for a single bucket");
    chi2_uniformity(bucket_histogram(strategy, capacity, data).view())
}
