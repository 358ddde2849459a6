use crate::{
    error::SourceError,
    filter::{FilterKey, FilterSpec, compile},
    predicate::{Predicate, conjoin},
    schema::Field,
    source::DataSource,
};
use serde::Serialize;

/// Histogram resolution for the price slider.
pub const PRICE_BUCKET_COUNT: usize = 20;

/// Clip quantile for the slider's upper edge. Extreme outlier prices
/// would otherwise flatten the whole histogram into one bucket.
pub const PERCENTILE_CLIP: f64 = 0.95;

///
/// PriceDistribution
///
/// Clip-and-bucket visualization of list prices under the current filters
/// (price bounds excluded). Not a statistically exact histogram.
///
/// Invariant: `buckets.iter().sum() + outlier_count` equals the number of
/// positive-price rows matching the context predicate, and
/// `display_max >= min` (degenerate single-price datasets collapse to
/// `min == display_max`).
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PriceDistribution {
    pub min: f64,
    pub display_max: f64,
    pub buckets: Vec<u64>,
    pub outlier_count: u64,
}

///
/// Compute the price distribution for a filter spec.
///
/// The context predicate drops `price_min`/`price_max` so the price-range
/// filter cannot distort the histogram of the very quantity it thresholds.
/// Zero matching rows is not an error: the zeroed result has empty
/// buckets.
///

pub fn analyze<S: DataSource + ?Sized>(
    source: &S,
    spec: &FilterSpec,
) -> Result<PriceDistribution, SourceError> {
    let mut fragments = compile(spec, &[FilterKey::PriceMin, FilterKey::PriceMax]);
    fragments.push(Predicate::gt(Field::ListPrice, 0_i64));
    let context = conjoin(&fragments);

    let mut prices: Vec<f64> = source
        .column(Field::ListPrice, &context)?
        .iter()
        .filter_map(|value| value.as_numeric())
        .filter(|price| *price > 0.0)
        .collect();
    prices.sort_by(f64::total_cmp);

    if prices.is_empty() {
        return Ok(PriceDistribution::default());
    }

    let count = prices.len();
    let min = prices[0];

    let percentile_index = ((count as f64 * PERCENTILE_CLIP).floor() as usize).min(count - 1);
    let mut display_max = prices[percentile_index];

    // Collapsed percentile on a small or uniform dataset: fall back to
    // the true maximum.
    if display_max <= min {
        display_max = prices[count - 1];
    }

    let mut bucket_size = (display_max - min) / PRICE_BUCKET_COUNT as f64;
    if bucket_size <= 0.0 {
        bucket_size = 1.0;
    }

    let mut buckets = vec![0_u64; PRICE_BUCKET_COUNT];
    let mut outlier_count = 0_u64;

    for &price in &prices {
        if price > display_max {
            outlier_count += 1;
            continue;
        }

        let index = (((price - min) / bucket_size).floor() as usize).min(PRICE_BUCKET_COUNT - 1);
        buckets[index] += 1;
    }

    Ok(PriceDistribution {
        min,
        display_max,
        buckets,
        outlier_count,
    })
}
