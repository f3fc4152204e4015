//! Wilson-score dampening for 5-star review histograms.
//!
//! Averaging star ratings ranks an item with one 5-star review above an
//! item with four hundred 4.8-star reviews. Scoring each bucket with the
//! lower bound of a Wilson confidence interval instead pulls sparsely
//! sampled buckets toward 0, so items with few reviews converge to the
//! neutral midpoint rather than swinging to the extremes.

/// Exponent fed to the per-bucket Wilson scores when dampening a histogram.
pub const DAMPEN_POWER: f64 = 0.1;

/// Coefficients of the Odeh–Evans rational approximation to the inverse
/// standard-normal CDF.
const PNORM_B: [f64; 11] = [
    1.570796288,
    0.03706987906,
    -0.8364353589e-3,
    -0.2250947176e-3,
    0.6841218299e-5,
    0.5824238515e-5,
    -0.104527497e-5,
    0.8360937017e-7,
    -0.3231081277e-8,
    0.3657763036e-9,
    0.6936233982e-12,
];

/// Quantile function of the standard normal distribution.
///
/// Inputs outside (0, 1) return 0 rather than erroring; callers treat
/// that as a safe degenerate default.
pub fn pnormaldist(qn: f64) -> f64 {
    if qn < 0.0 || qn > 1.0 {
        return 0.0;
    }
    if qn == 0.5 {
        return 0.0;
    }

    let w1 = if qn > 0.5 { 1.0 - qn } else { qn };
    let w3 = -(4.0 * w1 * (1.0 - w1)).ln();
    let mut w1 = PNORM_B[0];
    for (i, b) in PNORM_B.iter().enumerate().skip(1) {
        w1 += b * w3.powi(i as i32);
    }

    if qn > 0.5 {
        (w1 * w3).sqrt()
    } else {
        -(w1 * w3).sqrt()
    }
}

/// Lower bound of the Wilson score confidence interval for a binomial
/// proportion of `positive` successes out of `total` trials.
pub fn wilson_score(positive: u64, total: u64, power: f64) -> f64 {
    if total == 0 || positive == 0 {
        // phat = 0 collapses the closed form to exactly 0
        return 0.0;
    }

    let n = total as f64;
    let phat = positive as f64 / n;
    let z = pnormaldist(1.0 - power / 2.0);

    (phat + z * z / (2.0 * n) - z * ((phat * (1.0 - phat) + z * z / (4.0 * n)) / n).sqrt())
        / (1.0 + z * z / n)
}

/// Dampened aggregate over a 5-bucket star histogram (index 0 = 1 star).
///
/// Each bucket is treated as `count` successes out of the histogram
/// total and scored with its Wilson lower bound, weighted by signed
/// distance from the neutral 3-star midpoint. The result lives on the
/// 1–5 star scale with 3 meaning "no signal". Anything but exactly 5
/// buckets yields the degenerate 0.
pub fn dampened_rating(ratings: &[u64], power: f64) -> f64 {
    if ratings.len() != 5 {
        return 0.0;
    }

    let total: u64 = ratings.iter().sum();
    let mut sum_scores = 0.0;
    for (i, &count) in ratings.iter().enumerate() {
        let ws = wilson_score(count, total, power);
        sum_scores += (i as f64 + 1.0 - 3.0) * ws;
    }

    sum_scores + 3.0
}

#[cfg(test)]
#[path = "dampen_test.rs"]
mod tests;
