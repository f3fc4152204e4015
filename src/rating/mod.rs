//! Rating value objects built from review histograms or popcon counters.
//!
//! Both construction paths produce the same read-only shape: a 0–10
//! rating, the sample size behind it, a secondary points metric, and a
//! `sortable_rating` usable as a ranking key. Review histograms are
//! dampened with per-bucket Wilson lower bounds; popcon ratings sort by
//! raw install count. The two sort keys order different things (review
//! quality vs. install popularity) and are not comparable.

mod dampen;

pub use dampen::{DAMPEN_POWER, dampened_rating, pnormaldist, wilson_score};

use std::error::Error;

use serde::Serialize;

/// Raw popularity-contest counters for one package.
///
/// `inst` counts every participating system with the package installed;
/// `vote`, `old` and `recent` partition those systems by usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopconCounters {
    pub inst: u64,
    pub vote: u64,
    pub old: u64,
    pub recent: u64,
}

/// Aggregated rating for one package. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    package_name: String,
    application_name: String,
    rating_count: u64,
    rating: u32,
    rating_points: f64,
    sortable_rating: f64,
}

impl Rating {
    /// Build a rating from a 5-bucket star histogram (index 0 = 1 star).
    ///
    /// `rating_count` and `rating` are pre-aggregated upstream values;
    /// the histogram only feeds the points sum and the dampened sort key.
    pub fn from_histogram(
        package_name: &str,
        application_name: &str,
        rating_count: u64,
        rating: u32,
        histogram: &[u64; 5],
    ) -> Self {
        Rating {
            package_name: package_name.to_string(),
            application_name: application_name.to_string(),
            rating_count,
            rating,
            rating_points: rating_points(histogram) as f64,
            sortable_rating: dampened_rating(histogram, DAMPEN_POWER) * 2.0,
        }
    }

    /// Build a rating from popcon counters.
    ///
    /// The sort key is the raw install count, undampened: popcon ranks
    /// by popularity, not by review quality. The points field holds
    /// `old / (inst - vote)`, the share of not-regularly-used installs
    /// that have gone stale.
    pub fn from_popcon(package_name: &str, counters: PopconCounters) -> Self {
        // inst is the whole sample; vote/old/recent partition it
        let installed = counters.inst;

        let rating = if installed > 0 {
            (counters.inst as f64 / installed as f64 * 10.0) as u32
        } else {
            0
        };

        let rating_points = if counters.inst != counters.vote {
            counters.old as f64 / (counters.inst as f64 - counters.vote as f64)
        } else {
            0.0
        };

        Rating {
            package_name: package_name.to_string(),
            application_name: String::new(),
            rating_count: installed,
            rating,
            rating_points,
            sortable_rating: counters.inst as f64,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Human-facing application name; empty for popcon-only records.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Total sample size backing the rating.
    pub fn rating_count(&self) -> u64 {
        self.rating_count
    }

    /// Normalized mean rating on the 0–10 scale.
    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn rating_points(&self) -> f64 {
        self.rating_points
    }

    /// Dampened (histogram) or raw-count (popcon) ranking key.
    pub fn sortable_rating(&self) -> f64 {
        self.sortable_rating
    }
}

/// Star-weighted sum of a histogram: one point per 1-star review up to
/// five points per 5-star review.
pub fn rating_points(histogram: &[u64; 5]) -> u64 {
    histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| (i as u64 + 1) * count)
        .sum()
}

/// Parse the bracketed histogram form `"[n1, n2, n3, n4, n5]"` into
/// counts of 1-star through 5-star reviews.
///
/// The format is externally imposed by review feeds; anything that is
/// not exactly five non-negative integers in brackets is an error.
pub fn parse_histogram(s: &str) -> Result<[u64; 5], Box<dyn Error>> {
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| format!("malformed histogram {s:?} (expected \"[n1, n2, n3, n4, n5]\")"))?;

    let mut counts = [0u64; 5];
    let mut filled = 0;
    for part in inner.split(',') {
        let part = part.trim();
        let count: u64 = part
            .parse()
            .map_err(|_| format!("malformed histogram {s:?}: {part:?} is not a count"))?;
        if filled == 5 {
            return Err(format!("malformed histogram {s:?}: expected 5 buckets").into());
        }
        counts[filled] = count;
        filled += 1;
    }
    if filled != 5 {
        return Err(format!("malformed histogram {s:?}: expected 5 buckets, got {filled}").into());
    }

    Ok(counts)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
