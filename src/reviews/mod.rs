mod report;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::rating::{Rating, parse_histogram, rating_points};
use crate::report_helpers;

use report::{print_json, print_report};

/// One entry of the review-statistics input file.
#[derive(Debug, Deserialize)]
struct ReviewStats {
    package: String,
    #[serde(default)]
    app: String,
    histogram: Histogram,
    rating_count: Option<u64>,
    rating: Option<u32>,
}

/// Histograms arrive either as a 5-element array or as the legacy
/// bracketed string `"[n1, n2, n3, n4, n5]"` that review feeds emit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Histogram {
    Counts([u64; 5]),
    Text(String),
}

impl Histogram {
    fn counts(&self) -> Result<[u64; 5], Box<dyn Error>> {
        match self {
            Histogram::Counts(counts) => Ok(*counts),
            Histogram::Text(s) => parse_histogram(s),
        }
    }
}

pub fn run(
    file: Option<&Path>,
    json: bool,
    top: usize,
    sort_by: &str,
) -> Result<(), Box<dyn Error>> {
    let entries = match file {
        Some(path) => {
            let f = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
            read_stats(BufReader::new(f))?
        }
        None => read_stats(io::stdin().lock())?,
    };

    let mut results = build_ratings(entries);
    match sort_by {
        "reviews" => results.sort_by(|a, b| {
            b.rating_count()
                .cmp(&a.rating_count())
                .then_with(|| a.package_name().cmp(b.package_name()))
        }),
        "rating" => results.sort_by(|a, b| {
            b.rating()
                .cmp(&a.rating())
                .then_with(|| a.package_name().cmp(b.package_name()))
        }),
        _ => results.sort_by(|a, b| {
            b.sortable_rating()
                .total_cmp(&a.sortable_rating())
                .then_with(|| a.package_name().cmp(b.package_name()))
        }),
    }
    report_helpers::output_results(&mut results, top, json, print_json, print_report)
}

fn read_stats(reader: impl Read) -> Result<Vec<ReviewStats>, Box<dyn Error>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Turn review stats into Ratings. Entries with an unparseable string
/// histogram are reported and skipped; the rest of the feed survives.
fn build_ratings(entries: Vec<ReviewStats>) -> Vec<Rating> {
    let mut ratings = Vec::new();

    for entry in entries {
        let histogram = match entry.histogram.counts() {
            Ok(counts) => counts,
            Err(err) => {
                eprintln!("warning: {}: {err}", entry.package);
                continue;
            }
        };

        let total: u64 = histogram.iter().sum();
        let rating_count = entry.rating_count.unwrap_or(total);
        let rating = entry.rating.unwrap_or_else(|| mean_rating(&histogram, total));

        ratings.push(Rating::from_histogram(
            &entry.package,
            &entry.app,
            rating_count,
            rating,
            &histogram,
        ));
    }

    ratings
}

/// Mean star value of a histogram scaled to the 0–10 rating, rounded.
fn mean_rating(histogram: &[u64; 5], total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (rating_points(histogram) as f64 / total as f64 * 2.0).round() as u32
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
