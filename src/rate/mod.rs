use std::error::Error;

use serde::Serialize;

use crate::rating::{DAMPEN_POWER, dampened_rating, parse_histogram, rating_points, wilson_score};
use crate::report_helpers;

/// Per-bucket slice of the breakdown.
#[derive(Serialize)]
struct Bucket {
    stars: usize,
    count: u64,
    wilson: f64,
}

/// Full breakdown for one histogram.
#[derive(Serialize)]
struct Breakdown {
    histogram: [u64; 5],
    total_ratings: u64,
    rating_points: u64,
    buckets: Vec<Bucket>,
    dampened_rating: f64,
    sortable_rating: f64,
}

pub fn run(histogram: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let counts = parse_histogram(histogram)?;
    let breakdown = compute(&counts);

    if json {
        report_helpers::print_json_stdout(&breakdown)
    } else {
        print_report(&breakdown);
        Ok(())
    }
}

fn compute(counts: &[u64; 5]) -> Breakdown {
    let total: u64 = counts.iter().sum();

    let buckets = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bucket {
            stars: i + 1,
            count,
            wilson: wilson_score(count, total, DAMPEN_POWER),
        })
        .collect();

    let dampened = dampened_rating(counts, DAMPEN_POWER);

    Breakdown {
        histogram: *counts,
        total_ratings: total,
        rating_points: rating_points(counts),
        buckets,
        dampened_rating: dampened,
        sortable_rating: dampened * 2.0,
    }
}

fn print_report(breakdown: &Breakdown) {
    let separator = report_helpers::separator(32);

    println!("Histogram Rating");
    println!("{separator}");
    println!(" {:<6} {:>7}  {:>8}", "Stars", "Count", "Wilson");
    println!("{separator}");
    for bucket in &breakdown.buckets {
        println!(
            " {:<6} {:>7}  {:>8.4}",
            bucket.stars, bucket.count, bucket.wilson
        );
    }
    println!("{separator}");
    println!(" Total ratings:   {}", breakdown.total_ratings);
    println!(" Rating points:   {}", breakdown.rating_points);
    println!(" Dampened rating: {:.2}", breakdown.dampened_rating);
    println!(" Sortable rating: {:.2}", breakdown.sortable_rating);
    println!("{separator}");
}
